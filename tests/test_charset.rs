use rpawogen::charset::*;
use rpawogen::error::PassGenError;
use std::collections::HashSet;

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharClass) -> GenerationConfig {
        let mut config = GenerationConfig::default();
        for other in CharClass::ALL {
            config.set_class(other, other == class);
        }
        config
    }

    #[test]
    fn test_lowercase_only_charset() {
        let charset = build_charset(&only(CharClass::Lowercase));
        assert_eq!(charset.to_string(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_each_single_class() {
        for class in CharClass::ALL {
            assert_eq!(build_charset(&only(class)).to_string(), class.literal());
        }
    }

    #[test]
    fn test_all_classes_concatenated_in_order() {
        let charset = build_charset(&GenerationConfig::default());
        let expected = format!("{}{}{}{}", LOWERCASE, UPPERCASE, DIGITS, SYMBOLS);
        assert_eq!(charset.to_string(), expected);
        assert_eq!(charset.len(), 91);

        // 无重复字符
        let unique: HashSet<char> = charset.as_slice().iter().copied().collect();
        assert_eq!(unique.len(), charset.len());
        assert_eq!(charset, full_charset());
    }

    #[test]
    fn test_order_is_fixed_regardless_of_toggle_order() {
        let mut first = GenerationConfig::default();
        first.set_class(CharClass::Lowercase, false);
        first.set_class(CharClass::Uppercase, false);

        let mut second = GenerationConfig::default();
        second.set_class(CharClass::Uppercase, false);
        second.set_class(CharClass::Lowercase, false);

        assert_eq!(build_charset(&first), build_charset(&second));
        assert_eq!(build_charset(&first).to_string(), format!("{}{}", DIGITS, SYMBOLS));
    }

    #[test]
    fn test_no_class_gives_empty_charset() {
        let mut config = GenerationConfig::default();
        for class in CharClass::ALL {
            config.set_class(class, false);
        }
        assert!(!config.has_any_class());
        assert!(build_charset(&config).is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 12);
        assert!(config.include_lowercase);
        assert!(config.include_uppercase);
        assert!(config.include_digits);
        assert!(config.include_symbols);
        assert_eq!(config.enabled_classes(), CharClass::ALL.to_vec());
    }

    #[test]
    fn test_set_length_clamps() {
        let mut config = GenerationConfig::default();
        assert_eq!(config.set_length(3), 8);
        assert_eq!(config.set_length(100), 32);
        assert_eq!(config.set_length(20), 20);
        assert_eq!(config.length, 20);
    }

    #[test]
    fn test_validate_manual() {
        assert!(validate_manual("").is_ok());
        assert!(validate_manual("Abc123!@#`~").is_ok());
        assert_eq!(validate_manual("abc def"), Err(PassGenError::DisallowedCharacter(' ')));
        assert_eq!(validate_manual("pässword"), Err(PassGenError::DisallowedCharacter('ä')));
        assert_eq!(validate_manual("ab\"c'"), Err(PassGenError::DisallowedCharacter('"')));
    }
}
