use rpawogen::charset::*;
use rpawogen::error::PassGenError;
use rpawogen::passgen::seeded_rng;
use rpawogen::session::*;
use rpawogen::strength::{score, StrengthBands, StrengthLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;

    fn new_session() -> PasswordSession<ChaCha20Rng> {
        PasswordSession::new(GenerationConfig::default(), StrengthBands::default(), seeded_rng(99))
    }

    #[test]
    fn test_generates_on_creation() {
        let session = new_session();
        assert_eq!(session.status(), SessionStatus::Generated);
        assert_eq!(session.password().len(), 12);
        assert_eq!(session.report().score, score(session.password()));
    }

    #[test]
    fn test_empty_charset_keeps_previous_password() {
        let mut session = new_session();
        let before = session.password().to_string();

        session.set_class(CharClass::Lowercase, false).unwrap();
        session.set_class(CharClass::Uppercase, false).unwrap();
        session.set_class(CharClass::Digit, false).unwrap();
        let kept = session.password().to_string();
        assert_ne!(kept, before);

        let result = session.set_class(CharClass::Symbol, false);
        assert_eq!(result, Err(PassGenError::EmptyCharset));
        assert_eq!(session.password(), kept);
        assert_eq!(session.status(), SessionStatus::Skipped);

        // 重新启用后恢复生成
        session.toggle(CharClass::Digit).unwrap();
        assert_eq!(session.status(), SessionStatus::Generated);
        assert!(session.password().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_creation_with_no_classes() {
        let config = GenerationConfig {
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            ..Default::default()
        };
        let session = PasswordSession::new(config, StrengthBands::default(), seeded_rng(1));
        assert_eq!(session.status(), SessionStatus::Skipped);
        assert_eq!(session.password(), "");
        assert_eq!(session.report().score, 0);
        assert_eq!(session.copy_payload(), None);
    }

    #[test]
    fn test_set_length_clamps_and_regenerates() {
        let mut session = new_session();
        assert_eq!(session.set_length(4).unwrap().len(), 8);
        assert_eq!(session.config().length, 8);
        assert_eq!(session.set_length(64).unwrap().len(), 32);
        assert_eq!(session.set_length(20).unwrap().len(), 20);
    }

    #[test]
    fn test_initial_length_is_clamped() {
        let config = GenerationConfig { length: 2, ..Default::default() };
        let session = PasswordSession::new(config, StrengthBands::default(), seeded_rng(5));
        assert_eq!(session.password().len(), 8);
    }

    #[test]
    fn test_manual_edit_is_rescored() {
        let mut session = new_session();
        session.edit("abcdefgh").unwrap();
        assert_eq!(session.status(), SessionStatus::Edited);
        assert_eq!(session.password(), "abcdefgh");
        assert_eq!(session.report().score, 2);
        assert_eq!(session.report().level, StrengthLevel::Weak);

        session.edit("Ab1!Ab1!Ab1!").unwrap();
        assert_eq!(session.report().score, 6);
        assert_eq!(session.copy_payload(), Some("Ab1!Ab1!Ab1!"));
    }

    #[test]
    fn test_manual_edit_rejects_foreign_characters() {
        let mut session = new_session();
        let before = session.password().to_string();
        assert_eq!(session.edit("pass word"), Err(PassGenError::DisallowedCharacter(' ')));
        assert_eq!(session.password(), before);
        assert_eq!(session.status(), SessionStatus::Generated);
    }

    #[test]
    fn test_empty_edit_has_nothing_to_copy() {
        let mut session = new_session();
        session.edit("").unwrap();
        assert_eq!(session.copy_payload(), None);
        assert_eq!(session.report().score, 0);
    }

    #[test]
    fn test_set_bands_reclassifies() {
        let mut session = new_session();
        session.edit("Abcdefgh1!").unwrap();
        assert_eq!(session.report().level, StrengthLevel::Strong);
        session.set_bands(StrengthBands::new(3, 5).unwrap());
        assert_eq!(session.report().level, StrengthLevel::Medium);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = new_session();
        let mut second = new_session();
        assert_eq!(first.password(), second.password());
        assert_eq!(first.regenerate().unwrap(), second.regenerate().unwrap());
    }
}
