use rpawogen::strength::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_worked_examples() {
        assert_eq!(score(""), 0);
        // 长度 8 + 小写
        assert_eq!(score("abcdefgh"), 2);
        // 长度 10 只得 1 分，四类字符各 1 分
        assert_eq!(score("Abcdefgh1!"), 5);
        assert_eq!(score("Ab1!Ab1!Ab1!"), 6);
    }

    #[test]
    fn test_length_thresholds() {
        assert_eq!(score("abcdefg"), 1);
        assert_eq!(score("abcdefgh"), 2);
        assert_eq!(score("abcdefghijk"), 2);
        assert_eq!(score("abcdefghijkl"), 3);
        assert_eq!(score("ABCDEFGHIJKL"), 3);
        assert_eq!(score("123456789012"), 3);
    }

    #[test]
    fn test_crlf_counts_as_two_chars() {
        // "\r\n" 每个都算长度：8 个字符得 1 分，外加非字母数字 1 分
        assert_eq!(score("\r\n\r\n\r\n\r\n"), 2);
        assert_eq!(score("\r\n\r\n\r\n\r\n\r\n\r\n"), 3);
    }

    #[test]
    fn test_class_points_are_independent() {
        assert_eq!(score("a"), 1);
        assert_eq!(score("A"), 1);
        assert_eq!(score("1"), 1);
        assert_eq!(score("!"), 1);
        assert_eq!(score(" "), 1);
        assert_eq!(score("aA1!"), 4);
    }

    #[test]
    fn test_score_is_bounded_and_idempotent() {
        for password in ["", "x", "Ab1!", "Ab1!Ab1!Ab1!", "a very long passphrase with spaces 123 ABC"] {
            let first = score(password);
            assert!(first <= MAX_SCORE);
            assert_eq!(first, score(password));
        }
    }

    #[test]
    fn test_assess_uses_bands() {
        let bands = StrengthBands::default();
        assert_eq!(assess("abcdefgh", &bands).level, StrengthLevel::Weak);
        assert_eq!(assess("abcdefgh1", &bands).level, StrengthLevel::Medium);
        assert_eq!(assess("Abcdefgh1!", &bands).level, StrengthLevel::Strong);

        let strict = StrengthBands::new(3, 5).unwrap();
        let report = assess("Abcdefgh1!", &strict);
        assert_eq!(report.score, 5);
        assert_eq!(report.level, StrengthLevel::Medium);
    }

    #[test]
    fn test_invalid_bands_rejected() {
        assert!(StrengthBands::new(4, 4).is_err());
        assert!(StrengthBands::new(5, 3).is_err());
        assert!(StrengthBands::new(2, 6).is_err());
        assert!(StrengthBands::new(0, 1).is_ok());
    }

    #[test]
    fn test_report_display() {
        let report = assess("Ab1!Ab1!Ab1!", &StrengthBands::default());
        assert_eq!(report.to_string(), "strong (score: 6/6)");
    }

    #[test]
    fn test_advisory_feedback_rating_range() {
        let (weak, weak_feedback) = advisory_feedback("password");
        assert!(weak <= 1);
        assert!(!weak_feedback.is_empty());

        let (strong, _) = advisory_feedback("q7#Vz!r2Lp@9Xw$eK4");
        assert!(strong <= 4);
        assert!(strong >= weak);
    }
}
