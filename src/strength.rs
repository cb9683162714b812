//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___|  ___  _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _  / _ \| '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| ||  __/| | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-16
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength scoring

use std::fmt;
use serde::{Serialize, Deserialize};
use zxcvbn::zxcvbn;
use zxcvbn::Score;

use crate::error::ConfigError;

pub const MAX_SCORE: u8 = 6;

/// Heuristic 0..=6 score from length and class diversity.
///
/// Length counts `char`s: one point from 8, a second from 12.
/// Each of ASCII uppercase, ASCII lowercase, ASCII digit and "anything
/// else" adds one point when present at least once.
pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let mut points = 0;
    if length >= 8 {
        points += 1;
    }
    if length >= 12 {
        points += 1;
    }

    let has = |pred: fn(&char) -> bool| password.chars().any(|c| pred(&c));
    if has(char::is_ascii_uppercase) {
        points += 1;
    }
    if has(char::is_ascii_lowercase) {
        points += 1;
    }
    if has(char::is_ascii_digit) {
        points += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        points += 1;
    }
    points
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        };
        write!(f, "{}", name)
    }
}

// 强度分级阈值，可在配置文件中调整
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthBands {
    pub weak_max: u8,
    pub medium_max: u8,
}

impl Default for StrengthBands {
    fn default() -> Self {
        Self { weak_max: 2, medium_max: 4 }
    }
}

impl StrengthBands {
    pub fn new(weak_max: u8, medium_max: u8) -> Result<Self, ConfigError> {
        let bands = Self { weak_max, medium_max };
        bands.validate()?;
        Ok(bands)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weak_max < self.medium_max && self.medium_max < MAX_SCORE {
            Ok(())
        } else {
            Err(ConfigError::InvalidBands {
                weak_max: self.weak_max,
                medium_max: self.medium_max,
            })
        }
    }

    pub fn classify(&self, score: u8) -> StrengthLevel {
        if score <= self.weak_max {
            StrengthLevel::Weak
        } else if score <= self.medium_max {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub level: StrengthLevel,
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {}/{})", self.level, self.score, MAX_SCORE)
    }
}

pub fn assess(password: &str, bands: &StrengthBands) -> StrengthReport {
    let score = score(password);
    StrengthReport { score, level: bands.classify(score) }
}

/// zxcvbn rating (0..=4) and its suggestions, for advice only.
pub fn advisory_feedback(password: &str) -> (u8, String) {
    let strength_result = zxcvbn(password, &[]);
    let rating = match strength_result.score() {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        Score::Four => 4,
        _ => 0,
    };
    let feedback = strength_result.feedback().map_or_else(
        String::new,
        |f| {
            let mut parts = Vec::new();
            if let Some(warning) = f.warning() {
                parts.push(warning.to_string());
            }
            parts.extend(f.suggestions().iter().map(|s| s.to_string()));
            parts.join(" ")
        },
    );
    (rating, feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_bands() {
        let bands = StrengthBands::default();
        assert_eq!(bands.classify(0), StrengthLevel::Weak);
        assert_eq!(bands.classify(2), StrengthLevel::Weak);
        assert_eq!(bands.classify(3), StrengthLevel::Medium);
        assert_eq!(bands.classify(4), StrengthLevel::Medium);
        assert_eq!(bands.classify(5), StrengthLevel::Strong);
        assert_eq!(bands.classify(6), StrengthLevel::Strong);
    }

    #[test]
    fn test_length_counts_chars() {
        // 组合字符单独计数：7 个字形，14 个字符
        let combined = "e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}";
        assert_eq!(score(combined), 4);
    }
}
