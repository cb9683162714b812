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
// Character classes and charset building

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::error::{PassGenError, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

// 字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Fixed concatenation order used by [`build_charset`].
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn literal(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Class of `c`, or `None` if `c` is in none of the four literals.
    pub fn of(c: char) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.literal().contains(c))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        };
        write!(f, "{}", name)
    }
}

// 密码生成选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GenerationConfig {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 32;

    /// Clamp `length` into `[MIN_LENGTH, MAX_LENGTH]` and store it.
    /// Returns the stored value.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = Self::clamp_length(length);
        self.length
    }

    pub fn clamp_length(length: usize) -> usize {
        length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH)
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Digit => self.include_digits,
            CharClass::Symbol => self.include_symbols,
        }
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Lowercase => &mut self.include_lowercase,
            CharClass::Uppercase => &mut self.include_uppercase,
            CharClass::Digit => &mut self.include_digits,
            CharClass::Symbol => &mut self.include_symbols,
        };
        *flag = enabled;
    }

    pub fn has_any_class(&self) -> bool {
        CharClass::ALL.iter().any(|&class| self.is_enabled(class))
    }

    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL.into_iter().filter(|&class| self.is_enabled(class)).collect()
    }
}

/// Pool of characters eligible for random selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Charset(Vec<char>);

impl Charset {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl From<&str> for Charset {
    fn from(chars: &str) -> Self {
        Self(chars.chars().collect())
    }
}

/// Concatenate the literals of every enabled class, in the order of
/// [`CharClass::ALL`]. An empty charset is returned when nothing is enabled.
pub fn build_charset(config: &GenerationConfig) -> Charset {
    let mut chars = Vec::new();
    for class in config.enabled_classes() {
        chars.extend(class.literal().chars());
    }
    Charset(chars)
}

/// Union of all four class literals.
pub fn full_charset() -> Charset {
    let mut chars = Vec::new();
    for class in CharClass::ALL {
        chars.extend(class.literal().chars());
    }
    Charset(chars)
}

/// Check that a hand-typed password only uses characters from the class
/// literals.
pub fn validate_manual(text: &str) -> Result<()> {
    match text.chars().find(|&c| CharClass::of(c).is_none()) {
        Some(c) => Err(PassGenError::DisallowedCharacter(c)),
        None => Ok(()),
    }
}
