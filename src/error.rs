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
// Error types

use thiserror::Error;

/// Failures of password generation and manual password input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassGenError {
    #[error("no character class is enabled, the charset is empty")]
    EmptyCharset,

    #[error("password length must be a positive integer, got {0}")]
    InvalidLength(usize),

    #[error("character {0:?} is not allowed in a password")]
    DisallowedCharacter(char),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDir(String),

    #[error("invalid strength bands: weak_max ({weak_max}) < medium_max ({medium_max}) < 6 must hold")]
    InvalidBands { weak_max: u8, medium_max: u8 },
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("failed to spawn clipboard cleaner: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("clipboard cleaner started without a secret")]
    MissingSecret,
}

pub type Result<T> = std::result::Result<T, PassGenError>;
