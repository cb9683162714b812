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
// Password generator

use std::fmt;
use std::ops::Deref;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::charset::{build_charset, Charset, GenerationConfig};
use crate::error::{PassGenError, Result};

/// A generated password. Never changes after it is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draw `length` characters from `charset`, independently and uniformly,
/// with replacement.
///
/// `SliceRandom::choose` picks the index through `rand`'s uniform range
/// sampler, which rejects and resamples values from the biased tail, so no
/// modulo bias is introduced whatever the charset size.
pub fn generate<R>(length: usize, charset: &Charset, rng: &mut R) -> Result<Password>
where
    R: Rng + ?Sized,
{
    if charset.is_empty() {
        return Err(PassGenError::EmptyCharset);
    }
    if length == 0 {
        return Err(PassGenError::InvalidLength(length));
    }
    debug!(length, charset_size = charset.len(), "generating password");

    let chars = charset.as_slice();
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        // 非空字符集，choose 必然返回 Some
        if let Some(c) = chars.choose(rng) {
            password.push(*c);
        }
    }
    Ok(Password(password))
}

/// Generate with the operating system RNG.
pub fn generate_password(length: usize, charset: &Charset) -> Result<Password> {
    generate(length, charset, &mut OsRng)
}

pub fn generate_from_config<R>(config: &GenerationConfig, rng: &mut R) -> Result<Password>
where
    R: Rng + ?Sized,
{
    generate(config.length, &build_charset(config), rng)
}

/// Deterministic RNG for reproducible output.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
