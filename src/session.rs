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
// Generator session state

use rand::RngCore;
use rand::rngs::OsRng;
use tracing::{debug, warn};

use crate::charset::{validate_manual, CharClass, GenerationConfig};
use crate::error::Result;
use crate::passgen::generate_from_config;
use crate::strength::{assess, StrengthBands, StrengthReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing has been produced yet.
    Empty,
    Generated,
    Edited,
    /// The last generation attempt failed; the previous password is kept.
    Skipped,
}

/// Current password, its configuration and its strength.
///
/// Configuration changes regenerate the password. Every mutation rescores
/// before it returns, so `password()` and `report()` always agree.
pub struct PasswordSession<R: RngCore> {
    config: GenerationConfig,
    bands: StrengthBands,
    rng: R,
    password: String,
    report: StrengthReport,
    status: SessionStatus,
}

impl PasswordSession<OsRng> {
    pub fn with_os_rng(config: GenerationConfig, bands: StrengthBands) -> Self {
        Self::new(config, bands, OsRng)
    }
}

impl<R: RngCore> PasswordSession<R> {
    /// Creates the session and generates the first password right away.
    pub fn new(mut config: GenerationConfig, bands: StrengthBands, rng: R) -> Self {
        config.set_length(config.length);
        let mut session = Self {
            config,
            bands,
            rng,
            password: String::new(),
            report: assess("", &bands),
            status: SessionStatus::Empty,
        };
        // 初次生成失败时保持空密码，状态为 Skipped
        let _ = session.regenerate();
        session
    }

    pub fn regenerate(&mut self) -> Result<&str> {
        match generate_from_config(&self.config, &mut self.rng) {
            Ok(password) => {
                self.password = password.into_string();
                self.status = SessionStatus::Generated;
                self.rescore();
                Ok(self.password.as_str())
            }
            Err(e) => {
                warn!(error = %e, "generation skipped, keeping previous password");
                self.status = SessionStatus::Skipped;
                Err(e)
            }
        }
    }

    /// Clamps `length` to the allowed range, then regenerates.
    pub fn set_length(&mut self, length: usize) -> Result<&str> {
        let stored = self.config.set_length(length);
        if stored != length {
            warn!(requested = length, stored, "password length clamped");
        }
        self.regenerate()
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) -> Result<&str> {
        self.config.set_class(class, enabled);
        debug!(%class, enabled, "character class changed");
        self.regenerate()
    }

    pub fn toggle(&mut self, class: CharClass) -> Result<&str> {
        let enabled = !self.config.is_enabled(class);
        self.set_class(class, enabled)
    }

    /// Accepts a hand-typed password made of class characters only.
    pub fn edit(&mut self, text: &str) -> Result<()> {
        validate_manual(text)?;
        self.password = text.to_string();
        self.status = SessionStatus::Edited;
        self.rescore();
        Ok(())
    }

    pub fn set_bands(&mut self, bands: StrengthBands) {
        self.bands = bands;
        self.rescore();
    }

    /// Text to hand to the clipboard, `None` while the password is empty.
    pub fn copy_payload(&self) -> Option<&str> {
        if self.password.is_empty() {
            None
        } else {
            Some(self.password.as_str())
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn report(&self) -> StrengthReport {
        self.report
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn rescore(&mut self) {
        self.report = assess(&self.password, &self.bands);
    }
}
