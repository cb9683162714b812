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
// Config Tools

use chrono::{DateTime, Utc};
use dirs::config_dir;
use serde::{Serialize, Deserialize};
use std::{fs, path::{Path, PathBuf}};
use tracing::{debug, info};

use crate::charset::GenerationConfig;
use crate::error::ConfigError;
use crate::strength::StrengthBands;

const CONFIG_FILE_NAME: &str = "config.json";

fn default_clipboard_clear_secs() -> u64 {
    10
}

/// Saved user defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub bands: StrengthBands,
    #[serde(default = "default_clipboard_clear_secs")]
    pub clipboard_clear_secs: u64,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            bands: StrengthBands::default(),
            clipboard_clear_secs: default_clipboard_clear_secs(),
            updated_at: Utc::now(),
        }
    }
}

impl AppConfig {
    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&config_data)?;
        config.bands.validate()?;
        // 长度超出范围时收回到 [8, 32]
        let length = config.generation.length;
        config.generation.set_length(length);
        Ok(config)
    }

    pub fn save_to(&mut self, path: &Path) -> Result<(), ConfigError> {
        self.bands.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.updated_at = Utc::now();
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, &self)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Loads from `path` when given, otherwise from [`default_config_path`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&default_config_path()?),
        }
    }

    pub fn save(&mut self, path: Option<&Path>) -> Result<(), ConfigError> {
        match path {
            Some(path) => self.save_to(path),
            None => self.save_to(&default_config_path()?),
        }
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDir(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}
