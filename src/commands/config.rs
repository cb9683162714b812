use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::io::Write;
use std::path::Path;

use crate::configtool::AppConfig;
use crate::strength::StrengthBands;

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Print the saved defaults
    Show,
    /// Restore factory defaults
    Reset,
    /// Change saved defaults
    Set(SetArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct SetArgs {
    /// Default password length (clamped to 8..=32)
    #[arg(short, long)]
    pub length: Option<usize>,

    #[arg(long)]
    pub lowercase: Option<bool>,

    #[arg(long)]
    pub uppercase: Option<bool>,

    #[arg(long)]
    pub digits: Option<bool>,

    #[arg(long)]
    pub symbols: Option<bool>,

    /// Highest score still rated weak
    #[arg(long)]
    pub weak_max: Option<u8>,

    /// Highest score still rated medium
    #[arg(long)]
    pub medium_max: Option<u8>,

    /// Seconds before a copied password is cleared, 0 disables clearing
    #[arg(long)]
    pub clipboard_secs: Option<u64>,
}

pub fn apply_set(config: &mut AppConfig, args: &SetArgs) -> Result<()> {
    let generation = &mut config.generation;
    if let Some(length) = args.length {
        generation.set_length(length);
    }
    if let Some(v) = args.lowercase {
        generation.include_lowercase = v;
    }
    if let Some(v) = args.uppercase {
        generation.include_uppercase = v;
    }
    if let Some(v) = args.digits {
        generation.include_digits = v;
    }
    if let Some(v) = args.symbols {
        generation.include_symbols = v;
    }
    if args.weak_max.is_some() || args.medium_max.is_some() {
        config.bands = StrengthBands::new(
            args.weak_max.unwrap_or(config.bands.weak_max),
            args.medium_max.unwrap_or(config.bands.medium_max),
        )?;
    }
    if let Some(secs) = args.clipboard_secs {
        config.clipboard_clear_secs = secs;
    }
    Ok(())
}

pub fn run<W: Write>(action: &ConfigAction, path: Option<&Path>, out: &mut W) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load(path).context("Failed to load config")?;
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        ConfigAction::Reset => {
            let mut config = AppConfig::default();
            config.save(path).context("Failed to save config")?;
            writeln!(out, "Config reset to defaults")?;
        }
        ConfigAction::Set(args) => {
            let mut config = AppConfig::load(path).context("Failed to load config")?;
            apply_set(&mut config, args)?;
            if !config.generation.has_any_class() {
                writeln!(out, "Warning: no character class enabled, generation will be skipped")?;
            }
            config.save(path).context("Failed to save config")?;
            writeln!(out, "Config saved")?;
        }
    }
    Ok(())
}
