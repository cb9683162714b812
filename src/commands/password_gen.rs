use anyhow::{Context, Result};
use clap::Args;
use rand::RngCore;
use rand::rngs::OsRng;
use std::io::Write;
use tracing::warn;

use crate::charset::{CharClass, GenerationConfig};
use crate::configtool::AppConfig;
use crate::passgen::{self, Password};
use crate::setclip::ClipboardSink;
use crate::strength::assess;

#[derive(Debug, Clone, Default, Args)]
pub struct GenArgs {
    /// Length of the password (clamped to 8..=32)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Include lowercase letters even if the saved defaults exclude them
    #[arg(long, default_value_t = false, conflicts_with = "no_lowercase")]
    pub lowercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Include uppercase letters even if the saved defaults exclude them
    #[arg(long, default_value_t = false, conflicts_with = "no_uppercase")]
    pub uppercase: bool,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Include digits even if the saved defaults exclude them
    #[arg(long, default_value_t = false, conflicts_with = "no_digits")]
    pub digits: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    pub no_digits: bool,

    /// Include symbols even if the saved defaults exclude them
    #[arg(long, default_value_t = false, conflicts_with = "no_symbols")]
    pub symbols: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the last password to the clipboard
    #[arg(short, long, default_value_t = false)]
    pub copy: bool,

    /// Print passwords only
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// Saved defaults overridden by the command line flags.
pub fn resolve_config(args: &GenArgs, saved: &GenerationConfig) -> GenerationConfig {
    let mut config = saved.clone();
    if let Some(length) = args.length {
        let stored = config.set_length(length);
        if stored != length {
            warn!(requested = length, stored, "password length clamped");
        }
    }
    let overrides = [
        (CharClass::Lowercase, args.lowercase, args.no_lowercase),
        (CharClass::Uppercase, args.uppercase, args.no_uppercase),
        (CharClass::Digit, args.digits, args.no_digits),
        (CharClass::Symbol, args.symbols, args.no_symbols),
    ];
    for (class, include, exclude) in overrides {
        if include {
            config.set_class(class, true);
        } else if exclude {
            config.set_class(class, false);
        }
    }
    config
}

pub fn generate_batch(config: &GenerationConfig, count: usize, seed: Option<u64>) -> Result<Vec<Password>> {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(passgen::seeded_rng(seed)),
        None => Box::new(OsRng),
    };
    (0..count)
        .map(|_| passgen::generate_from_config(config, &mut rng).context("Failed to generate password"))
        .collect()
}

pub fn generate_random<W: Write>(
    args: &GenArgs,
    app: &AppConfig,
    out: &mut W,
    clipboard: &mut dyn ClipboardSink,
) -> Result<()> {
    let config = resolve_config(args, &app.generation);
    let passwords = generate_batch(&config, args.count, args.seed)?;

    for password in &passwords {
        if args.quiet {
            writeln!(out, "{}", password)?;
        } else {
            let report = assess(password, &app.bands);
            writeln!(out, "{}  {}", password, report)?;
        }
    }

    if args.copy {
        if let Some(last) = passwords.last() {
            clipboard.copy(last).context("Failed to copy password")?;
            if !args.quiet {
                writeln!(out, "{}", copied_notice(app.clipboard_clear_secs))?;
            }
        }
    }
    Ok(())
}

pub(crate) fn copied_notice(clear_after_secs: u64) -> String {
    if clear_after_secs == 0 {
        "Copied to clipboard".to_string()
    } else {
        format!("Copied to clipboard (cleared after {}s)", clear_after_secs)
    }
}
