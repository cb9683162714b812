use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::charset::validate_manual;
use crate::strength::{self, StrengthBands};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Password to test
    pub password: String,

    /// Also show zxcvbn suggestions
    #[arg(short, long, default_value_t = false)]
    pub advice: bool,
}

pub fn test_password<W: Write>(args: &CheckArgs, bands: &StrengthBands, out: &mut W) -> Result<()> {
    let report = strength::assess(&args.password, bands);
    writeln!(out, "Password strength: {}", report)?;

    match validate_manual(&args.password) {
        Ok(()) => writeln!(out, "Usable as manual password: Yes")?,
        Err(e) => writeln!(out, "Usable as manual password: No ({})", e)?,
    }

    if args.advice {
        let (rating, feedback) = strength::advisory_feedback(&args.password);
        writeln!(out, "zxcvbn rating: {}/4", rating)?;
        if !feedback.is_empty() {
            writeln!(out, "Suggestions: {}", feedback)?;
        }
    }
    Ok(())
}
