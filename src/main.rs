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
// A random password generator written in Rust.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use rpawogen::commands::config::{self, ConfigAction};
use rpawogen::commands::interactive::run_session;
use rpawogen::commands::password_gen::{generate_random, GenArgs};
use rpawogen::commands::testpass::{test_password, CheckArgs};
use rpawogen::configtool::AppConfig;
use rpawogen::logger::init_cli_logger;
use rpawogen::session::PasswordSession;
use rpawogen::setclip::{DaemonRequest, SystemClipboard};

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A random password generator written in Rust", long_about = None, version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate random passwords
    Gen(GenArgs),

    /// Score a password
    Check(CheckArgs),

    /// Interactive generator session (default)
    Interactive,

    /// Manage saved defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    // 剪贴板清理子进程，先装日志以便报告失败
    if let Some(request) = DaemonRequest::from_env() {
        init_cli_logger(false);
        return request?.run().context("Clipboard cleaner failed");
    }

    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let config_path = cli.config.as_deref();
    let app = AppConfig::load(config_path).context("Failed to load config")?;
    let mut clipboard = SystemClipboard::new(app.clipboard_clear_secs);
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Gen(args) => generate_random(&args, &app, &mut stdout, &mut clipboard),
        Commands::Check(args) => test_password(&args, &app.bands, &mut stdout),
        Commands::Interactive => {
            let mut session = PasswordSession::with_os_rng(app.generation.clone(), app.bands);
            run_session(
                &mut session,
                io::stdin().lock(),
                &mut stdout,
                &mut clipboard,
                app.clipboard_clear_secs,
            )
        }
        Commands::Config { action } => config::run(&action, config_path, &mut stdout),
    }
}
