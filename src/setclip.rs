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
// Clipboard handler

use arboard::Clipboard;
use std::{env, process, thread, time::Duration};
use tracing::debug;

use crate::error::ClipboardError;

pub const DAEMON_ENV: &str = "RPAWOGEN_CLIPBOARD_DAEMON";
pub const SECRET_ENV: &str = "RPAWOGEN_CLIPBOARD_SECRET";
pub const DELAY_ENV: &str = "RPAWOGEN_CLIPBOARD_DELAY";

/// Destination for the copy action.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Raw text access to a clipboard.
pub trait ClipboardStore {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl ClipboardStore for Clipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Ok(Clipboard::get_text(self)?)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        Ok(Clipboard::set_text(self, text)?)
    }
}

/// The desktop clipboard, cleared again after `clear_after_secs`
/// (0 keeps the content).
///
/// The handle stays open for the lifetime of the value: on X11 the copied
/// text is only served while its owner is alive.
pub struct SystemClipboard {
    pub clear_after_secs: u64,
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new(clear_after_secs: u64) -> Self {
        Self { clear_after_secs, clipboard: None }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new()?);
        }
        if let Some(ctx) = self.clipboard.as_mut() {
            ClipboardStore::set_text(ctx, text)?;
        }
        if self.clear_after_secs > 0 {
            spawn_daemon(text, self.clear_after_secs)?;
        }
        Ok(())
    }
}

/// Work order of the helper process that clears the clipboard.
#[derive(Debug, PartialEq, Eq)]
pub struct DaemonRequest {
    pub secret: String,
    pub delay: Duration,
}

impl DaemonRequest {
    /// `None` when this process is not a clipboard helper.
    pub fn from_env() -> Option<Result<Self, ClipboardError>> {
        Self::from_vars(
            env::var(DAEMON_ENV).ok(),
            env::var(SECRET_ENV).ok(),
            env::var(DELAY_ENV).ok(),
        )
    }

    pub fn from_vars(
        daemon: Option<String>,
        secret: Option<String>,
        delay: Option<String>,
    ) -> Option<Result<Self, ClipboardError>> {
        daemon?;
        let Some(secret) = secret else {
            return Some(Err(ClipboardError::MissingSecret));
        };
        let secs = delay.and_then(|d| d.parse::<u64>().ok()).unwrap_or(0);
        Some(Ok(Self { secret, delay: Duration::from_secs(secs) }))
    }

    pub fn run(self) -> Result<(), ClipboardError> {
        self.run_with(|| Ok(Clipboard::new()?))
    }

    /// Opens the clipboard through `open`, keeps serving the secret until
    /// the delay is over, then clears it if nobody replaced it. Failing to
    /// open or write the clipboard is an error: the secret would otherwise
    /// stay there silently.
    pub fn run_with<C, F>(self, open: F) -> Result<(), ClipboardError>
    where
        C: ClipboardStore,
        F: FnOnce() -> Result<C, ClipboardError>,
    {
        let mut ctx = open()?;

        // 持有剪贴板直到清理，X11 下父进程退出后内容仍可粘贴
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if ctx.get_text().unwrap_or_default() != self.secret {
                ctx.set_text(&self.secret)?;
            }
        }

        thread::sleep(self.delay);

        let current_content = ctx.get_text().unwrap_or_default();
        if should_clear(&current_content, &self.secret) {
            ctx.set_text("")?;
            debug!("clipboard unchanged since copy, cleared");
        } else {
            debug!("clipboard changed since copy, left alone");
        }
        Ok(())
    }
}

/// Only wipe what we put there ourselves.
pub fn should_clear(current: &str, secret: &str) -> bool {
    !secret.is_empty() && current == secret
}

fn spawn_daemon(secret: &str, delay_secs: u64) -> Result<(), ClipboardError> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, "1")
       .env(SECRET_ENV, secret)
       .env(DELAY_ENV, delay_secs.to_string())
       .stdin(process::Stdio::null())
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd.spawn()?;
    Ok(())
}
