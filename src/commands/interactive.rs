use anyhow::Result;
use rand::RngCore;
use std::io::{BufRead, Write};

use crate::charset::CharClass;
use crate::commands::password_gen::copied_notice;
use crate::error::PassGenError;
use crate::session::{PasswordSession, SessionStatus};
use crate::setclip::ClipboardSink;

const HELP: &str = "\
Commands:
  g          generate a new password
  l N        set length (8-32) and regenerate
  +K / -K    enable / disable a class: a=lowercase A=uppercase 0=digits !=symbols
  e TEXT     use TEXT as the password
  c          copy password to clipboard
  s          show current state
  h          this help
  q          quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Generate,
    Length(usize),
    Class(CharClass, bool),
    Edit(String),
    Copy,
    Show,
    Help,
    Quit,
}

fn class_key(key: &str) -> Option<CharClass> {
    match key {
        "a" => Some(CharClass::Lowercase),
        "A" => Some(CharClass::Uppercase),
        "0" => Some(CharClass::Digit),
        "!" => Some(CharClass::Symbol),
        _ => None,
    }
}

/// Parse one input line. Blank lines mean "generate".
pub fn parse_action(line: &str) -> Result<Action, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Action::Generate);
    }
    if let Some(rest) = trimmed.strip_prefix('+') {
        return class_key(rest)
            .map(|class| Action::Class(class, true))
            .ok_or_else(|| format!("Unknown class: {}", rest));
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        return class_key(rest)
            .map(|class| Action::Class(class, false))
            .ok_or_else(|| format!("Unknown class: {}", rest));
    }

    let (cmd, arg) = match trimmed.split_once(' ') {
        Some((cmd, arg)) => (cmd, arg),
        None => (trimmed, ""),
    };
    match cmd {
        "g" => Ok(Action::Generate),
        "l" => arg
            .trim()
            .parse::<usize>()
            .map(Action::Length)
            .map_err(|_| format!("Invalid length: {}", arg.trim())),
        // 编辑内容原样保留，只去掉命令和一个空格
        "e" => Ok(Action::Edit(line.trim_start().strip_prefix("e ").unwrap_or("").to_string())),
        "c" => Ok(Action::Copy),
        "s" => Ok(Action::Show),
        "h" | "?" => Ok(Action::Help),
        "q" => Ok(Action::Quit),
        _ => Err(format!("Unknown command: {} (h for help)", cmd)),
    }
}

fn show_state<R: RngCore, W: Write>(session: &PasswordSession<R>, out: &mut W) -> Result<()> {
    let config = session.config();
    let classes = config
        .enabled_classes()
        .iter()
        .map(|class| class.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Length: {}  Classes: [{}]", config.length, classes)?;
    show_password(session, out)
}

fn show_password<R: RngCore, W: Write>(session: &PasswordSession<R>, out: &mut W) -> Result<()> {
    writeln!(out, "Password: {}", session.password())?;
    writeln!(out, "Strength: {}", session.report())?;
    Ok(())
}

/// Runs the session loop until `q` or end of input.
pub fn run_session<R, I, W>(
    session: &mut PasswordSession<R>,
    input: I,
    out: &mut W,
    clipboard: &mut dyn ClipboardSink,
    clear_after_secs: u64,
) -> Result<()>
where
    R: RngCore,
    I: BufRead,
    W: Write,
{
    if session.status() == SessionStatus::Skipped {
        writeln!(out, "Generation skipped: enable at least one character class")?;
    }
    show_state(session, out)?;

    for line in input.lines() {
        let line = line?;
        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };

        let outcome = match action {
            Action::Quit => break,
            Action::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Action::Show => {
                show_state(session, out)?;
                continue;
            }
            Action::Copy => {
                match session.copy_payload() {
                    Some(text) => match clipboard.copy(text) {
                        Ok(()) => writeln!(out, "{}", copied_notice(clear_after_secs))?,
                        Err(e) => writeln!(out, "Copy failed: {}", e)?,
                    },
                    None => writeln!(out, "Nothing to copy")?,
                }
                continue;
            }
            Action::Generate => session.regenerate().map(|_| ()),
            Action::Length(length) => session.set_length(length).map(|_| ()),
            Action::Class(class, enabled) => session.set_class(class, enabled).map(|_| ()),
            Action::Edit(text) => session.edit(&text),
        };

        match outcome {
            Ok(()) => show_password(session, out)?,
            Err(e @ PassGenError::EmptyCharset) => {
                // 保留原密码，提示用户
                writeln!(out, "Generation skipped: {}", e)?;
                show_state(session, out)?;
            }
            Err(e) => writeln!(out, "Rejected: {}", e)?,
        }
    }
    Ok(())
}
