//! Console output.
//!
//! Every status line starts with a colored tag; the message text itself is
//! left unstyled.

pub mod usage;

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::{constants, theme};

/// Severity of a status line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    const fn tag(self) -> &'static str {
        match self {
            Self::Info => "[INFO]",
            Self::Success => "[SUCCESS]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
        }
    }

    const fn color(self) -> Color {
        match self {
            Self::Info => theme::INFO,
            Self::Success => theme::SUCCESS,
            Self::Warning => theme::WARNING,
            Self::Error => theme::ERROR,
        }
    }
}

/// Format one status line.
#[must_use]
pub fn status_line(level: Level, message: &str) -> String {
    format!("{} {message}", level.tag().with(level.color()))
}

/// Print an `[INFO]` line.
pub fn info(message: &str) {
    print_line(&status_line(Level::Info, message));
}

/// Print a `[SUCCESS]` line.
pub fn success(message: &str) {
    print_line(&status_line(Level::Success, message));
}

/// Print a `[WARNING]` line.
pub fn warning(message: &str) {
    print_line(&status_line(Level::Warning, message));
}

/// Print an `[ERROR]` line.
pub fn error(message: &str) {
    print_line(&status_line(Level::Error, message));
}

/// Print the separator drawn around a test run.
pub fn separator() {
    let line = constants::SEPARATOR_CHAR
        .to_string()
        .repeat(constants::SEPARATOR_WIDTH);
    print_line(&line.with(theme::SEPARATOR).to_string());
}

/// Print an indented, unstyled line (remediation steps and the like).
pub fn detail(line: &str) {
    print_line(&format!("  {line}"));
}

/// Write `text` to stdout as-is.
///
/// A reader that went away (`run-tests --help | head -1`) is not an error:
/// the output is dropped and the exit code stays what the run decided.
pub fn print_text(text: &str) {
    write_text(&mut io::stdout().lock(), text);
}

fn print_line(line: &str) {
    print_text(&format!("{line}\n"));
}

fn write_text<W: Write>(out: &mut W, text: &str) {
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            tracing::warn!(error = %e, "failed writing to stdout");
        }
    }
}
