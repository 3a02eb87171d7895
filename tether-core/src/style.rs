//! Stateless colored terminal formatting.
//!
//! One function, no process-wide mutable state: callers pass a message and a
//! style tag and get back a ready-to-print string. The `colored` crate
//! handles tty detection and `NO_COLOR` on its own.

use colored::Colorize;

/// Style tag for one line of user-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Top-level banner (program title, stage headers).
    Header,
    /// Informational note (e.g. a skipped stage).
    Info,
    /// Echo of an external command about to run.
    Command,
    /// Terminal success banner.
    Success,
    /// Recoverable or advisory condition.
    Warn,
    /// Fatal condition.
    Error,
}

/// Format `msg` according to `style`.
pub fn paint(msg: &str, style: Style) -> String {
    match style {
        Style::Header => msg.magenta().bold().to_string(),
        Style::Info => msg.blue().to_string(),
        Style::Command => msg.cyan().to_string(),
        Style::Success => msg.green().bold().to_string(),
        Style::Warn => msg.yellow().to_string(),
        Style::Error => msg.red().bold().to_string(),
    }
}
