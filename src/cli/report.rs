//! Diagnostics printed to stderr.
//!
//! Stdout is reserved for command output (scripts, JSON) so it can be piped.

use std::fmt::Display;

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn note(message: impl Display) {
    eprintln!("{} {}", "note:".bold().cyan(), message);
}

pub fn warning(message: impl Display) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print an error with its full cause chain.
pub fn error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".bold().red(), err);
}

pub fn success(message: impl Display) {
    println!("{} {}", SUCCESS_MARK.green(), message.to_string().green());
}
