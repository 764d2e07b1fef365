// clipsort/src/ui/output_format.rs
//! Formatting of status messages and the one-line verdict.
//!
//! Colour is applied only when the target stream is a terminal, so piped
//! output stays plain.
//! License: MIT OR APACHE 2.0

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use clipsort_core::ClassificationResult;

/// Writes an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.cyan())
    } else {
        writeln!(writer, "{}", message)
    }
}

/// Writes a warning message.
pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), message.yellow())
    } else {
        writeln!(writer, "Warning: {}", message)
    }
}

/// Writes an error message.
pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), message.red())
    } else {
        writeln!(writer, "Error: {}", message)
    }
}

/// Writes the verdict line, e.g. `code (python, confidence 31.3)`.
pub fn print_result<W: Write>(
    writer: &mut W,
    result: &ClassificationResult,
    supports_color: bool,
) -> io::Result<()> {
    let line = result.to_string();
    match (supports_color, result.is_code) {
        (true, true) => writeln!(writer, "{}", line.green().bold()),
        (true, false) => writeln!(writer, "{}", line.dimmed()),
        (false, _) => writeln!(writer, "{}", line),
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}
