// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stoplight text output.
//!
//! One glyph line per check on stdout; command echoes, captured tool
//! output and warnings go to stderr so pipelines see only results.

use std::io::Write;

use termcolor::{StandardStream, WriteColor};

use crate::check::{CheckResult, CheckStatus};
use crate::color::{color_choice, scheme};

pub const GREEN_CIRCLE: &str = "\u{1f7e2}";
pub const YELLOW_CIRCLE: &str = "\u{1f7e1}";
pub const RED_CIRCLE: &str = "\u{1f534}";

/// The glyph for a normalized status.
pub fn status_glyph(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => GREEN_CIRCLE,
        CheckStatus::Fail => RED_CIRCLE,
        CheckStatus::Skipped => YELLOW_CIRCLE,
    }
}

/// Write the stoplight line for one result.
pub fn write_status_line(result: &CheckResult) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice());
    writeln!(stdout, "{} {}", status_glyph(result.status), result.name)
}

/// Echo the command about to run, prefixed with `>`.
pub fn write_command(program: &str, args: &[String]) -> std::io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice());
    stderr.set_color(&scheme::info())?;
    write!(stderr, "> {}", program)?;
    for arg in args {
        write!(stderr, " {arg}")?;
    }
    stderr.reset()?;
    writeln!(stderr)
}

/// Dump a failing tool's captured output.
pub fn write_captured(message: &str) -> std::io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice());
    stderr.set_color(&scheme::warn())?;
    writeln!(stderr, "{message}")?;
    stderr.reset()
}

/// A non-fatal warning line.
pub fn write_warning(message: &str) -> std::io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice());
    stderr.set_color(&scheme::warn())?;
    writeln!(stderr, "{message}")?;
    stderr.reset()
}

/// A fatal error line.
pub fn write_error(message: &str) -> std::io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice());
    stderr.set_color(&scheme::danger())?;
    writeln!(stderr, "{message}")?;
    stderr.reset()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
