// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default: color only when stdout is a TTY

use std::io::IsTerminal;
use std::sync::OnceLock;

use termcolor::{Color, ColorChoice, ColorSpec};

/// Check if colors should be enabled based on TTY and environment variables.
///
/// This is cached once per process for consistent behavior.
pub fn should_colorize() -> bool {
    static SHOULD_COLORIZE: OnceLock<bool> = OnceLock::new();
    *SHOULD_COLORIZE.get_or_init(|| {
        if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
            return false;
        }

        if std::env::var("COLOR").is_ok_and(|v| v == "1") {
            return true;
        }

        std::io::stdout().is_terminal()
    })
}

/// ColorChoice for a termcolor stream, honoring `should_colorize`.
pub fn color_choice() -> ColorChoice {
    if should_colorize() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Color specs for the output streams.
pub mod scheme {
    use super::*;

    /// Command echo lines (`> black . --check`).
    pub fn info() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue));
        spec
    }

    /// Captured tool output and "not installed" warnings.
    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Fatal error lines.
    pub fn danger() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        spec
    }

    /// Check names in `stoplight list`.
    pub fn name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
