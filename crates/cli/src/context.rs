// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide execution state.
//!
//! The context is built once per invocation, after config resolution and
//! plugin loading, and is read-only from then on. The one sanctioned
//! exception is the plugin config sections, which are shared cells (see
//! `section.rs`).

use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::section::SectionRegistry;

/// Verbosity ladder for the `--verbosity` flag.
///
/// Level 1 (quiet) prints only the stoplight line per check; 2 (normal)
/// adds captured output of failures; 3 (verbose) adds the executed
/// command line and "not installed" warnings; 4 is internal debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a numeric `--verbosity N` level. Out-of-range values clamp.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => Verbosity::Quiet,
            2 => Verbosity::Normal,
            3 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet => 1,
            Verbosity::Normal => 2,
            Verbosity::Verbose => 3,
            Verbosity::Debug => 4,
        }
    }
}

/// Everything a check implementation may read while running.
pub struct ExecutionContext {
    /// Resolved configuration.
    pub config: Config,
    /// Requested output format.
    pub output_format: OutputFormat,
    /// Requested verbosity.
    pub verbosity: Verbosity,
    /// Plugin config sections, singleton per key.
    pub sections: SectionRegistry,
}

impl ExecutionContext {
    pub fn new(
        config: Config,
        output_format: OutputFormat,
        verbosity: Verbosity,
        sections: SectionRegistry,
    ) -> Self {
        Self {
            config,
            output_format,
            verbosity,
            sections,
        }
    }

    /// The directory checks run against.
    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    pub fn is_text(&self) -> bool {
        self.output_format == OutputFormat::Text
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
