// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! Check names are not static subcommands - plugins contribute them at
//! startup - so anything that is not a built-in command is captured as
//! an external subcommand and resolved against the registry.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Runs every configured code-quality tool and reports one stoplight result
#[derive(Parser)]
#[command(name = "stoplight")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "STOPLIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Level of detail (1 quiet, 2 normal, 3 verbose, 4 debug)
    #[arg(long, global = true, default_value_t = 2, value_name = "N")]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every check that is part of `all`
    All(CompositeArgs),
    /// Run the auto-fixing checks in fix mode
    Fix(CompositeArgs),
    /// List registered checks in execution order
    List,
    /// Generate shell completions
    Completions(CompletionsArgs),
    /// Run a single registered check by name
    #[command(external_subcommand)]
    Check(Vec<String>),
}

#[derive(clap::Args)]
pub struct CompositeArgs {
    /// Directory to run the tools against
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Count missing tools as success
    #[arg(long)]
    pub ignore_uninstalled: bool,

    /// Halt at the first failing check
    #[arg(long)]
    pub stop_after_first_failure: bool,

    /// Skip a check by name (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,
}

/// Arguments of a single-check invocation (`stoplight black src --fix`).
///
/// Parsed out of the external-subcommand capture, whose first element is
/// the check name itself.
#[derive(Parser)]
pub struct SingleArgs {
    /// Directory to run the tool against
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Let the tool auto-correct instead of reporting
    #[arg(long)]
    pub fix: bool,

    /// Count a missing tool as success
    #[arg(long)]
    pub ignore_uninstalled: bool,
}

impl SingleArgs {
    /// Parse the trailing arguments of an external subcommand capture.
    /// `argv[0]` (the check name) is consumed as the binary name.
    pub fn parse_external(argv: &[String]) -> Result<Self, clap::Error> {
        Self::try_parse_from(argv)
    }
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
