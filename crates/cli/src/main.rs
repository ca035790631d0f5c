// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stoplight CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use stoplight::cli::{Cli, Command};
use stoplight::config::{self, Overrides};
use stoplight::context::{ExecutionContext, Verbosity};
use stoplight::error::ExitCode;
use stoplight::section::{SectionRegistry, StateView};
use stoplight::{CheckRegistry, checks, discovery, plugins};

mod cmd_all;
mod cmd_check;
mod cmd_list;

fn init_logging() {
    let filter = EnvFilter::try_from_env("STOPLIGHT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            let _ = stoplight::output::text::write_error(&format!("stoplight: {e}"));
            match e.downcast_ref::<stoplight::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::All(args)) => cmd_all::run(&cli, args, stoplight::Selection::All),
        Some(Command::Fix(args)) => cmd_all::run(&cli, args, stoplight::Selection::Fix),
        Some(Command::List) => cmd_list::run(&cli),
        Some(Command::Completions(args)) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "stoplight",
                &mut std::io::stdout(),
            );
            Ok(ExitCode::Success)
        }
        Some(Command::Check(argv)) => cmd_check::run(&cli, argv),
    }
}

/// Build the check registry: built-ins first, then plugins in load order.
pub(crate) fn build_registry() -> anyhow::Result<(CheckRegistry, SectionRegistry)> {
    let mut registry = CheckRegistry::new();
    checks::register_builtins(&mut registry)?;

    let mut sections = SectionRegistry::new();
    let discovered = plugins::discover();
    plugins::load(&discovered, &mut registry, &mut sections)?;

    Ok((registry, sections))
}

/// Resolve config and produce the execution context. Fatal setup errors
/// (bad types, strict section violations) surface here, before any
/// check runs.
pub(crate) fn build_context(
    cli: &Cli,
    overrides: Overrides,
    sections: SectionRegistry,
) -> anyhow::Result<ExecutionContext> {
    let cwd = std::env::current_dir()?;
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;

    let tree = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Some(config::load_tree(path)?)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            None
        }
    };

    let resolved = config::resolve(tree, overrides)?;
    let verbosity = Verbosity::from_level(cli.verbosity);

    let state = StateView {
        verbosity,
        output_format: cli.format,
        directory: resolved.directory.clone(),
    };
    sections.resolve(&resolved.tree, &state)?;

    Ok(ExecutionContext::new(resolved, cli.format, verbosity, sections))
}
