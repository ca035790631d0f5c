// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-check invocation: `stoplight <check> [DIR] [--fix]`, including
//! namespaced plugin checks (`stoplight <namespace> <check> ...`).

use stoplight::aggregate::ReportEntry;
use stoplight::check::{CheckStatus, RunMode};
use stoplight::cli::{Cli, SingleArgs};
use stoplight::config::Overrides;
use stoplight::error::{Error, ExitCode};
use stoplight::output::json;
use stoplight::registry::CheckRegistry;

pub fn run(cli: &Cli, argv: &[String]) -> anyhow::Result<ExitCode> {
    let (registry, sections) = crate::build_registry()?;

    let (def, args) = resolve_invocation(&registry, argv)?;

    let overrides = Overrides {
        directory: args.directory.clone(),
        ignore_uninstalled: args.ignore_uninstalled.then_some(true),
        ..Overrides::default()
    };
    let ctx = crate::build_context(cli, overrides, sections)?;

    let mode = if args.fix {
        RunMode::Fix
    } else {
        RunMode::Report
    };
    let result = def.check.run(&ctx, mode);

    if !ctx.is_text() {
        json::write_entry(&mut std::io::stdout(), &ReportEntry::from(result.clone()))?;
    }

    Ok(match result.status {
        CheckStatus::Pass => ExitCode::Success,
        CheckStatus::Fail => ExitCode::CheckFailed,
        CheckStatus::Skipped => {
            if ctx.config.ignore_uninstalled {
                ExitCode::Success
            } else {
                ExitCode::ToolMissing
            }
        }
    })
}

/// Resolve the captured argv to a check definition and its arguments.
///
/// `argv[0]` is either a flat check name or a namespace; a namespace
/// consumes `argv[1]` as the sub-check name.
fn resolve_invocation<'a>(
    registry: &'a CheckRegistry,
    argv: &[String],
) -> anyhow::Result<(&'a stoplight::CheckDefinition, SingleArgs)> {
    let name = &argv[0];

    if let Some(namespace) = registry.namespace(name) {
        let Some(sub) = argv.get(1) else {
            return Err(Error::UnknownCheck(name.clone()).into());
        };
        let def = namespace.lookup(sub)?;

        // Re-join the two-part name so clap errors read naturally.
        let mut rest = vec![format!("{name} {sub}")];
        rest.extend_from_slice(&argv[2..]);
        let args = parse_args(&rest);
        return Ok((def, args));
    }

    let def = registry.lookup(name)?;
    Ok((def, parse_args(argv)))
}

fn parse_args(argv: &[String]) -> SingleArgs {
    match SingleArgs::parse_external(argv) {
        Ok(args) => args,
        Err(err) => err.exit(),
    }
}
