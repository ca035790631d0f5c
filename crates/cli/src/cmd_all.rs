// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The composite commands: `all` and `fix`.

use stoplight::aggregate;
use stoplight::check::RunMode;
use stoplight::cli::{Cli, CompositeArgs};
use stoplight::config::Overrides;
use stoplight::error::ExitCode;
use stoplight::output::json;
use stoplight::registry::Selection;

pub fn run(cli: &Cli, args: &CompositeArgs, kind: Selection) -> anyhow::Result<ExitCode> {
    let overrides = Overrides {
        directory: args.directory.clone(),
        exclude: (!args.exclude.is_empty()).then(|| args.exclude.clone()),
        stop_after_first_failure: args.stop_after_first_failure.then_some(true),
        ignore_uninstalled: args.ignore_uninstalled.then_some(true),
        include: None,
    };

    let (registry, sections) = crate::build_registry()?;
    let ctx = crate::build_context(cli, overrides, sections)?;

    let selection = registry.selection(&ctx.config, kind);
    let mode = match kind {
        Selection::All => RunMode::Report,
        Selection::Fix => RunMode::Fix,
    };

    let report = aggregate::run_checks(&ctx, &selection, mode);

    if !ctx.is_text() {
        json::write_report(&mut std::io::stdout(), &report.entries)?;
    }

    Ok(report.exit_code())
}
