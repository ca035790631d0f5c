// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `stoplight list`: registry introspection in effective order.

use std::io::Write;

use serde::Serialize;
use termcolor::{StandardStream, WriteColor};

use stoplight::cli::Cli;
use stoplight::color::{color_choice, scheme};
use stoplight::config::Overrides;
use stoplight::error::ExitCode;
use stoplight::registry::CheckDefinition;

#[derive(Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    description: &'a str,
    all: bool,
    fix: bool,
}

impl<'a> From<&'a CheckDefinition> for ListEntry<'a> {
    fn from(def: &'a CheckDefinition) -> Self {
        Self {
            name: &def.name,
            description: def.check.description(),
            all: def.include_in_all,
            fix: def.include_in_fix,
        }
    }
}

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let (registry, sections) = crate::build_registry()?;
    let ctx = crate::build_context(cli, Overrides::default(), sections)?;

    let ordered = registry.all_in_order(&ctx.config);

    if !ctx.is_text() {
        let entries: Vec<ListEntry> = ordered.iter().map(|def| ListEntry::from(*def)).collect();
        let json = serde_json::to_string_pretty(&entries)?;
        println!("{json}");
        return Ok(ExitCode::Success);
    }

    let mut stdout = StandardStream::stdout(color_choice());
    for def in &ordered {
        write_entry(&mut stdout, def)?;
    }

    for namespace in registry.namespaces() {
        writeln!(stdout)?;
        writeln!(stdout, "{}: {}", namespace.name, namespace.about)?;
        for def in namespace.checks() {
            write!(stdout, "  ")?;
            write_entry(&mut stdout, def)?;
        }
    }

    Ok(ExitCode::Success)
}

fn write_entry(stdout: &mut StandardStream, def: &CheckDefinition) -> std::io::Result<()> {
    stdout.set_color(&scheme::name())?;
    write!(stdout, "{:<12}", def.name)?;
    stdout.reset()?;

    let membership = match (def.include_in_all, def.include_in_fix) {
        (true, true) => "[all] [fix]",
        (true, false) => "[all]      ",
        (false, true) => "      [fix]",
        (false, false) => "           ",
    };
    writeln!(stdout, " {membership}  {}", def.check.description())
}
