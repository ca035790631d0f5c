// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The pytest plugin.
//!
//! Ships in-tree as the reference implementation of the plugin
//! contract: one flat check plus a strict typed config section.
//!
//! ```toml
//! [pytest]
//! coverage = 85.0            # adds --cov --cov-fail-under=85
//! flags = ["-q", "tests"]    # replaces the default argument list
//! ```

use std::sync::Arc;

use crate::check::{Check, CheckResult, RunMode};
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::invoke::run_tool;
use crate::registry::{CheckRegistry, RegisterOptions};
use crate::section::{ConfigSection, FieldKind, SectionRegistry, SectionSchema};

/// Section key inside stoplight.toml.
const SECTION_KEY: &str = "pytest";

pub struct PytestPlugin;

impl super::Plugin for PytestPlugin {
    fn name(&self) -> &str {
        "pytest"
    }

    fn register(&self, checks: &mut CheckRegistry, sections: &mut SectionRegistry) -> Result<()> {
        let section = sections.declare(
            SectionSchema::new(SECTION_KEY)
                .field("coverage", FieldKind::Float)
                .field("flags", FieldKind::StringList),
        )?;

        checks.register(
            Arc::new(PytestCheck { section }),
            RegisterOptions::default(),
        )
    }
}

struct PytestCheck {
    section: Arc<ConfigSection>,
}

impl PytestCheck {
    fn args(&self) -> Vec<String> {
        let mut args = self.section.get_str_list("flags").unwrap_or_default();
        if let Some(minimum) = self.section.get_float("coverage") {
            args.push("--cov".to_string());
            args.push(format!("--cov-fail-under={minimum}"));
        }
        args
    }
}

impl Check for PytestCheck {
    fn name(&self) -> &str {
        "pytest"
    }

    fn description(&self) -> &str {
        "Runs the pytest test suite."
    }

    fn run(&self, ctx: &ExecutionContext, _mode: RunMode) -> CheckResult {
        run_tool(ctx, "pytest", "pytest", &self.args())
    }
}

#[cfg(test)]
#[path = "pytest_tests.rs"]
mod tests;
