//! Built-in checks.
//!
//! Each wraps one external tool. Registration order here is the
//! execution order of `all` when no `include` list is configured:
//! formatters run before the analyzers that read their output.

use std::sync::Arc;

use crate::error::Result;
use crate::invoke::ToolCheck;
use crate::registry::{CheckRegistry, RegisterOptions};

/// Canonical names of the built-in checks, in declared order.
pub const BUILTIN_NAMES: &[&str] = &["ruff", "black", "mypy", "bandit", "isort", "pydocstyle"];

/// Register every built-in check.
pub fn register_builtins(registry: &mut CheckRegistry) -> Result<()> {
    registry.register(
        Arc::new(ToolCheck::new(
            "ruff",
            "Runs the ruff linter.",
            "ruff",
            &["."],
        )),
        RegisterOptions::default(),
    )?;

    // Fixable: without --check black rewrites files in place.
    registry.register(
        Arc::new(
            ToolCheck::new(
                "black",
                "Runs the black code formatter.",
                "black",
                &[".", "--exclude=venv.+|.+\\.bak"],
            )
            .check_flag("--check"),
        ),
        RegisterOptions {
            add_to_fix: true,
            ..RegisterOptions::default()
        },
    )?;

    registry.register(
        Arc::new(ToolCheck::new(
            "mypy",
            "Runs the mypy static type checker.",
            "mypy",
            &["."],
        )),
        RegisterOptions::default(),
    )?;

    registry.register(
        Arc::new(ToolCheck::new(
            "bandit",
            "Runs the bandit security checker.",
            "bandit",
            &["-r", "-c", "pyproject.toml", "."],
        )),
        RegisterOptions::default(),
    )?;

    registry.register(
        Arc::new(
            ToolCheck::new(
                "isort",
                "Runs the isort import sorter.",
                "isort",
                &["."],
            )
            .check_flag("--check-only"),
        ),
        RegisterOptions {
            add_to_fix: true,
            ..RegisterOptions::default()
        },
    )?;

    registry.register(
        Arc::new(ToolCheck::new(
            "pydocstyle",
            "Runs the pydocstyle docstring checker.",
            "pydocstyle",
            &["."],
        )),
        RegisterOptions::default(),
    )?;

    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
