// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External tool invocation.
//!
//! `run_tool` spawns one wrapped tool against the configured directory,
//! waits for it, and maps the outcome to a normalized `CheckResult`.
//! A tool missing from the search path is retried through the Python
//! module runner (`python -m <tool>`) - pipx-style installs isolate
//! console scripts from the active environment - and only counts as
//! skipped, never failed, when neither form resolves.

use std::path::Path;
use std::process::{Command, Output};

use crate::check::{Check, CheckResult, RunMode};
use crate::context::{ExecutionContext, Verbosity};
use crate::output::text;

/// Module runners tried when direct executable lookup fails.
const PYTHON_RUNNERS: &[&str] = &["python3", "python"];

/// A check backed by one external tool invocation.
///
/// Covers every built-in check: the interesting state is which program
/// to spawn, its base arguments, and the flag that switches it from
/// rewrite mode to report-only mode.
pub struct ToolCheck {
    name: &'static str,
    description: &'static str,
    program: &'static str,
    base_args: &'static [&'static str],
    check_flag: Option<&'static str>,
}

impl ToolCheck {
    pub fn new(
        name: &'static str,
        description: &'static str,
        program: &'static str,
        base_args: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            description,
            program,
            base_args,
            check_flag: None,
        }
    }

    /// Flag appended in report mode so the tool checks instead of
    /// rewriting (e.g. black's `--check`).
    pub fn check_flag(mut self, flag: &'static str) -> Self {
        self.check_flag = Some(flag);
        self
    }

    fn args(&self, ctx: &ExecutionContext, mode: RunMode) -> Vec<String> {
        let mut args: Vec<String> = match ctx.config.default_flags.get(self.name) {
            Some(flags) => flags.clone(),
            None => self.base_args.iter().map(|s| s.to_string()).collect(),
        };

        if let Some(flag) = self.check_flag
            && !mode.is_fix()
        {
            args.push(flag.to_string());
        }
        args
    }
}

impl Check for ToolCheck {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn run(&self, ctx: &ExecutionContext, mode: RunMode) -> CheckResult {
        run_tool(ctx, self.name, self.program, &self.args(ctx, mode))
    }
}

/// Spawn one external tool and normalize its outcome.
///
/// In text mode the stoplight line for this check is printed as soon as
/// the result is known, before any aggregate exists. JSON mode emits
/// nothing here; only the structured document is printed later.
pub fn run_tool(
    ctx: &ExecutionContext,
    check_name: &str,
    program: &str,
    args: &[String],
) -> CheckResult {
    if ctx.is_text() && ctx.verbosity >= Verbosity::Verbose {
        let _ = text::write_command(program, args);
    }

    let result = match spawn(program, args, ctx.directory()) {
        Ok(output) => interpret(check_name, &output),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            run_fallback(ctx, check_name, program, args)
        }
        Err(err) => CheckResult::failed(
            check_name,
            Some(format!("failed to run {program}: {err}")),
        ),
    };

    report(ctx, program, &result);
    result
}

fn spawn(program: &str, args: &[String], directory: &Path) -> std::io::Result<Output> {
    Command::new(program)
        .args(args)
        .current_dir(directory)
        .output()
}

/// Retry through `python -m <tool>`.
fn run_fallback(
    ctx: &ExecutionContext,
    check_name: &str,
    program: &str,
    args: &[String],
) -> CheckResult {
    let mut module_args = vec!["-m".to_string(), program.to_string()];
    module_args.extend_from_slice(args);

    for runner in PYTHON_RUNNERS {
        match spawn(runner, &module_args, ctx.directory()) {
            Ok(output) => {
                if module_missing(&output) {
                    break;
                }
                tracing::debug!("{check_name}: ran via {runner} -m {program}");
                return interpret(check_name, &output);
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => {
                return CheckResult::failed(
                    check_name,
                    Some(format!("failed to run {runner} -m {program}: {err}")),
                );
            }
        }
    }

    CheckResult::skipped(check_name, format!("{program} is not installed"))
}

/// The runner exists but the tool's module does not.
fn module_missing(output: &Output) -> bool {
    !output.status.success()
        && String::from_utf8_lossy(&output.stderr).contains("No module named")
}

fn interpret(check_name: &str, output: &Output) -> CheckResult {
    if output.status.success() {
        return CheckResult::passed(check_name);
    }

    let captured = captured_output(output);
    CheckResult::failed(check_name, (!captured.is_empty()).then_some(captured))
}

fn captured_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut message = String::new();
    if !stdout.trim().is_empty() {
        message.push_str(stdout.trim_end());
    }
    if !stderr.trim().is_empty() {
        if !message.is_empty() {
            message.push('\n');
        }
        message.push_str(stderr.trim_end());
    }
    message
}

/// Streamed per-check output for text mode.
fn report(ctx: &ExecutionContext, program: &str, result: &CheckResult) {
    if !ctx.is_text() {
        return;
    }

    let _ = text::write_status_line(result);

    match result.status {
        crate::check::CheckStatus::Fail if ctx.verbosity >= Verbosity::Normal => {
            if let Some(message) = &result.message {
                let _ = text::write_captured(message);
            }
        }
        crate::check::CheckStatus::Skipped if ctx.verbosity >= Verbosity::Verbose => {
            let _ = text::write_warning(&format!("Tool {program} not installed!"));
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
