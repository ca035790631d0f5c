// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::check::CheckStatus;
use crate::config::Config;
use crate::test_utils::{context, context_with};

#[test]
fn missing_tool_with_failing_fallback_is_skipped_not_failed() {
    let ctx = context();
    let result = run_tool(&ctx, "ghost", "definitely-not-a-real-tool-9x7", &[]);
    assert_eq!(result.status, CheckStatus::Skipped);
    assert!(result.message.unwrap().contains("not installed"));
}

#[cfg(unix)]
#[test]
fn zero_exit_maps_to_pass() {
    let ctx = context();
    let result = run_tool(&ctx, "truth", "true", &[]);
    assert_eq!(result.status, CheckStatus::Pass);
    assert!(result.message.is_none());
}

#[cfg(unix)]
#[test]
fn nonzero_exit_maps_to_fail() {
    let ctx = context();
    let result = run_tool(&ctx, "lies", "false", &[]);
    assert_eq!(result.status, CheckStatus::Fail);
}

#[cfg(unix)]
#[test]
fn failure_message_carries_captured_output() {
    let ctx = context();
    // sh -c writes to stdout then exits nonzero.
    let args = vec!["-c".to_string(), "echo diff found; exit 1".to_string()];
    let result = run_tool(&ctx, "shell", "sh", &args);
    assert_eq!(result.status, CheckStatus::Fail);
    assert_eq!(result.message.as_deref(), Some("diff found"));
}

#[test]
fn check_flag_is_appended_only_in_report_mode() {
    let ctx = context();
    let check = ToolCheck::new("black", "formatter", "black", &["."]).check_flag("--check");

    let report_args = check.args(&ctx, RunMode::Report);
    assert_eq!(report_args, vec![".", "--check"]);

    let fix_args = check.args(&ctx, RunMode::Fix);
    assert_eq!(fix_args, vec!["."]);
}

#[test]
fn default_flags_replace_base_args() {
    let mut config = Config::default();
    config
        .default_flags
        .insert("black".to_string(), vec!["src".to_string()]);
    let ctx = context_with(config);

    let check = ToolCheck::new("black", "formatter", "black", &["."]).check_flag("--check");
    let args = check.args(&ctx, RunMode::Report);
    // Configured flags replace the base list; the check flag still applies.
    assert_eq!(args, vec!["src", "--check"]);
}

#[test]
fn tool_check_exposes_name_and_description() {
    let check = ToolCheck::new("mypy", "Static type checker", "mypy", &["."]);
    assert_eq!(check.name(), "mypy");
    assert_eq!(check.description(), "Static type checker");
}
