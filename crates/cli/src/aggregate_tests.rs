// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::sync::Arc;

use crate::config::Config;
use crate::registry::{CheckRegistry, RegisterOptions, Selection};
use crate::test_utils::{StaticCheck, context_with};

fn run(registry: &CheckRegistry, config: Config) -> RunReport {
    let ctx = context_with(config);
    let selection = registry.selection(&ctx.config, Selection::All);
    run_checks(&ctx, &selection, RunMode::Report)
}

fn register(registry: &mut CheckRegistry, check: &Arc<StaticCheck>) {
    let check: Arc<dyn crate::check::Check> = check.clone();
    registry
        .register(check, RegisterOptions::default())
        .unwrap();
}

#[test]
fn all_pass_exits_zero() {
    let mut registry = CheckRegistry::new();
    for name in ["ruff", "black", "mypy"] {
        register(&mut registry, &StaticCheck::passing(name));
    }

    let report = run(&registry, Config::default());
    assert!(report.passed());
    assert_eq!(report.exit_code(), ExitCode::Success);
    assert!(report.entries.iter().all(|e| e.status == ReportStatus::Pass));
}

#[test]
fn one_failure_fails_the_run_but_everything_still_runs() {
    let mut registry = CheckRegistry::new();
    let black = StaticCheck::failing("black");
    let mypy = StaticCheck::passing("mypy");
    let bandit = StaticCheck::passing("bandit");
    register(&mut registry, &black);
    register(&mut registry, &mypy);
    register(&mut registry, &bandit);

    let report = run(&registry, Config::default());
    assert!(!report.passed());
    assert_eq!(report.exit_code(), ExitCode::CheckFailed);
    // All three results are present in the report.
    assert_eq!(report.entries.len(), 3);
    assert_eq!(mypy.runs(), 1);
    assert_eq!(bandit.runs(), 1);
}

#[test]
fn stop_after_first_failure_never_invokes_later_checks() {
    let mut registry = CheckRegistry::new();
    let black = StaticCheck::failing("black");
    let mypy = StaticCheck::passing("mypy");
    let bandit = StaticCheck::passing("bandit");
    register(&mut registry, &black);
    register(&mut registry, &mypy);
    register(&mut registry, &bandit);

    let config = Config {
        stop_after_first_failure: true,
        ..Config::default()
    };
    let report = run(&registry, config);

    assert!(!report.passed());
    assert_eq!(mypy.runs(), 0);
    assert_eq!(bandit.runs(), 0);
    // Unreached checks stay pending in the report.
    assert_eq!(report.entries[0].status, ReportStatus::Fail);
    assert_eq!(report.entries[1].status, ReportStatus::Pending);
    assert_eq!(report.entries[2].status, ReportStatus::Pending);
}

#[test]
fn skipped_counts_as_failure_by_default() {
    let mut registry = CheckRegistry::new();
    register(&mut registry, &StaticCheck::missing("mypy"));

    let report = run(&registry, Config::default());
    assert!(!report.passed());
}

#[test]
fn skipped_is_ok_when_ignoring_uninstalled() {
    let mut registry = CheckRegistry::new();
    register(&mut registry, &StaticCheck::missing("mypy"));
    register(&mut registry, &StaticCheck::passing("black"));

    let config = Config {
        ignore_uninstalled: true,
        ..Config::default()
    };
    let report = run(&registry, config);
    assert!(report.passed());
    assert_eq!(report.exit_code(), ExitCode::Success);
}

#[test]
fn unignored_skip_triggers_early_exit_too() {
    let mut registry = CheckRegistry::new();
    let mypy = StaticCheck::missing("mypy");
    let black = StaticCheck::passing("black");
    register(&mut registry, &mypy);
    register(&mut registry, &black);

    let config = Config {
        stop_after_first_failure: true,
        ..Config::default()
    };
    let report = run(&registry, config);
    assert!(!report.passed());
    assert_eq!(black.runs(), 0);
    assert_eq!(report.entries[1].status, ReportStatus::Pending);
}

#[test]
fn exclude_scenario_runs_remaining_checks_in_order() {
    let mut registry = CheckRegistry::new();
    let black = StaticCheck::passing("black");
    let mypy = StaticCheck::passing("mypy");
    let bandit = StaticCheck::passing("bandit");
    register(&mut registry, &black);
    register(&mut registry, &mypy);
    register(&mut registry, &bandit);

    let config = Config {
        exclude: vec!["bandit".to_string()],
        ..Config::default()
    };
    let report = run(&registry, config);

    let ran: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(ran, ["black", "mypy"]);
    assert_eq!(bandit.runs(), 0);
}

#[test]
fn fix_mode_is_passed_through_to_checks() {
    let mut registry = CheckRegistry::new();
    register(
        &mut registry,
        &StaticCheck::passing("black"),
    );
    let ctx = context_with(Config::default());
    let selection = registry.selection(&ctx.config, Selection::All);
    let report = run_checks(&ctx, &selection, RunMode::Fix);
    assert!(report.passed());
}

#[test]
fn pending_entries_serialize_with_null_message() {
    let entry = ReportEntry {
        name: "mypy".to_string(),
        status: ReportStatus::Pending,
        message: None,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["status"], "pending");
    assert!(json["message"].is_null());
}
