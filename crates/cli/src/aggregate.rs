// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composite-command aggregation.
//!
//! Runs an ordered selection of checks strictly sequentially - later
//! checks may depend on files rewritten by earlier ones (formatters
//! before linters) - and folds their statuses into one report and exit
//! code. There is no parallel fan-out here; see the concurrency notes
//! on `section.rs` for what that would take.

use serde::{Deserialize, Serialize};

use crate::check::{CheckResult, CheckStatus, RunMode};
use crate::context::ExecutionContext;
use crate::error::ExitCode;
use crate::registry::CheckDefinition;

/// Per-check state in an aggregate report. `Pending` marks checks that
/// never ran because an earlier failure halted the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pass,
    Fail,
    Skipped,
    Pending,
}

impl From<CheckStatus> for ReportStatus {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Pass => ReportStatus::Pass,
            CheckStatus::Fail => ReportStatus::Fail,
            CheckStatus::Skipped => ReportStatus::Skipped,
        }
    }
}

/// One row of an aggregate report; also the JSON shape for a single
/// check invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub status: ReportStatus,
    pub message: Option<String>,
}

impl ReportEntry {
    fn pending(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: ReportStatus::Pending,
            message: None,
        }
    }
}

impl From<CheckResult> for ReportEntry {
    fn from(result: CheckResult) -> Self {
        Self {
            name: result.name,
            status: result.status.into(),
            message: result.message,
        }
    }
}

/// Outcome of one composite run.
pub struct RunReport {
    pub entries: Vec<ReportEntry>,
    failed: bool,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        !self.failed
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::CheckFailed
        } else {
            ExitCode::Success
        }
    }
}

/// Run the selected checks in order and fold their results.
///
/// Every check's own failure is already captured in its `CheckResult`;
/// nothing propagates out of this loop. With `stop_after_first_failure`
/// the loop halts at the first effective failure (a missing tool counts
/// when `ignore_uninstalled` is off) and the remaining checks keep
/// their pending rows.
pub fn run_checks(
    ctx: &ExecutionContext,
    selection: &[&CheckDefinition],
    mode: RunMode,
) -> RunReport {
    let mut entries: Vec<ReportEntry> = selection
        .iter()
        .map(|def| ReportEntry::pending(&def.name))
        .collect();
    let mut failed = false;

    for (index, def) in selection.iter().enumerate() {
        tracing::debug!(check = %def.name, "running");
        let result = def.check.run(ctx, mode);
        let ok = result.is_ok(ctx.config.ignore_uninstalled);
        entries[index] = ReportEntry::from(result);

        if !ok {
            failed = true;
            if ctx.config.stop_after_first_failure {
                tracing::debug!(check = %def.name, "halting after failure");
                break;
            }
        }
    }

    RunReport { entries, failed }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
