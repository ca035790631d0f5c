//! Check result types and the Check trait.

use serde::{Deserialize, Serialize};

use crate::context::ExecutionContext;

/// Normalized outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The wrapped tool ran and exited zero.
    Pass,
    /// The wrapped tool ran and exited nonzero.
    Fail,
    /// The wrapped tool could not be resolved (not installed).
    Skipped,
}

/// How a check should run its underlying tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Report violations without touching files.
    Report,
    /// Let the tool auto-correct what it can.
    Fix,
}

impl RunMode {
    pub fn is_fix(self) -> bool {
        matches!(self, RunMode::Fix)
    }
}

/// Result of running a single check. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "black", "mypy").
    pub name: String,

    /// Normalized status.
    pub status: CheckStatus,

    /// Captured tool output or skip reason. Serialized as null when absent.
    pub message: Option<String>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            message: None,
        }
    }

    /// Create a failing check result with optional captured output.
    pub fn failed(name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            message,
        }
    }

    /// Create a skipped (tool not installed) check result.
    pub fn skipped(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Skipped,
            message: Some(message.into()),
        }
    }

    /// Whether this result counts as success for aggregation.
    ///
    /// A skipped check only counts as success when missing tools are
    /// being ignored.
    pub fn is_ok(&self, ignore_uninstalled: bool) -> bool {
        match self.status {
            CheckStatus::Pass => true,
            CheckStatus::Fail => false,
            CheckStatus::Skipped => ignore_uninstalled,
        }
    }
}

/// The Check trait defines a single quality check.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Check>`.
/// Implementations must capture their own failures into the returned
/// `CheckResult`; nothing raised here propagates past the aggregator.
pub trait Check: Send + Sync {
    /// Unique identifier for this check (e.g., "black", "mypy").
    fn name(&self) -> &str;

    /// Human-readable description for `stoplight list`.
    fn description(&self) -> &str;

    /// Run the check and return its normalized result.
    fn run(&self, ctx: &ExecutionContext, mode: RunMode) -> CheckResult;
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
