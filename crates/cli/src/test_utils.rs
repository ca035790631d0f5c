// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::check::{Check, CheckResult, CheckStatus, RunMode};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::context::{ExecutionContext, Verbosity};
use crate::section::SectionRegistry;

/// Quiet JSON-mode context so tests never write to the terminal.
pub fn context() -> ExecutionContext {
    context_with(Config::default())
}

pub fn context_with(config: Config) -> ExecutionContext {
    ExecutionContext::new(
        config,
        OutputFormat::Json,
        Verbosity::Quiet,
        SectionRegistry::new(),
    )
}

/// A check with a fixed outcome that counts its invocations.
pub struct StaticCheck {
    name: &'static str,
    status: CheckStatus,
    runs: AtomicUsize,
}

impl StaticCheck {
    pub fn new(name: &'static str, status: CheckStatus) -> Arc<Self> {
        Arc::new(Self {
            name,
            status,
            runs: AtomicUsize::new(0),
        })
    }

    pub fn passing(name: &'static str) -> Arc<Self> {
        Self::new(name, CheckStatus::Pass)
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Self::new(name, CheckStatus::Fail)
    }

    pub fn missing(name: &'static str) -> Arc<Self> {
        Self::new(name, CheckStatus::Skipped)
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

impl Check for StaticCheck {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Static test check"
    }

    fn run(&self, _ctx: &ExecutionContext, _mode: RunMode) -> CheckResult {
        self.runs.fetch_add(1, Ordering::SeqCst);
        match self.status {
            CheckStatus::Pass => CheckResult::passed(self.name),
            CheckStatus::Fail => CheckResult::failed(self.name, Some("boom".to_string())),
            CheckStatus::Skipped => CheckResult::skipped(self.name, "not installed"),
        }
    }
}
