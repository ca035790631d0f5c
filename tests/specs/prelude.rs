// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Specs run against a throwaway project directory with fake tool
//! executables on a controlled PATH, so no real linter needs to be
//! installed (and none that happens to be installed is ever picked up).

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};

use std::path::PathBuf;
use std::process::Command;

/// Returns a Command configured to run the stoplight binary
pub fn stoplight_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stoplight"))
}

/// Every tool `all` would try to run (built-ins plus the pytest plugin).
pub const ALL_TOOLS: &[&str] = &[
    "ruff",
    "black",
    "mypy",
    "bandit",
    "isort",
    "pydocstyle",
    "pytest",
];

/// A throwaway project with its own config file and fake tool bin dir.
pub struct Project {
    dir: tempfile::TempDir,
    bin: PathBuf,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        // Fence config discovery inside the tempdir.
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let bin = dir.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        Self { dir, bin }
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Write stoplight.toml.
    pub fn config(&self, content: &str) {
        std::fs::write(self.dir.path().join("stoplight.toml"), content).unwrap();
    }

    /// Install a fake tool: a shell script run in place of the real one.
    #[cfg(unix)]
    pub fn tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    pub fn passing_tool(&self, name: &str) {
        self.tool(name, "exit 0");
    }

    #[cfg(unix)]
    pub fn failing_tool(&self, name: &str) {
        self.tool(name, "echo boom\nexit 1");
    }

    /// A passing tool that appends its arguments to a record file.
    #[cfg(unix)]
    pub fn recording_tool(&self, name: &str) -> PathBuf {
        let record = self.dir.path().join(format!("{name}.args"));
        self.tool(
            name,
            &format!("printf '%s\\n' \"$*\" >> {}\nexit 0", record.display()),
        );
        record
    }

    #[cfg(unix)]
    pub fn all_tools_pass(&self) {
        for name in ALL_TOOLS {
            self.passing_tool(name);
        }
    }

    /// A stoplight command running inside this project, seeing only the
    /// fake tools.
    pub fn cmd(&self) -> Command {
        let mut cmd = stoplight_cmd();
        cmd.current_dir(self.dir.path());
        cmd.env("PATH", &self.bin);
        cmd.env_remove("STOPLIGHT_CONFIG");
        cmd
    }
}
