// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registry.
//!
//! Holds every available check - built-in and plugin-supplied - and
//! computes the deterministic execution order for composite commands.
//! The registry is populated during startup and never altered mid-run.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::check::Check;
use crate::config::Config;
use crate::error::{Error, Result};

/// Options for registering a check. The three decorator shapes of older
/// plugin protocols collapse to one call with defaulted fields.
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// Registered name; defaults to the check's own name.
    pub name: Option<String>,
    /// Whether the check is part of `all`.
    pub add_to_all: bool,
    /// Whether the check is part of `fix`.
    pub add_to_fix: bool,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            name: None,
            add_to_all: true,
            add_to_fix: false,
        }
    }
}

/// A registered check with its metadata. Never mutated after registration.
pub struct CheckDefinition {
    pub name: String,
    pub check: Arc<dyn Check>,
    pub include_in_all: bool,
    pub include_in_fix: bool,
    pub declared_order: usize,
}

impl std::fmt::Debug for CheckDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckDefinition")
            .field("name", &self.name)
            .field("include_in_all", &self.include_in_all)
            .field("include_in_fix", &self.include_in_fix)
            .field("declared_order", &self.declared_order)
            .finish_non_exhaustive()
    }
}

/// Which composite command a selection is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    Fix,
}

/// A plugin-contributed command namespace: sub-checks addressed as
/// `stoplight <namespace> <check>`. Namespace members never join
/// `all`/`fix`.
pub struct Namespace {
    pub name: String,
    pub about: String,
    checks: Vec<CheckDefinition>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: about.into(),
            checks: Vec::new(),
        }
    }

    /// Add a check under this namespace.
    pub fn add(&mut self, check: Arc<dyn Check>, options: RegisterOptions) -> Result<()> {
        let name = options.name.unwrap_or_else(|| check.name().to_string());
        if self.checks.iter().any(|d| d.name == name) {
            return Err(Error::DuplicateCheck(format!("{} {}", self.name, name)));
        }
        let declared_order = self.checks.len();
        self.checks.push(CheckDefinition {
            name,
            check,
            include_in_all: false,
            include_in_fix: false,
            declared_order,
        });
        Ok(())
    }

    /// Look up a sub-check by name.
    pub fn lookup(&self, name: &str) -> Result<&CheckDefinition> {
        self.checks
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| Error::UnknownCheck(format!("{} {}", self.name, name)))
    }

    pub fn checks(&self) -> &[CheckDefinition] {
        &self.checks
    }
}

/// Mapping from check name to definition, plus contributed namespaces.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<CheckDefinition>,
    namespaces: BTreeMap<String, Namespace>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check. Re-registering an existing name fails and
    /// leaves the first registration in place.
    pub fn register(&mut self, check: Arc<dyn Check>, options: RegisterOptions) -> Result<()> {
        let name = options.name.unwrap_or_else(|| check.name().to_string());
        if self.contains(&name) {
            return Err(Error::DuplicateCheck(name));
        }

        let declared_order = self.checks.len();
        self.checks.push(CheckDefinition {
            name,
            check,
            include_in_all: options.add_to_all,
            include_in_fix: options.add_to_fix,
            declared_order,
        });
        Ok(())
    }

    /// Register a whole namespace. Its name must not collide with any
    /// flat check or other namespace.
    pub fn register_namespace(&mut self, namespace: Namespace) -> Result<()> {
        if self.contains(&namespace.name) {
            return Err(Error::DuplicateCheck(namespace.name));
        }
        self.namespaces.insert(namespace.name.clone(), namespace);
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.checks.iter().any(|d| d.name == name) || self.namespaces.contains_key(name)
    }

    /// Look up a flat check by name.
    pub fn lookup(&self, name: &str) -> Result<&CheckDefinition> {
        self.checks
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| Error::UnknownCheck(name.to_string()))
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    pub fn checks(&self) -> &[CheckDefinition] {
        &self.checks
    }

    /// Every flat check in effective order.
    ///
    /// An explicit `include` list dictates the exact order and silently
    /// drops names it does not match; `exclude` is then ignored
    /// entirely. Without `include`, checks run in declared order minus
    /// any excluded name.
    pub fn all_in_order<'a>(&'a self, config: &Config) -> Vec<&'a CheckDefinition> {
        self.ordered(self.checks.iter().collect(), config)
    }

    /// The ordered checks a composite command runs.
    pub fn selection<'a>(&'a self, config: &Config, kind: Selection) -> Vec<&'a CheckDefinition> {
        let members = self
            .checks
            .iter()
            .filter(|d| match kind {
                Selection::All => d.include_in_all,
                Selection::Fix => d.include_in_fix,
            })
            .collect();
        self.ordered(members, config)
    }

    fn ordered<'a>(
        &self,
        members: Vec<&'a CheckDefinition>,
        config: &Config,
    ) -> Vec<&'a CheckDefinition> {
        if !config.include.is_empty() {
            return config
                .include
                .iter()
                .filter_map(|name| members.iter().find(|d| &d.name == name).copied())
                .collect();
        }

        members
            .into_iter()
            .filter(|d| !config.exclude.contains(&d.name))
            .collect()
    }

    /// Merge another registry into this one, preserving its relative
    /// order. Name collisions are registry misuse and fail.
    pub fn merge(&mut self, other: CheckRegistry) -> Result<()> {
        for def in other.checks {
            self.register(
                def.check,
                RegisterOptions {
                    name: Some(def.name),
                    add_to_all: def.include_in_all,
                    add_to_fix: def.include_in_fix,
                },
            )?;
        }
        for (_, namespace) in other.namespaces {
            self.register_namespace(namespace)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
