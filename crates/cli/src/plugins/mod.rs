// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin loading.
//!
//! A plugin is anything implementing [`Plugin`]: it gets one shot at
//! startup to add checks (flat or namespaced) to the registry and to
//! declare typed config sections. The host enumerates a static list -
//! no runtime package scanning - and loads each in order.
//!
//! One plugin failing must not take the others down: its check
//! registrations are staged in a scratch registry and discarded on
//! error. Registry misuse (duplicate names, section key conflicts) is
//! not recoverable and aborts startup.

pub mod pytest;

use crate::error::{Error, Result};
use crate::registry::CheckRegistry;
use crate::section::SectionRegistry;

/// Capability contract implemented per plugin.
pub trait Plugin: Send + Sync {
    /// Name used in diagnostics when the plugin fails to load.
    fn name(&self) -> &str;

    /// Register checks and declare config sections.
    fn register(&self, checks: &mut CheckRegistry, sections: &mut SectionRegistry) -> Result<()>;
}

/// The plugins compiled into this binary, in load order.
pub fn discover() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(pytest::PytestPlugin)]
}

/// Load every plugin, isolating individual failures.
pub fn load(
    plugins: &[Box<dyn Plugin>],
    registry: &mut CheckRegistry,
    sections: &mut SectionRegistry,
) -> Result<()> {
    for plugin in plugins {
        let mut scratch = CheckRegistry::new();
        match plugin.register(&mut scratch, sections) {
            Ok(()) => registry.merge(scratch)?,
            Err(err @ (Error::DuplicateCheck(_) | Error::ConfigKeyConflict { .. })) => {
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(plugin = plugin.name(), "plugin failed to load: {err}");
                eprintln!(
                    "stoplight: warning: plugin '{}' failed to load: {err}",
                    plugin.name()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
