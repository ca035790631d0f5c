// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed plugin config sections.
//!
//! A plugin declares a schema for its slice of the config tree; the
//! registry hands back the one live instance for that key. Execution is
//! single-threaded, but the section is a shared cell read and written
//! through `Arc` handles, so access goes through an `RwLock` - the
//! explicit mutual exclusion a parallel runner would need anyway.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cli::OutputFormat;
use crate::config::value_type_name;
use crate::context::Verbosity;
use crate::error::{Error, Result};

/// Expected kind of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
    StringList,
}

impl FieldKind {
    pub fn expected(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::StringList => "array of strings",
        }
    }

    fn matches(self, value: &toml::Value) -> bool {
        match self {
            FieldKind::String => value.is_str(),
            FieldKind::Integer => value.is_integer(),
            // Integers are accepted where a float is declared; toml
            // writes "3" for 3.0 more often than not.
            FieldKind::Float => value.is_float() || value.is_integer(),
            FieldKind::Boolean => value.is_bool(),
            FieldKind::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(toml::Value::is_str)),
        }
    }
}

/// Declared shape of a section: an ordered field list plus policy flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSchema {
    /// Dotted location of the section within the config tree.
    pub config_key: String,
    pub fields: Vec<(String, FieldKind)>,
    /// Reject unknown keys and mismatched types when true.
    pub strict: bool,
    /// Grant the section a read-only execution state snapshot.
    pub with_state: bool,
}

impl SectionSchema {
    pub fn new(config_key: impl Into<String>) -> Self {
        Self {
            config_key: config_key.into(),
            fields: Vec::new(),
            strict: true,
            with_state: false,
        }
    }

    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push((name.into(), kind));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_state(mut self, with_state: bool) -> Self {
        self.with_state = with_state;
        self
    }

    fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, kind)| *kind)
    }
}

/// Read-only execution state handed to `with_state` sections.
#[derive(Debug, Clone, PartialEq)]
pub struct StateView {
    pub verbosity: Verbosity,
    pub output_format: OutputFormat,
    pub directory: PathBuf,
}

/// One live section instance. Exactly one exists per config key; every
/// holder of the `Arc` observes updates made by any other holder.
#[derive(Debug)]
pub struct ConfigSection {
    schema: SectionSchema,
    values: RwLock<toml::Table>,
    state: OnceLock<StateView>,
}

impl ConfigSection {
    fn new(schema: SectionSchema) -> Self {
        Self {
            schema,
            values: RwLock::new(toml::Table::new()),
            state: OnceLock::new(),
        }
    }

    pub fn schema(&self) -> &SectionSchema {
        &self.schema
    }

    /// The state snapshot, present only for `with_state` sections after
    /// resolution.
    pub fn state(&self) -> Option<&StateView> {
        self.state.get()
    }

    pub fn get(&self, key: &str) -> Option<toml::Value> {
        self.read().get(key).cloned()
    }

    pub fn get_str(&self, key: &str) -> Option<String> {
        self.read().get(key).and_then(|v| v.as_str()).map(str::to_string)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.read().get(key).and_then(toml::Value::as_bool)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        let values = self.read();
        match values.get(key) {
            Some(toml::Value::Float(f)) => Some(*f),
            Some(toml::Value::Integer(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn get_str_list(&self, key: &str) -> Option<Vec<String>> {
        self.read().get(key).and_then(|v| {
            v.as_array().map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
        })
    }

    /// Merge values into the section, validating against the schema
    /// when strict. Visible to every holder of this section.
    pub fn update(&self, values: toml::Table) -> Result<()> {
        self.validate(&values)?;
        self.write().extend(values);
        Ok(())
    }

    fn validate(&self, values: &toml::Table) -> Result<()> {
        if !self.schema.strict {
            return Ok(());
        }

        for (key, value) in values {
            let qualified = format!("{}.{}", self.schema.config_key, key);
            let Some(kind) = self.schema.kind_of(key) else {
                return Err(Error::Config {
                    message: format!(
                        "unknown key '{qualified}' (section '{}' is strict)",
                        self.schema.config_key
                    ),
                    path: None,
                });
            };
            if !kind.matches(value) {
                return Err(Error::ConfigType {
                    key: qualified,
                    expected: kind.expected(),
                    found: value_type_name(value).to_string(),
                });
            }
        }
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, toml::Table> {
        match self.values.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, toml::Table> {
        match self.values.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Process-wide mapping from config key to its singleton section.
#[derive(Default)]
pub struct SectionRegistry {
    sections: BTreeMap<String, Arc<ConfigSection>>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch-or-create the section for a schema's key.
    ///
    /// Declaring the same schema twice returns the existing instance;
    /// a different schema under the same key is a conflict.
    pub fn declare(&mut self, schema: SectionSchema) -> Result<Arc<ConfigSection>> {
        if let Some(existing) = self.sections.get(&schema.config_key) {
            if *existing.schema() == schema {
                return Ok(Arc::clone(existing));
            }
            return Err(Error::ConfigKeyConflict {
                key: schema.config_key,
            });
        }

        let section = Arc::new(ConfigSection::new(schema));
        self.sections
            .insert(section.schema().config_key.clone(), Arc::clone(&section));
        Ok(section)
    }

    pub fn get(&self, config_key: &str) -> Option<Arc<ConfigSection>> {
        self.sections.get(config_key).cloned()
    }

    /// Populate every declared section from the resolved config tree.
    ///
    /// Strict sections fail fast here on unknown keys or type
    /// mismatches; `with_state` sections receive their snapshot.
    pub fn resolve(&self, tree: &toml::Table, state: &StateView) -> Result<()> {
        for (key, section) in &self.sections {
            if section.schema().with_state {
                let _ = section.state.set(state.clone());
            }

            let Some(value) = lookup_dotted(tree, key) else {
                continue;
            };
            let Some(table) = value.as_table() else {
                return Err(Error::ConfigType {
                    key: key.clone(),
                    expected: "table",
                    found: value_type_name(value).to_string(),
                });
            };
            section.update(table.clone())?;
        }
        Ok(())
    }
}

/// Walk a dotted key path ("plugin-name.extra") through nested tables.
fn lookup_dotted<'a>(tree: &'a toml::Table, dotted: &str) -> Option<&'a toml::Value> {
    let mut segments = dotted.split('.');
    let first = segments.next()?;
    let mut current = tree.get(first)?;
    for segment in segments {
        current = current.as_table()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
#[path = "section_tests.rs"]
mod tests;
