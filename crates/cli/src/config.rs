//! Configuration resolution.
//!
//! Merges hard-coded defaults, the parsed stoplight.toml tree, and
//! per-invocation CLI overrides into one `Config`. Precedence is
//! CLI override > file value > default, evaluated per key; an absent
//! override never replaces a resolved value, but any present override
//! does - including empty lists and `false`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolved top-level options. Held in the execution context for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the wrapped tools run against.
    pub directory: PathBuf,

    /// Exact set and order of checks for `all`/`fix`. When non-empty,
    /// `exclude` is ignored entirely.
    pub include: Vec<String>,

    /// Checks removed from `all`/`fix` when `include` is empty.
    pub exclude: Vec<String>,

    /// Halt a composite run at the first effective failure.
    pub stop_after_first_failure: bool,

    /// Count missing tools as success.
    pub ignore_uninstalled: bool,

    /// Per-check replacement argument lists.
    pub default_flags: BTreeMap<String, Vec<String>>,

    /// The full parsed config tree, kept for plugin section resolution.
    pub tree: toml::Table,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            include: Vec::new(),
            exclude: Vec::new(),
            stop_after_first_failure: false,
            ignore_uninstalled: false,
            default_flags: BTreeMap::new(),
            tree: toml::Table::new(),
        }
    }
}

/// Per-invocation overrides. `None` means "not supplied" and never
/// replaces a resolved value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub directory: Option<PathBuf>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub stop_after_first_failure: Option<bool>,
    pub ignore_uninstalled: Option<bool>,
}

/// Read and parse a config file into a value tree.
pub fn load_tree(path: &Path) -> Result<toml::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Resolve defaults + file tree + overrides into one `Config`.
///
/// Unknown top-level keys are ignored for forward compatibility (plugin
/// sections live among them and are pulled out separately). A known key
/// with a mismatched type fails with `ConfigType` naming the key.
pub fn resolve(tree: Option<toml::Value>, overrides: Overrides) -> Result<Config> {
    let mut config = Config::default();

    let table = match tree {
        Some(toml::Value::Table(table)) => table,
        Some(other) => {
            return Err(Error::Config {
                message: format!(
                    "config root must be a table, got {}",
                    value_type_name(&other)
                ),
                path: None,
            });
        }
        None => toml::Table::new(),
    };

    for (key, value) in &table {
        // File keys may be written hyphenated (stop-after-first-failure).
        match key.replace('-', "_").as_str() {
            "directory" => config.directory = PathBuf::from(expect_str("directory", value)?),
            "include" => config.include = expect_str_list("include", value)?,
            "exclude" => config.exclude = expect_str_list("exclude", value)?,
            "stop_after_first_failure" => {
                config.stop_after_first_failure = expect_bool("stop_after_first_failure", value)?;
            }
            "ignore_uninstalled" => {
                config.ignore_uninstalled = expect_bool("ignore_uninstalled", value)?;
            }
            "default_flags" => config.default_flags = expect_flag_table(value)?,
            other => tracing::debug!("ignoring unrecognized config key '{other}'"),
        }
    }

    if let Some(directory) = overrides.directory {
        config.directory = directory;
    }
    if let Some(include) = overrides.include {
        config.include = include;
    }
    if let Some(exclude) = overrides.exclude {
        config.exclude = exclude;
    }
    if let Some(stop) = overrides.stop_after_first_failure {
        config.stop_after_first_failure = stop;
    }
    if let Some(ignore) = overrides.ignore_uninstalled {
        config.ignore_uninstalled = ignore;
    }

    if !config.directory.is_dir() {
        return Err(Error::Config {
            message: format!("directory not found: {}", config.directory.display()),
            path: None,
        });
    }

    config.tree = table;
    Ok(config)
}

/// Name of a toml value's type, for error messages.
pub(crate) fn value_type_name(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Datetime(_) => "datetime",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
    }
}

fn type_error(key: &str, expected: &'static str, value: &toml::Value) -> Error {
    Error::ConfigType {
        key: key.to_string(),
        expected,
        found: value_type_name(value).to_string(),
    }
}

fn expect_str(key: &str, value: &toml::Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| type_error(key, "string", value))
}

fn expect_bool(key: &str, value: &toml::Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| type_error(key, "boolean", value))
}

fn expect_str_list(key: &str, value: &toml::Value) -> Result<Vec<String>> {
    let array = value
        .as_array()
        .ok_or_else(|| type_error(key, "array of strings", value))?;

    array
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| type_error(key, "array of strings", item))
        })
        .collect()
}

fn expect_flag_table(value: &toml::Value) -> Result<BTreeMap<String, Vec<String>>> {
    let table = value
        .as_table()
        .ok_or_else(|| type_error("default_flags", "table", value))?;

    let mut flags = BTreeMap::new();
    for (name, list) in table {
        let key = format!("default_flags.{name}");
        flags.insert(name.clone(), expect_str_list(&key, list)?);
    }
    Ok(flags)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
