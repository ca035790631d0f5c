use std::path::PathBuf;

/// Stoplight error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A config value whose type disagrees with the declared option type.
    #[error("config key '{key}' has type {found}, expected {expected}")]
    ConfigType {
        key: String,
        expected: &'static str,
        found: String,
    },

    /// Two different schemas claimed the same section key.
    #[error("config key '{key}' is already claimed by a different section schema")]
    ConfigKeyConflict { key: String },

    /// A check name was registered twice.
    #[error("check '{0}' is already registered")]
    DuplicateCheck(String),

    /// A check name that no registration matches.
    #[error("unknown check '{0}' (see `stoplight list`)")]
    UnknownCheck(String),

    /// A single plugin failed to load. Recovered by the loader.
    #[error("plugin '{name}' failed to load: {message}")]
    Plugin { name: String, message: String },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using stoplight Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All invoked checks passed
    Success = 0,
    /// One or more checks failed
    CheckFailed = 1,
    /// Configuration or registry error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
    /// The wrapped tool is not installed (single-check invocation)
    ToolMissing = 127,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. }
            | Error::ConfigType { .. }
            | Error::ConfigKeyConflict { .. }
            | Error::DuplicateCheck(_)
            | Error::UnknownCheck(_)
            | Error::Plugin { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
