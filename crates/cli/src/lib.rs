pub mod aggregate;
pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod invoke;
pub mod output;
pub mod plugins;
pub mod registry;
pub mod section;

pub use aggregate::{ReportEntry, ReportStatus, RunReport};
pub use check::{Check, CheckResult, CheckStatus, RunMode};
pub use cli::{Cli, Command, CompositeArgs, OutputFormat, SingleArgs};
pub use config::{Config, Overrides};
pub use context::{ExecutionContext, Verbosity};
pub use error::{Error, ExitCode, Result};
pub use registry::{CheckDefinition, CheckRegistry, Namespace, RegisterOptions, Selection};
pub use section::{ConfigSection, FieldKind, SectionRegistry, SectionSchema, StateView};

#[cfg(test)]
pub mod test_utils;
