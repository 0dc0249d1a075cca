//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(prysm::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(prysm::config))]
    Config(String),

    /// Build plan could not be read or parsed
    #[error("Plan error: {0}")]
    #[diagnostic(code(prysm::plan))]
    Plan(String),

    /// A plan step failed while being applied
    #[error("Step {index} ({op}) failed: {source}")]
    #[diagnostic(code(prysm::step))]
    Step {
        index: usize,
        op: &'static str,
        #[source]
        source: prysm_schema::SchemaError,
    },

    /// Schema error
    #[error("Schema error: {0}")]
    #[diagnostic(code(prysm::schema))]
    Schema(#[from] prysm_schema::SchemaError),

    /// Validation error
    #[error("Validation error: {0}")]
    #[diagnostic(code(prysm::validation))]
    Validation(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Plan(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Plan(format!("Failed to parse JSON: {}", err))
    }
}
