//! Configuration file parsing for `prysm.toml`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SchemaError, SchemaResult};
use crate::sink::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "prysm.toml";

/// Main configuration structure for `prysm.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrysmConfig {
    /// Where rendered documents are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PrysmConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::io(path.display().to_string(), e))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> SchemaResult<Self> {
        let expanded = expand_env_vars(content);

        let config: Self =
            toml::from_str(&expanded).map_err(|e| SchemaError::TomlError { source: e })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> SchemaResult<()> {
        if self.output.directory.trim().is_empty() {
            return Err(SchemaError::ConfigError {
                message: "output.directory must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory documents are written to.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
        }
    }
}

fn default_directory() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level filter (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// Multi-line human-readable output.
    Pretty,
    /// Structured JSON lines.
    Json,
}

/// Expand environment variables in the format `${VAR_NAME}`.
///
/// Unset variables are left untouched.
fn expand_env_vars(content: &str) -> String {
    let re = match regex_lite::Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return content.to_string(),
    };

    re.replace_all(content, |caps: &regex_lite::Captures<'_>| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrysmConfig::default();
        assert_eq!(config.output.directory, "./prisma");
        assert_eq!(config.output.extension, "prisma");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = PrysmConfig::from_str("").unwrap();
        assert_eq!(config, PrysmConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [output]
            directory = "schemas"
            extension = "schema"

            [logging]
            level = "debug"
            format = "json"
        "#;

        let config = PrysmConfig::from_str(toml).unwrap();
        assert_eq!(config.output.directory, "schemas");
        assert_eq!(config.output.extension, "schema");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = PrysmConfig::from_str("[output]\npath = \"x\"\n").unwrap_err();
        assert!(matches!(err, SchemaError::TomlError { .. }));
    }

    #[test]
    fn test_empty_directory_rejected() {
        let err = PrysmConfig::from_str("[output]\ndirectory = \"  \"\n").unwrap_err();
        assert!(matches!(err, SchemaError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_expansion() {
        // SAFETY: This test runs single-threaded and we clean up after
        unsafe {
            std::env::set_var("PRYSM_TEST_OUTPUT_DIR", "/srv/schemas");
        }
        let expanded = expand_env_vars("directory = \"${PRYSM_TEST_OUTPUT_DIR}\"");
        assert_eq!(expanded, "directory = \"/srv/schemas\"");
        unsafe {
            std::env::remove_var("PRYSM_TEST_OUTPUT_DIR");
        }
    }

    #[test]
    fn test_env_var_unset_is_kept() {
        let expanded = expand_env_vars("directory = \"${PRYSM_TEST_SURELY_UNSET}\"");
        assert_eq!(expanded, "directory = \"${PRYSM_TEST_SURELY_UNSET}\"");
    }
}
