//! CLI configuration handling.

use std::path::{Path, PathBuf};

use prysm_schema::PrysmConfig;
use prysm_schema::config::CONFIG_FILE_NAME;

use crate::error::{CliError, CliResult};

/// Resolve the configuration for this invocation.
///
/// An explicit path must exist. Without one, `prysm.toml` in the current
/// directory is used when present, and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> CliResult<PrysmConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Ok(PrysmConfig::from_file(path)?)
        }
        None => {
            let default_path = default_config_path()?;
            if default_path.exists() {
                Ok(PrysmConfig::from_file(&default_path)?)
            } else {
                Ok(PrysmConfig::default())
            }
        }
    }
}

/// `prysm.toml` in the current directory.
pub fn default_config_path() -> CliResult<PathBuf> {
    Ok(std::env::current_dir()?.join(CONFIG_FILE_NAME))
}
