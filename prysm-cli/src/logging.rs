//! Tracing subscriber setup.

use prysm_schema::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV_VAR: &str = "PRYSM_LOG";

/// Install the global subscriber. Logs go to stderr so rendered schemas on
/// stdout stay pipeable.
pub fn init(config: &LoggingConfig) {
    let directive = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| {
        format!(
            "prysm={level},prysm_cli={level},prysm_schema={level}",
            level = config.level
        )
    });

    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
