//! Tracing subscriber setup

use amtsbrief_core::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level;
/// output goes to stderr so stdout stays machine-readable.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let directive = if verbose {
        LoggingConfig {
            level: "debug".to_string(),
            ..config.clone()
        }
        .filter_directive()
    } else {
        config.filter_directive()
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
