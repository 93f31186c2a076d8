//! Configuration management

mod app_config;
mod env_loader;
mod file_loader;
mod validation;

pub mod api_key;
pub mod logging_config;
pub mod timeouts;

pub use api_key::{format_api_key_status, mask_api_key};
pub use app_config::{AppConfig, FailoverConfig, HealthConfig, NetworkConfig};
pub use env_loader::{
    ENV_ATTEMPT_TIMEOUT_SECS, ENV_COOLDOWN_SECS, ENV_EXHAUSTION, ENV_LOG_LEVEL,
    apply_env_overrides, apply_overrides,
};
pub use file_loader::load_from_file;
pub use logging_config::{LogFormat, LoggingConfig};
pub use validation::ConfigValidator;

use crate::error::{BriefError, BriefResult};
use std::path::Path;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "amtsbrief.toml";

/// Load the file (or defaults), apply environment overrides, then validate.
///
/// An explicitly named file must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> BriefResult<AppConfig> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(BriefError::config_with_context(
                "Config file not found",
                path.display().to_string(),
            ));
        }
    }

    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let mut config = load_from_file(path)?;
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    pub fn validate(&self) -> BriefResult<()> {
        ConfigValidator::validate(self)
    }
}
