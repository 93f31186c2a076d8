//! File-based configuration loading

use super::app_config::AppConfig;
use crate::error::{BriefError, BriefResult};
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Returns the default configuration if the file doesn't exist.
pub fn load_from_file(path: &Path) -> BriefResult<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        BriefError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    toml::from_str(&content).map_err(|e| {
        BriefError::config_with_context(
            format!("Failed to parse TOML config: {}", e),
            format!("Deserializing TOML configuration from '{}'", path.display()),
        )
    })
}
