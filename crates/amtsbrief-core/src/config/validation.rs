//! Configuration validation

use super::app_config::AppConfig;
use crate::error::{BriefError, BriefResult};
use std::collections::HashSet;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &AppConfig) -> BriefResult<()> {
        Self::validate_health(config)?;
        Self::validate_network(config)?;
        Self::validate_providers(config)?;
        Ok(())
    }

    fn validate_health(config: &AppConfig) -> BriefResult<()> {
        if config.health.error_threshold == 0 {
            return Err(BriefError::config("health.error_threshold must be at least 1"));
        }
        if config.health.rate_limit_cooldown_secs == 0 {
            return Err(BriefError::config(
                "health.rate_limit_cooldown_secs must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_network(config: &AppConfig) -> BriefResult<()> {
        let network = &config.network;
        if network.connection_timeout_secs == 0 || network.request_timeout_secs == 0 {
            return Err(BriefError::config("network timeouts must be at least 1 second"));
        }
        if network.request_timeout_secs < network.connection_timeout_secs {
            return Err(BriefError::config(format!(
                "network.request_timeout_secs ({}) must not be shorter than connection_timeout_secs ({})",
                network.request_timeout_secs, network.connection_timeout_secs
            )));
        }
        if network.attempt_timeout_secs == Some(0) {
            return Err(BriefError::config(
                "network.attempt_timeout_secs must be at least 1",
            ));
        }
        if network.max_tokens == 0 {
            return Err(BriefError::config("network.max_tokens must be at least 1"));
        }
        Ok(())
    }

    fn validate_providers(config: &AppConfig) -> BriefResult<()> {
        let Some(providers) = &config.providers else {
            return Ok(());
        };

        let mut names = HashSet::new();
        for spec in providers {
            if spec.name.trim().is_empty() || spec.model.trim().is_empty() {
                return Err(BriefError::config_with_context(
                    "Provider name and model must not be empty",
                    format!("Validating provider table entry '{}'", spec.name),
                ));
            }
            if spec.credential_key.trim().is_empty() {
                return Err(BriefError::config(format!(
                    "Provider '{}' has no credential_key",
                    spec.name
                )));
            }
            if !names.insert(spec.name.as_str()) {
                return Err(BriefError::config(format!(
                    "Duplicate provider name '{}'",
                    spec.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider_types::default_provider_table;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let mut config = AppConfig::default();
        config.health.error_threshold = 0;
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_request_shorter_than_connection_rejected() {
        let mut config = AppConfig::default();
        config.network.request_timeout_secs = 10;
        config.network.connection_timeout_secs = 30;
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_duplicate_provider_names_rejected() {
        let mut table = default_provider_table();
        table.push(table[0].clone());
        let config = AppConfig {
            providers: Some(table),
            ..AppConfig::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
