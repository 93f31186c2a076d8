//! Environment variable overrides

use super::app_config::AppConfig;
use crate::error::{BriefError, BriefResult};
use std::str::FromStr;

pub const ENV_COOLDOWN_SECS: &str = "AMTSBRIEF_COOLDOWN_SECS";
pub const ENV_ATTEMPT_TIMEOUT_SECS: &str = "AMTSBRIEF_ATTEMPT_TIMEOUT_SECS";
pub const ENV_EXHAUSTION: &str = "AMTSBRIEF_EXHAUSTION";
pub const ENV_LOG_LEVEL: &str = "AMTSBRIEF_LOG_LEVEL";

/// Apply overrides from the process environment
pub fn apply_env_overrides(config: &mut AppConfig) -> BriefResult<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides resolved through `lookup`
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> BriefResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(value) = lookup(ENV_COOLDOWN_SECS) {
        config.health.rate_limit_cooldown_secs = parse_value(ENV_COOLDOWN_SECS, &value)?;
    }

    if let Some(value) = lookup(ENV_ATTEMPT_TIMEOUT_SECS) {
        config.network.attempt_timeout_secs = Some(parse_value(ENV_ATTEMPT_TIMEOUT_SECS, &value)?);
    }

    if let Some(value) = lookup(ENV_EXHAUSTION) {
        config.failover.exhaustion = value.parse().map_err(|_| {
            BriefError::config_with_context(
                format!("Invalid {} value '{}'", ENV_EXHAUSTION, value),
                "Expected 'fail' or 'placeholder'",
            )
        })?;
    }

    if let Some(value) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = value.trim().to_lowercase();
    }

    Ok(())
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> BriefResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BriefError::config(format!("Invalid {} value '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::orchestrator::ExhaustionPolicy;
    use std::collections::HashMap;

    fn apply(vars: &[(&str, &str)]) -> BriefResult<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = AppConfig::default();
        apply_overrides(&mut config, |key| vars.get(key).cloned())?;
        Ok(config)
    }

    #[test]
    fn test_overrides_applied() {
        let config = apply(&[
            (ENV_COOLDOWN_SECS, "5"),
            (ENV_ATTEMPT_TIMEOUT_SECS, "12"),
            (ENV_EXHAUSTION, "fail"),
            (ENV_LOG_LEVEL, "DEBUG"),
        ])
        .unwrap();

        assert_eq!(config.health.rate_limit_cooldown_secs, 5);
        assert_eq!(config.network.attempt_timeout_secs, Some(12));
        assert_eq!(config.failover.exhaustion, ExhaustionPolicy::Fail);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = apply(&[(ENV_COOLDOWN_SECS, "  ")]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(apply(&[(ENV_COOLDOWN_SECS, "soon")]).is_err());
        assert!(apply(&[(ENV_EXHAUSTION, "retry")]).is_err());
    }
}
