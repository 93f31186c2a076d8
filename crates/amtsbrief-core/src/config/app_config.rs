//! Application configuration model

use super::logging_config::LoggingConfig;
use super::timeouts;
use crate::error::BriefResult;
use crate::llm::health::HealthPolicy;
use crate::llm::orchestrator::{ExhaustionPolicy, OrchestratorConfig};
use crate::llm::provider_types::{ProviderSpec, default_provider_table};
use crate::llm::providers::{BackendSettings, HttpBackendFactory};
use crate::llm::registry::RegistryBuilder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Health tracking settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub error_threshold: u32,
    pub rate_limit_cooldown_secs: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            error_threshold: timeouts::health::ERROR_THRESHOLD,
            rate_limit_cooldown_secs: timeouts::health::RATE_LIMIT_COOLDOWN_SECS,
        }
    }
}

/// Vendor transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub connection_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Deadline per provider attempt; defaults to the request timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_timeout_secs: Option<u64>,
    pub max_tokens: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: timeouts::llm::CONNECTION_SECS,
            request_timeout_secs: timeouts::llm::REQUEST_SECS,
            attempt_timeout_secs: None,
            max_tokens: timeouts::llm::MAX_TOKENS,
        }
    }
}

impl NetworkConfig {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(
            self.attempt_timeout_secs
                .unwrap_or(self.request_timeout_secs),
        )
    }
}

/// Failover settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FailoverConfig {
    pub exhaustion: ExhaustionPolicy,
}

/// Complete application configuration
///
/// Every section is optional in the file; missing values fall back to the
/// defaults in [`timeouts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub health: HealthConfig,
    pub network: NetworkConfig,
    pub failover: FailoverConfig,
    /// Replaces the default provider table when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<ProviderSpec>>,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn health_policy(&self) -> HealthPolicy {
        HealthPolicy::default()
            .with_error_threshold(self.health.error_threshold)
            .with_rate_limit_cooldown(Duration::from_secs(self.health.rate_limit_cooldown_secs))
    }

    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            connection_timeout: Duration::from_secs(self.network.connection_timeout_secs),
            request_timeout: Duration::from_secs(self.network.request_timeout_secs),
            max_tokens: self.network.max_tokens,
        }
    }

    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig::new(self.failover.exhaustion)
    }

    /// Configured table, or the default one
    pub fn provider_table(&self) -> Vec<ProviderSpec> {
        self.providers
            .clone()
            .unwrap_or_else(default_provider_table)
    }

    /// Registry builder wired to the HTTP backends with these settings
    pub fn registry_builder(&self) -> BriefResult<RegistryBuilder> {
        let factory = HttpBackendFactory::new(self.backend_settings())?;
        Ok(RegistryBuilder::new(Arc::new(factory))
            .table(self.provider_table())
            .policy(self.health_policy())
            .attempt_timeout(Some(self.network.attempt_timeout())))
    }
}
