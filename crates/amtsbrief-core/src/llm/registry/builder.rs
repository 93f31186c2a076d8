//! Builder for creating provider registries

use super::credentials::Credentials;
use super::manager::ProviderRegistry;
use crate::llm::health::HealthPolicy;
use crate::llm::provider_types::{ProviderSpec, default_provider_table};
use crate::llm::providers::BackendFactory;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating provider registries
pub struct RegistryBuilder {
    table: Vec<ProviderSpec>,
    factory: Arc<dyn BackendFactory>,
    policy: HealthPolicy,
    attempt_timeout: Option<Duration>,
}

impl RegistryBuilder {
    /// Start from the default provider table
    pub fn new(factory: Arc<dyn BackendFactory>) -> Self {
        Self {
            table: default_provider_table(),
            factory,
            policy: HealthPolicy::default(),
            attempt_timeout: None,
        }
    }

    /// Replace the declared table; order is failover priority
    pub fn table(mut self, table: Vec<ProviderSpec>) -> Self {
        self.table = table;
        self
    }

    pub fn policy(mut self, policy: HealthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Build the registry and its first provider list
    pub fn build(self, credentials: &Credentials) -> ProviderRegistry {
        let registry = ProviderRegistry::empty(
            self.table,
            self.factory,
            self.policy,
            self.attempt_timeout,
        );
        registry.reload(credentials);
        registry
    }
}
