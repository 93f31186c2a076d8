//! Read-only status report

use crate::llm::health::ProviderStatus;
use crate::llm::provider::{Provider, ProviderSnapshot};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Status of every system provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub providers: BTreeMap<String, ProviderSnapshot>,
    /// Providers whose status is ACTIVE
    pub active_providers: usize,
    pub total_providers: usize,
}

impl StatusReport {
    pub fn collect(providers: &[Arc<Provider>]) -> Self {
        let providers: BTreeMap<String, ProviderSnapshot> = providers
            .iter()
            .map(|provider| (provider.name().to_string(), provider.snapshot()))
            .collect();

        let active_providers = providers
            .values()
            .filter(|snapshot| snapshot.status == ProviderStatus::Active)
            .count();

        Self {
            total_providers: providers.len(),
            active_providers,
            providers,
        }
    }

    /// Providers that would be attempted right now
    pub fn eligible_providers(&self) -> usize {
        self.providers.values().filter(|s| s.eligible_now).count()
    }
}
