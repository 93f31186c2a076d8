//! Wiring of configuration, registry and orchestrator for one invocation

use amtsbrief_core::analysis::LetterAnalyzer;
use amtsbrief_core::config::{AppConfig, load_config};
use amtsbrief_core::llm::{Credentials, FailoverOrchestrator, ProviderRegistry};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub struct AppContext {
    pub config: AppConfig,
    pub credentials: Credentials,
    pub registry: Arc<ProviderRegistry>,
    pub orchestrator: Arc<FailoverOrchestrator>,
}

impl AppContext {
    pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
        load_config(path).context("Failed to load configuration")
    }

    pub fn build(config: AppConfig) -> anyhow::Result<Self> {
        let table = config.provider_table();
        let credentials =
            Credentials::from_env(table.iter().map(|spec| spec.credential_key.as_str()));
        debug!("Resolved {} provider credential(s)", credentials.len());

        let registry = config
            .registry_builder()
            .context("Failed to set up provider backends")?
            .build(&credentials);
        let registry = Arc::new(registry);

        let orchestrator = Arc::new(FailoverOrchestrator::new(
            registry.clone(),
            config.orchestrator_config(),
        ));

        Ok(Self {
            config,
            credentials,
            registry,
            orchestrator,
        })
    }

    pub fn analyzer(&self) -> LetterAnalyzer {
        LetterAnalyzer::new(self.orchestrator.clone())
    }
}
