//! Failover orchestrator

use super::failover::failover;
use super::generation::Generation;
use super::status::StatusReport;
use super::types::{ExhaustionPolicy, OrchestratorConfig};
use crate::error::{BriefError, BriefResult};
use crate::llm::attachment::Attachment;
use crate::llm::provider::Provider;
use crate::llm::registry::ProviderRegistry;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Generates text through the registry's providers in priority order
pub struct FailoverOrchestrator {
    registry: Arc<ProviderRegistry>,
    config: OrchestratorConfig,
}

impl FailoverOrchestrator {
    pub fn new(registry: Arc<ProviderRegistry>, config: OrchestratorConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Generate through the system providers.
    ///
    /// The attachment is read once up front; a missing or unreadable file is
    /// an error even under the placeholder policy.
    pub async fn generate(
        &self,
        prompt: &str,
        attachment_path: Option<&Path>,
    ) -> BriefResult<Generation> {
        ensure_prompt(prompt)?;
        let attachment = match attachment_path {
            Some(path) => Some(Attachment::from_path(path).await?),
            None => None,
        };

        let providers = self.registry.providers();
        self.generate_with(&providers, prompt, attachment.as_ref())
            .await
    }

    /// Generate through an explicit provider slice with the configured
    /// exhaustion policy
    pub async fn generate_with(
        &self,
        providers: &[Arc<Provider>],
        prompt: &str,
        attachment: Option<&Attachment>,
    ) -> BriefResult<Generation> {
        ensure_prompt(prompt)?;
        match failover(providers, prompt, attachment).await {
            Ok((text, name)) => Ok(Generation::from_provider(text, name)),
            Err(err) if err.is_terminal_failover() => match self.config.exhaustion {
                ExhaustionPolicy::Fail => {
                    error!("Failover exhausted: {}", err);
                    Err(err)
                }
                ExhaustionPolicy::Placeholder => {
                    info!("Failover exhausted, returning placeholder: {}", err);
                    Ok(Generation::placeholder(&err))
                }
            },
            Err(err) => Err(err),
        }
    }

    /// Generate with a caller-scoped provider. Failure is terminal and is
    /// never turned into a placeholder.
    pub async fn generate_for_user(
        &self,
        provider: Provider,
        prompt: &str,
        attachment_path: Option<&Path>,
    ) -> BriefResult<Generation> {
        ensure_prompt(prompt)?;
        let attachment = match attachment_path {
            Some(path) => Some(Attachment::from_path(path).await?),
            None => None,
        };

        let providers = [Arc::new(provider)];
        let (text, name) = failover(&providers, prompt, attachment.as_ref()).await?;
        Ok(Generation::from_user_key(text, name))
    }

    /// Read-only status of every system provider; never calls a vendor
    pub fn status_snapshot(&self) -> StatusReport {
        StatusReport::collect(&self.registry.providers())
    }

    /// Operator self-heal for one provider. Returns false when no provider
    /// with that name exists or it holds no credential.
    pub fn reset_provider(&self, name: &str) -> bool {
        match self.registry.find(name) {
            Some(provider) => {
                let reset = provider.reset();
                if reset {
                    info!("Provider '{}' reset to active", name);
                }
                reset
            }
            None => false,
        }
    }
}

fn ensure_prompt(prompt: &str) -> BriefResult<()> {
    if prompt.trim().is_empty() {
        return Err(BriefError::invalid_input_field(
            "Prompt must not be empty",
            "prompt",
        ));
    }
    Ok(())
}
