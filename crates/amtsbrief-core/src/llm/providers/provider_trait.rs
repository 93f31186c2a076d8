//! Backend trait and unified enum

use crate::error::ProviderError;
use crate::llm::attachment::Attachment;
use async_trait::async_trait;

/// One remote generation call against a vendor.
///
/// Implementations never retry; failover belongs to the orchestrator.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, ProviderError>;
}

/// Unified enum that wraps all HTTP vendor implementations
pub enum ProviderInstance {
    Google(super::GoogleProvider),
    OpenAi(super::OpenAiProvider),
    Anthropic(super::AnthropicProvider),
    OpenRouter(super::OpenRouterProvider),
}

#[async_trait]
impl LlmBackend for ProviderInstance {
    async fn generate(
        &self,
        prompt: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, ProviderError> {
        match self {
            Self::Google(p) => p.generate(prompt, attachment).await,
            Self::OpenAi(p) => p.generate(prompt).await,
            Self::Anthropic(p) => p.generate(prompt).await,
            Self::OpenRouter(p) => p.generate(prompt).await,
        }
    }
}
