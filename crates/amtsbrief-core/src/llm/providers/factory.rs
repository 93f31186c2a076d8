//! Construction of vendor backends

use super::provider_trait::{LlmBackend, ProviderInstance};
use super::request_settings::RequestSettings;
use super::{AnthropicProvider, GoogleProvider, OpenAiProvider, OpenRouterProvider};
use crate::config::timeouts;
use crate::error::{BriefError, BriefResult};
use crate::llm::provider_types::{ProviderIdentity, Vendor};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Transport settings shared by every HTTP backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendSettings {
    pub connection_timeout: Duration,
    pub request_timeout: Duration,
    pub max_tokens: u32,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            connection_timeout: timeouts::llm::connection_timeout(),
            request_timeout: timeouts::llm::request_timeout(),
            max_tokens: timeouts::llm::MAX_TOKENS,
        }
    }
}

/// Builds the backend a provider talks to.
///
/// The registry owns one factory; tests swap in scripted ones.
#[cfg_attr(test, mockall::automock)]
pub trait BackendFactory: Send + Sync {
    fn build(&self, identity: &ProviderIdentity, secret: &str) -> Arc<dyn LlmBackend>;
}

/// Production factory backed by a single pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpBackendFactory {
    settings: BackendSettings,
    http_client: Client,
}

impl HttpBackendFactory {
    pub fn new(settings: BackendSettings) -> BriefResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(settings.connection_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| {
                BriefError::config_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    "Building vendor backends",
                )
            })?;

        debug!(
            "Created HTTP client with timeouts: connection={}s, request={}s",
            settings.connection_timeout.as_secs(),
            settings.request_timeout.as_secs()
        );

        Ok(Self {
            settings,
            http_client,
        })
    }

    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }

    /// Concrete backend for one vendor/model pair
    pub fn instance(&self, identity: &ProviderIdentity, secret: &str) -> ProviderInstance {
        let settings = RequestSettings::new(identity, secret, self.settings.max_tokens);
        let client = self.http_client.clone();

        match identity.vendor {
            Vendor::Google => ProviderInstance::Google(GoogleProvider::new(settings, client)),
            Vendor::OpenAi => ProviderInstance::OpenAi(OpenAiProvider::new(settings, client)),
            Vendor::Anthropic => {
                ProviderInstance::Anthropic(AnthropicProvider::new(settings, client))
            }
            Vendor::OpenRouter => {
                ProviderInstance::OpenRouter(OpenRouterProvider::new(settings, client))
            }
        }
    }
}

impl BackendFactory for HttpBackendFactory {
    fn build(&self, identity: &ProviderIdentity, secret: &str) -> Arc<dyn LlmBackend> {
        Arc::new(self.instance(identity, secret))
    }
}
