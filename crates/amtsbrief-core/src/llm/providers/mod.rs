//! Vendor-specific backend implementations

pub mod anthropic;
pub mod error_utils;
pub mod factory;
pub mod google;
pub mod openai;
pub mod openrouter;
pub mod provider_trait;
pub mod request_settings;

pub use anthropic::AnthropicProvider;
pub use factory::{BackendFactory, BackendSettings, HttpBackendFactory};
pub use google::GoogleProvider;
pub use openai::OpenAiProvider;
pub use openrouter::OpenRouterProvider;
pub use provider_trait::{LlmBackend, ProviderInstance};
pub use request_settings::RequestSettings;

#[cfg(test)]
pub use factory::MockBackendFactory;
