//! Per-provider request settings shared by the HTTP backends

use crate::config::api_key::mask_api_key;
use crate::llm::provider_types::ProviderIdentity;
use std::fmt;

/// Everything a backend needs to address one vendor/model pair
#[derive(Clone)]
pub struct RequestSettings {
    pub model: String,
    /// Base URL without trailing slash
    pub base_url: String,
    pub api_key: String,
    pub max_tokens: u32,
}

impl RequestSettings {
    pub fn new(identity: &ProviderIdentity, api_key: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: identity.model.clone(),
            base_url: identity.base_url().to_string(),
            api_key: api_key.into(),
            max_tokens,
        }
    }

    #[cfg(test)]
    pub(crate) fn for_test(model: &str, base_url: &str) -> Self {
        Self {
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: "test-key".to_string(),
            max_tokens: crate::config::timeouts::llm::MAX_TOKENS,
        }
    }
}

impl fmt::Debug for RequestSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSettings")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &mask_api_key(&self.api_key))
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider_types::Vendor;

    #[test]
    fn test_debug_masks_key() {
        let identity = ProviderIdentity::new("OpenAI", Vendor::OpenAi, "gpt-4o-mini");
        let settings = RequestSettings::new(&identity, "sk-proj-abcdefghijklmnop", 4000);
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("abcdefghijklmnop"));
        assert_eq!(settings.base_url, "https://api.openai.com");
    }
}
