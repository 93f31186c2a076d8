//! OpenRouter provider implementation

use super::error_utils::{
    handle_http_error, handle_parse_error, handle_send_error, sanitize_provider_error_text,
};
use super::openai::{chat_completion_body, parse_chat_completion};
use super::request_settings::RequestSettings;
use crate::error::ProviderError;
use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

const VENDOR: &str = "openrouter";

/// OpenRouter provider handler
pub struct OpenRouterProvider {
    settings: RequestSettings,
    http_client: Client,
}

impl OpenRouterProvider {
    pub fn new(settings: RequestSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    /// OpenRouter chat completion
    #[instrument(skip(self, prompt), fields(model = %self.settings.model), level = "debug")]
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/api/v1/chat/completions", self.settings.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .header("Content-Type", "application/json")
            .json(&chat_completion_body(&self.settings, prompt))
            .send()
            .await
            .map_err(|e| handle_send_error(e, VENDOR))?;

        if !response.status().is_success() {
            return Err(handle_http_error(response, VENDOR).await);
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| handle_parse_error(e, VENDOR))?;

        if let Some(error) = embedded_error(&response_json) {
            return Err(error);
        }

        parse_chat_completion(&response_json, VENDOR)
    }
}

/// OpenRouter reports upstream failures inside a 200 body. A numeric
/// `error.code` is treated as the upstream HTTP status.
pub(crate) fn embedded_error(response: &Value) -> Option<ProviderError> {
    let error = response.get("error").filter(|error| !error.is_null())?;
    let message = sanitize_provider_error_text(error["message"].as_str().unwrap_or_default());

    let status = error["code"]
        .as_u64()
        .and_then(|code| u16::try_from(code).ok());
    Some(match status {
        Some(status) => ProviderError::from_status(VENDOR, status, message),
        None => ProviderError::from_message(VENDOR, message),
    })
}
