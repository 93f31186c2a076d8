//! OpenAI provider implementation

use super::error_utils::{handle_http_error, handle_parse_error, handle_send_error, missing_text};
use super::request_settings::RequestSettings;
use crate::error::ProviderError;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

const VENDOR: &str = "openai";

/// OpenAI provider handler
pub struct OpenAiProvider {
    settings: RequestSettings,
    http_client: Client,
}

impl OpenAiProvider {
    pub fn new(settings: RequestSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    /// OpenAI chat completion with a single user message
    #[instrument(skip(self, prompt), fields(model = %self.settings.model), level = "debug")]
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.settings.base_url);
        let request_body = chat_completion_body(&self.settings, prompt);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&request_body)
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

        parse_chat_completion(&response_json, VENDOR)
    }
}

/// Request body shared by OpenAI-compatible endpoints
pub(crate) fn chat_completion_body(settings: &RequestSettings, prompt: &str) -> Value {
    json!({
        "model": settings.model,
        "messages": [{ "role": "user", "content": prompt }],
        "max_tokens": settings.max_tokens,
    })
}

/// Extract `choices[0].message.content` from an OpenAI-compatible response
pub(crate) fn parse_chat_completion(response: &Value, vendor: &str) -> Result<String, ProviderError> {
    match response["choices"][0]["message"]["content"].as_str() {
        Some(content) if !content.is_empty() => Ok(content.to_string()),
        _ => Err(missing_text(vendor, response)),
    }
}
