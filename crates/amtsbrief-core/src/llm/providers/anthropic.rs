//! Anthropic provider implementation

use super::error_utils::{handle_http_error, handle_parse_error, handle_send_error, missing_text};
use super::request_settings::RequestSettings;
use crate::error::ProviderError;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

const VENDOR: &str = "anthropic";
const API_VERSION: &str = "2023-06-01";

/// Anthropic provider handler
pub struct AnthropicProvider {
    settings: RequestSettings,
    http_client: Client,
}

impl AnthropicProvider {
    pub fn new(settings: RequestSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    /// Anthropic messages call
    #[instrument(skip(self, prompt), fields(model = %self.settings.model), level = "debug")]
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/messages", self.settings.base_url);
        let request_body = json!({
            "model": self.settings.model,
            "max_tokens": self.settings.max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", API_VERSION)
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

        parse_anthropic(&response_json)
    }
}

/// Join the text blocks of a messages response
pub(crate) fn parse_anthropic(response: &Value) -> Result<String, ProviderError> {
    let text: String = response["content"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|block| block["type"] == "text")
        .filter_map(|block| block["text"].as_str())
        .collect();

    if text.is_empty() {
        return Err(missing_text(VENDOR, response));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_blocks() {
        let response = json!({
            "content": [
                { "type": "text", "text": "Frist: " },
                { "type": "text", "text": "14 Tage" }
            ]
        });
        assert_eq!(parse_anthropic(&response).unwrap(), "Frist: 14 Tage");
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_anthropic(&json!({ "content": [] })).is_err());
    }
}
