//! Google (Gemini) provider implementation

use super::error_utils::{handle_http_error, handle_parse_error, handle_send_error, missing_text};
use super::request_settings::RequestSettings;
use crate::error::ProviderError;
use crate::llm::attachment::Attachment;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

const VENDOR: &str = "google";

/// Google (Gemini) provider handler
pub struct GoogleProvider {
    settings: RequestSettings,
    http_client: Client,
}

impl GoogleProvider {
    pub fn new(settings: RequestSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    pub(crate) fn request_body(&self, prompt: &str, attachment: Option<&Attachment>) -> Value {
        let mut parts = vec![json!({ "text": prompt })];
        if let Some(attachment) = attachment {
            parts.push(json!({
                "inline_data": {
                    "mime_type": attachment.mime_type(),
                    "data": attachment.to_base64(),
                }
            }));
        }

        json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": { "maxOutputTokens": self.settings.max_tokens },
        })
    }

    /// Gemini generateContent call
    #[instrument(skip(self, prompt, attachment), fields(model = %self.settings.model), level = "debug")]
    pub async fn generate(
        &self,
        prompt: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url, self.settings.model
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&self.request_body(prompt, attachment))
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

        parse_google(&response_json)
    }
}

/// Concatenate the text parts of the first candidate
pub(crate) fn parse_google(response: &Value) -> Result<String, ProviderError> {
    let parts = response["candidates"][0]["content"]["parts"].as_array();
    let text: String = parts
        .into_iter()
        .flatten()
        .filter_map(|part| part["text"].as_str())
        .collect();

    if text.is_empty() {
        return Err(missing_text(VENDOR, response));
    }
    Ok(text)
}
