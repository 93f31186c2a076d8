//! Vendor error sanitization helpers.

use crate::error::{ProviderError, ProviderErrorKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 1_024;
const REDACTED: &str = "[REDACTED]";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(api[_-]?key|key|access[_-]?token|token|secret|password|authorization|x-api-key|x-goog-api-key)\b\s*[:=]\s*["']?[^"',\s}&]+"#,
    )
    .expect("valid key/value secret regex")
});

/// Sanitize vendor error text by redacting secrets and truncating large payloads.
pub fn sanitize_provider_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error response body>".to_string();
    }

    if let Ok(mut json) = serde_json::from_str::<Value>(trimmed) {
        redact_json_value(&mut json);
        let serialized =
            serde_json::to_string(&json).unwrap_or_else(|_| "<unserializable error>".to_string());
        return truncate_with_suffix(serialized);
    }

    truncate_with_suffix(redact_inline_secrets(trimmed))
}

fn redact_json_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if is_sensitive_key(key) {
                    *val = Value::String(REDACTED.to_string());
                } else {
                    redact_json_value(val);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_json_value),
        Value::String(s) => *s = redact_inline_secrets(s),
        _ => {}
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.to_ascii_lowercase().replace(['-', ' '], "_");
    [
        "api_key",
        "access_token",
        "refresh_token",
        "token",
        "secret",
        "password",
        "authorization",
        "cookie",
        "private_key",
    ]
    .iter()
    .any(|needle| normalized.contains(needle))
}

fn redact_inline_secrets(input: &str) -> String {
    let redacted_bearer = BEARER_TOKEN_RE.replace_all(input, "Bearer [REDACTED]");
    KEY_VALUE_SECRET_RE
        .replace_all(&redacted_bearer, "$1=[REDACTED]")
        .into_owned()
}

fn truncate_with_suffix(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }

    let truncated: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!(
        "{}... [truncated {} chars]",
        truncated,
        char_count - MAX_ERROR_TEXT_CHARS
    )
}

/// Build a ProviderError from a non-success HTTP response.
pub async fn handle_http_error(response: reqwest::Response, vendor: &str) -> ProviderError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    let sanitized = sanitize_provider_error_text(&error_text);
    ProviderError::from_status(
        vendor,
        status.as_u16(),
        format!("status {}: {}", status, sanitized),
    )
}

/// Build a ProviderError from a failed send.
pub fn handle_send_error(err: reqwest::Error, vendor: &str) -> ProviderError {
    let (is_timeout, is_connect) = (err.is_timeout(), err.is_connect());
    let message = redact_inline_secrets(&err.without_url().to_string());
    if is_timeout {
        ProviderError::new(vendor, ProviderErrorKind::Timeout, message)
    } else if is_connect {
        ProviderError::new(vendor, ProviderErrorKind::Transport, message)
    } else {
        ProviderError::from_message(vendor, message)
    }
}

/// Build a ProviderError from a JSON parse failure.
pub fn handle_parse_error(err: reqwest::Error, vendor: &str) -> ProviderError {
    ProviderError::new(
        vendor,
        ProviderErrorKind::MalformedResponse,
        format!("Failed to parse {} response: {}", vendor, err.without_url()),
    )
}

/// Error for a well-formed response that carried no text.
pub fn missing_text(vendor: &str, body: &Value) -> ProviderError {
    let detail = sanitize_provider_error_text(&body.to_string());
    ProviderError::new(
        vendor,
        ProviderErrorKind::MalformedResponse,
        format!("response contained no text: {}", detail),
    )
}
