//! Message-based error classification
//!
//! Last resort for vendor failures that arrive without a usable status code.

use super::provider_error::ProviderErrorKind;
use once_cell::sync::Lazy;
use regex::Regex;

const RATE_LIMIT_MARKERS: &[&str] = &[
    "rate limit",
    "rate_limit",
    "ratelimit",
    "too many requests",
    "quota",
    "resource exhausted",
    "resource_exhausted",
];

// Status codes only count as whole tokens; "4290 tokens" is not a 429
static RATE_LIMIT_STATUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b429\b").expect("valid rate limit status regex"));

static AUTH_STATUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b40[13]\b").expect("valid auth status regex"));

const AUTH_MARKERS: &[&str] = &[
    "unauthorized",
    "invalid api key",
    "api key not valid",
    "permission denied",
];

const TIMEOUT_MARKERS: &[&str] = &["timeout", "timed out", "deadline exceeded"];

const TRANSPORT_MARKERS: &[&str] = &["connection", "network", "dns error"];

/// Classify a free-text vendor error
pub fn classify_message(message: &str) -> ProviderErrorKind {
    let message_lower = message.to_lowercase();
    let contains_any = |markers: &[&str]| markers.iter().any(|m| message_lower.contains(m));

    if contains_any(RATE_LIMIT_MARKERS) || RATE_LIMIT_STATUS_RE.is_match(&message_lower) {
        ProviderErrorKind::RateLimited
    } else if contains_any(AUTH_MARKERS) || AUTH_STATUS_RE.is_match(&message_lower) {
        ProviderErrorKind::Authentication
    } else if contains_any(TIMEOUT_MARKERS) {
        ProviderErrorKind::Timeout
    } else if contains_any(TRANSPORT_MARKERS) {
        ProviderErrorKind::Transport
    } else {
        ProviderErrorKind::Other
    }
}
