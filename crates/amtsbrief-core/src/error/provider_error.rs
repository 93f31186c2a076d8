//! Errors produced by a single vendor call

use super::classifiers::classify_message;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Structured classification of a vendor failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Vendor signalled rate limiting or quota exhaustion
    RateLimited,
    /// Credential rejected (401/403)
    Authentication,
    /// The attempt deadline or transport timeout elapsed
    Timeout,
    /// Connection could not be established or was dropped
    Transport,
    /// Vendor answered with a non-success status
    Api { status: u16 },
    /// Vendor answered but the body could not be understood
    MalformedResponse,
    /// Vendor answered with no text
    EmptyResponse,
    /// Anything the integration could not classify itself
    Other,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate limited"),
            Self::Authentication => write!(f, "authentication failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::Transport => write!(f, "transport error"),
            Self::Api { status } => write!(f, "api error (status {})", status),
            Self::MalformedResponse => write!(f, "malformed response"),
            Self::EmptyResponse => write!(f, "empty response"),
            Self::Other => write!(f, "error"),
        }
    }
}

/// A single vendor call failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{vendor} API error ({kind}): {message}")]
pub struct ProviderError {
    /// Vendor key (e.g. "google", "openai")
    pub vendor: String,
    /// Structured classification
    pub kind: ProviderErrorKind,
    /// Sanitized, human-readable detail
    pub message: String,
}

impl ProviderError {
    pub fn new(
        vendor: impl Into<String>,
        kind: ProviderErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            kind,
            message: message.into(),
        }
    }

    /// Build an error from free text when the integration has no structured
    /// signal. The message heuristic decides the kind.
    pub fn from_message(vendor: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = classify_message(&message);
        Self::new(vendor, kind, message)
    }

    /// Map an HTTP status to a kind, falling back to the message heuristic
    /// for statuses that carry no specific meaning.
    pub fn from_status(vendor: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = match status {
            429 => ProviderErrorKind::RateLimited,
            401 | 403 => ProviderErrorKind::Authentication,
            408 | 504 => ProviderErrorKind::Timeout,
            _ => match classify_message(&message) {
                ProviderErrorKind::RateLimited => ProviderErrorKind::RateLimited,
                _ => ProviderErrorKind::Api { status },
            },
        };
        Self::new(vendor, kind, message)
    }

    pub fn timeout(vendor: impl Into<String>, deadline: Duration) -> Self {
        Self::new(
            vendor,
            ProviderErrorKind::Timeout,
            format!("no response within {}ms", deadline.as_millis()),
        )
    }

    /// Whether this failure should put the provider into a cooldown
    pub fn is_rate_limited(&self) -> bool {
        self.kind == ProviderErrorKind::RateLimited
    }
}

/// One entry of a composite failover failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    /// Provider display name (e.g. "Gemini")
    pub provider: String,
    /// What went wrong
    pub error: ProviderError,
}

impl ProviderFailure {
    pub fn new(provider: impl Into<String>, error: ProviderError) -> Self {
        Self {
            provider: provider.into(),
            error,
        }
    }
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.provider, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_structured_kinds() {
        assert_eq!(
            ProviderError::from_status("openai", 429, "slow down").kind,
            ProviderErrorKind::RateLimited
        );
        assert_eq!(
            ProviderError::from_status("openai", 401, "bad key").kind,
            ProviderErrorKind::Authentication
        );
        assert_eq!(
            ProviderError::from_status("openai", 500, "internal").kind,
            ProviderErrorKind::Api { status: 500 }
        );
    }

    #[test]
    fn test_from_status_uses_message_for_quota_on_generic_status() {
        // Gemini reports quota exhaustion as 400 with RESOURCE_EXHAUSTED in some regions
        let err = ProviderError::from_status("google", 400, "RESOURCE_EXHAUSTED: quota");
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_from_status_ignores_429_inside_other_numbers() {
        let err = ProviderError::from_status(
            "openai",
            400,
            "status 400 Bad Request: maximum context length is 4290 tokens",
        );
        assert_eq!(err.kind, ProviderErrorKind::Api { status: 400 });
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_timeout_message_keeps_sub_second_deadlines() {
        let err = ProviderError::timeout("google", Duration::from_millis(250));
        assert_eq!(err.kind, ProviderErrorKind::Timeout);
        assert_eq!(err.message, "no response within 250ms");
    }

    #[test]
    fn test_from_message_falls_back_to_heuristic() {
        assert!(ProviderError::from_message("anthropic", "Rate limit reached").is_rate_limited());
        assert_eq!(
            ProviderError::from_message("anthropic", "something odd").kind,
            ProviderErrorKind::Other
        );
    }

    #[test]
    fn test_display_includes_vendor_and_message() {
        let err = ProviderError::new("google", ProviderErrorKind::Transport, "refused");
        let text = err.to_string();
        assert!(text.contains("google"));
        assert!(text.contains("refused"));
    }
}
