//! Core error type for amtsbrief

use super::provider_error::{ProviderError, ProviderFailure};
use thiserror::Error;

/// Result type alias for amtsbrief operations
pub type BriefResult<T> = Result<T, BriefError>;

/// Main error type for amtsbrief
#[derive(Error, Debug, Clone)]
pub enum BriefError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// A provider was requested explicitly but has no usable secret
    #[error("No credential configured for provider '{provider}'")]
    CredentialMissing { provider: String },

    /// A single vendor call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The ordered provider list was empty
    #[error("No LLM providers configured")]
    NoProvidersConfigured,

    /// Every eligible provider was tried and failed (or none was eligible)
    #[error("All LLM providers failed or are unavailable{}", format_failures(.failures))]
    AllProvidersFailed { failures: Vec<ProviderFailure> },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },
}

fn format_failures(failures: &[ProviderFailure]) -> String {
    if failures.is_empty() {
        return ": no provider was eligible".to_string();
    }

    let details: Vec<String> = failures.iter().map(ToString::to_string).collect();
    format!(": {}", details.join("; "))
}

impl From<std::io::Error> for BriefError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<toml::de::Error> for BriefError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
            context: Some("Parsing TOML configuration".to_string()),
        }
    }
}

impl From<serde_json::Error> for BriefError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput {
            message: format!("JSON error: {}", err),
            field: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorKind;

    #[test]
    fn test_all_providers_failed_lists_every_failure() {
        let err = BriefError::AllProvidersFailed {
            failures: vec![
                ProviderFailure::new(
                    "Gemini",
                    ProviderError::new("google", ProviderErrorKind::Transport, "connection refused"),
                ),
                ProviderFailure::new(
                    "OpenAI",
                    ProviderError::new("openai", ProviderErrorKind::Api { status: 500 }, "boom"),
                ),
            ],
        };

        let text = err.to_string();
        assert!(text.contains("Gemini"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("OpenAI"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_all_providers_failed_without_attempts() {
        let err = BriefError::AllProvidersFailed { failures: vec![] };
        assert!(err.to_string().ends_with("no provider was eligible"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BriefError = io.into();
        assert!(matches!(err, BriefError::Io { .. }));
    }
}
