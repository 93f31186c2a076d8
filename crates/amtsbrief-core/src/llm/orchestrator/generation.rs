//! Result of one `generate` call

use crate::error::BriefError;
use serde::Serialize;

/// Prefix of every placeholder text
pub const PLACEHOLDER_MARKER: &str = "[PLACEHOLDER]";

/// Where generated text came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// A system provider from the shared registry
    Provider { name: String },
    /// A provider built from a caller-supplied key
    UserKey { name: String },
    /// No provider answered
    Placeholder { reason: String },
}

/// Generated text plus its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub text: String,
    pub origin: Origin,
}

impl Generation {
    pub fn from_provider(text: String, name: impl Into<String>) -> Self {
        Self {
            text,
            origin: Origin::Provider { name: name.into() },
        }
    }

    pub fn from_user_key(text: String, name: impl Into<String>) -> Self {
        Self {
            text,
            origin: Origin::UserKey { name: name.into() },
        }
    }

    /// Labeled stand-in for a terminal failover error
    pub fn placeholder(error: &BriefError) -> Self {
        let reason = match error {
            BriefError::NoProvidersConfigured => "no AI providers are configured".to_string(),
            other => other.to_string(),
        };

        let text = format!(
            "{} No AI analysis is available right now ({}). \
             Please review the document manually or try again later.",
            PLACEHOLDER_MARKER, reason
        );

        Self {
            text,
            origin: Origin::Placeholder { reason },
        }
    }

    /// Label shown to end users next to the result
    pub fn provider_label(&self) -> String {
        match &self.origin {
            Origin::Provider { name } => format!("{} (System)", name),
            Origin::UserKey { name } => format!("{} (User API Key)", name),
            Origin::Placeholder { .. } => "Placeholder (no AI provider available)".to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.origin, Origin::Placeholder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProviderError, ProviderFailure};

    #[test]
    fn test_labels() {
        assert_eq!(
            Generation::from_provider("x".into(), "Gemini").provider_label(),
            "Gemini (System)"
        );
        assert_eq!(
            Generation::from_user_key("x".into(), "Gemini").provider_label(),
            "Gemini (User API Key)"
        );
    }

    #[test]
    fn test_placeholder_names_failures() {
        let error = BriefError::AllProvidersFailed {
            failures: vec![ProviderFailure::new(
                "OpenAI",
                ProviderError::from_message("openai", "invalid api key"),
            )],
        };

        let generation = Generation::placeholder(&error);

        assert!(generation.is_placeholder());
        assert!(generation.text.starts_with(PLACEHOLDER_MARKER));
        assert!(generation.text.contains("invalid api key"));
        assert_eq!(
            generation.provider_label(),
            "Placeholder (no AI provider available)"
        );
    }

    #[test]
    fn test_placeholder_for_empty_registry() {
        let generation = Generation::placeholder(&BriefError::NoProvidersConfigured);
        assert!(generation.text.contains("no AI providers are configured"));
    }
}
