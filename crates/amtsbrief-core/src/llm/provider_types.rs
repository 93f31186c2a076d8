//! Provider identity, vendor and capability definitions

use crate::error::{BriefError, BriefResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported LLM vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// Google (Gemini models)
    #[serde(alias = "gemini")]
    Google,
    /// OpenAI (GPT models)
    OpenAi,
    /// Anthropic (Claude models)
    #[serde(alias = "claude")]
    Anthropic,
    /// OpenRouter
    OpenRouter,
}

impl Vendor {
    /// Stable lowercase key used in logs and errors
    pub fn key(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Human-readable name used for user-scoped providers
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Gemini",
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::OpenRouter => "OpenRouter",
        }
    }

    /// Public API endpoint
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Google => "https://generativelanguage.googleapis.com",
            Self::OpenAi => "https://api.openai.com",
            Self::Anthropic => "https://api.anthropic.com",
            Self::OpenRouter => "https://openrouter.ai",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Vendor {
    type Err = BriefError;

    fn from_str(s: &str) -> BriefResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "google" | "gemini" => Ok(Self::Google),
            "openai" => Ok(Self::OpenAi),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "openrouter" => Ok(Self::OpenRouter),
            other => Err(BriefError::invalid_input_field(
                format!("Unknown vendor '{}'", other),
                "vendor",
            )),
        }
    }
}

/// How a provider treats a binary attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentMode {
    /// Sends the attachment to the vendor
    Native,
    /// Generates from the prompt alone when an attachment is present
    #[default]
    TextOnly,
    /// Skipped by the orchestrator whenever an attachment is present
    Unsupported,
}

/// Capability flags declared at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub attachments: AttachmentMode,
}

impl Capabilities {
    pub fn new(attachments: AttachmentMode) -> Self {
        Self { attachments }
    }

    pub fn supports_attachments(&self) -> bool {
        self.attachments == AttachmentMode::Native
    }
}

/// Identity of one vendor/model pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    /// Display name, unique within a registry
    pub name: String,
    pub vendor: Vendor,
    /// Vendor model identifier
    pub model: String,
    /// Endpoint override; `None` uses the vendor default
    pub base_url: Option<String>,
}

impl ProviderIdentity {
    pub fn new(name: impl Into<String>, vendor: Vendor, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor,
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.vendor.default_base_url())
            .trim_end_matches('/')
    }
}

/// One row of the declared provider table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpec {
    pub name: String,
    pub vendor: Vendor,
    pub model: String,
    /// Key looked up in the credential source (e.g. "GEMINI_API_KEY")
    pub credential_key: String,
    #[serde(default)]
    pub attachments: AttachmentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderSpec {
    pub fn new(
        name: impl Into<String>,
        vendor: Vendor,
        model: impl Into<String>,
        credential_key: impl Into<String>,
        attachments: AttachmentMode,
    ) -> Self {
        Self {
            name: name.into(),
            vendor,
            model: model.into(),
            credential_key: credential_key.into(),
            attachments,
            base_url: None,
        }
    }

    pub fn identity(&self) -> ProviderIdentity {
        ProviderIdentity {
            name: self.name.clone(),
            vendor: self.vendor,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// The declared failover order used when no table is configured
pub fn default_provider_table() -> Vec<ProviderSpec> {
    vec![
        ProviderSpec::new(
            "Gemini",
            Vendor::Google,
            "gemini-1.5-flash",
            "GEMINI_API_KEY",
            AttachmentMode::Native,
        ),
        ProviderSpec::new(
            "OpenAI",
            Vendor::OpenAi,
            "gpt-4o-mini",
            "OPENAI_API_KEY",
            AttachmentMode::TextOnly,
        ),
        ProviderSpec::new(
            "Anthropic",
            Vendor::Anthropic,
            "claude-3-5-haiku-20241022",
            "ANTHROPIC_API_KEY",
            AttachmentMode::TextOnly,
        ),
        ProviderSpec::new(
            "OpenRouter",
            Vendor::OpenRouter,
            "meta-llama/llama-3.1-8b-instruct:free",
            "OPENROUTER_API_KEY",
            AttachmentMode::TextOnly,
        ),
    ]
}
