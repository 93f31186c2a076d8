//! Shaping a model reply into the analysis returned to callers

use super::prompt::AnalysisRequest;
use crate::llm::orchestrator::{Generation, Origin};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

const MAIN_CONTENT_CHARS: usize = 500;

const DEFAULT_ACTIONS: &[&str] = &[
    "Review the document contents",
    "Take appropriate action based on requirements",
];

const DEFAULT_RESPONSE_TEMPLATE: &str =
    "Thank you for your letter. We will review and respond accordingly.";

static URGENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)urgency(?:\s+level)?[^A-Za-z\n]{0,12}(high|medium|low)\b")
        .expect("valid urgency regex")
});

static SENDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[\s*#\d.\-]*sender(?:\s+information)?\**\s*:\**\s*(.+)$")
        .expect("valid sender regex")
});

static LETTER_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[\s*#\d.\-]*letter\s+type\**\s*:\**\s*(.+)$")
        .expect("valid letter type regex")
});

/// Urgency reported by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl UrgencyLevel {
    /// Parse the urgency line of a reply; MEDIUM when absent
    pub fn from_reply(reply: &str) -> Self {
        URGENCY_RE
            .captures(reply)
            .and_then(|caps| caps.get(1))
            .map(|level| match level.as_str().to_ascii_uppercase().as_str() {
                "HIGH" => Self::High,
                "LOW" => Self::Low,
                _ => Self::Medium,
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisDetails {
    pub sender: String,
    pub letter_type: String,
    /// First 500 characters of the reply
    pub main_content: String,
    pub full_analysis: String,
}

/// Structured analysis of one letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterAnalysis {
    pub summary: String,
    pub analysis: AnalysisDetails,
    pub actions_needed: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub response_template: String,
    pub llm_provider: String,
    pub file_name: String,
    pub analysis_language: String,
    pub file_type: String,
    /// True when no model produced the text
    pub degraded: bool,
}

impl LetterAnalysis {
    pub fn from_generation(request: &AnalysisRequest, generation: &Generation) -> Self {
        let reply = generation.text.as_str();
        let degraded = generation.is_placeholder();

        let summary = match &generation.origin {
            Origin::Provider { .. } => format!(
                "Analysis of {} completed using system providers",
                request.file_name
            ),
            Origin::UserKey { .. } => {
                format!("Analysis of {} completed successfully", request.file_name)
            }
            Origin::Placeholder { .. } => format!(
                "Automatic analysis of {} is currently unavailable",
                request.file_name
            ),
        };

        let (sender, letter_type) = if degraded {
            ("Unknown".to_string(), "Unknown".to_string())
        } else {
            (
                extract_field(&SENDER_RE, reply).unwrap_or_else(|| "Analysis completed".to_string()),
                extract_field(&LETTER_TYPE_RE, reply)
                    .unwrap_or_else(|| "Document analyzed".to_string()),
            )
        };

        Self {
            summary,
            analysis: AnalysisDetails {
                sender,
                letter_type,
                main_content: main_content(reply),
                full_analysis: reply.to_string(),
            },
            actions_needed: DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect(),
            urgency_level: UrgencyLevel::from_reply(reply),
            response_template: DEFAULT_RESPONSE_TEMPLATE.to_string(),
            llm_provider: generation.provider_label(),
            file_name: request.file_name.clone(),
            analysis_language: request.language.clone(),
            file_type: request.kind.to_string(),
            degraded,
        }
    }
}

fn extract_field(re: &Regex, reply: &str) -> Option<String> {
    re.captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim().trim_matches('*').trim().to_string())
        .filter(|value| !value.is_empty())
}

/// First 500 characters, with `...` appended when the reply is longer
fn main_content(reply: &str) -> String {
    match reply.char_indices().nth(MAIN_CONTENT_CHARS) {
        Some((cut, _)) => format!("{}...", &reply[..cut]),
        None => reply.to_string(),
    }
}
