//! Orchestrator configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BriefError, BriefResult};

/// What `generate` does when no provider produced text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Return the terminal error to the caller
    Fail,
    /// Return a clearly labeled placeholder generation
    #[default]
    Placeholder,
}

impl fmt::Display for ExhaustionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Placeholder => write!(f, "placeholder"),
        }
    }
}

impl FromStr for ExhaustionPolicy {
    type Err = BriefError;

    fn from_str(s: &str) -> BriefResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail" | "error" => Ok(Self::Fail),
            "placeholder" | "degrade" => Ok(Self::Placeholder),
            other => Err(BriefError::invalid_input_field(
                format!("Unknown exhaustion policy '{}'", other),
                "exhaustion",
            )),
        }
    }
}

/// Orchestrator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrchestratorConfig {
    pub exhaustion: ExhaustionPolicy,
}

impl OrchestratorConfig {
    pub fn new(exhaustion: ExhaustionPolicy) -> Self {
        Self { exhaustion }
    }
}
