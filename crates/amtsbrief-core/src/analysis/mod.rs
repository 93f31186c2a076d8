//! Letter analysis on top of the failover orchestrator

mod analyzer;
mod prompt;
mod result;

pub use analyzer::{LetterAnalyzer, USER_KEY_PROBE_PROMPT, validate_user_key};
pub use prompt::{AnalysisRequest, DEFAULT_LANGUAGE, DocumentKind, analysis_prompt};
pub use result::{AnalysisDetails, LetterAnalysis, UrgencyLevel};
