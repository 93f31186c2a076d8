//! Amtsbrief core library
//!
//! Analyzes official letters with large language models. The heart of the
//! crate is the provider layer: a uniform backend interface over several LLM
//! vendors, per-provider health tracking, a registry that builds the ordered
//! provider list from credentials, and a failover orchestrator that walks
//! that list until one provider answers.

pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;

// Re-export commonly used types
pub use analysis::{AnalysisRequest, LetterAnalysis, LetterAnalyzer, validate_user_key};
pub use config::{AppConfig, LoggingConfig, load_config};
pub use error::{BriefError, BriefResult, ProviderError, ProviderErrorKind};
pub use llm::{
    Credentials, ExhaustionPolicy, FailoverOrchestrator, Generation, OrchestratorConfig, Provider,
    ProviderRegistry, ProviderStatus, StatusReport,
};
