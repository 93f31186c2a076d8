//! Letter analysis flows

use super::prompt::{AnalysisRequest, analysis_prompt};
use super::result::LetterAnalysis;
use crate::error::BriefResult;
use crate::llm::orchestrator::FailoverOrchestrator;
use crate::llm::provider::Provider;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Prompt used to check that a caller-supplied key works
pub const USER_KEY_PROBE_PROMPT: &str = "Test";

/// Runs the analysis prompt through the system providers or a user key
pub struct LetterAnalyzer {
    orchestrator: Arc<FailoverOrchestrator>,
}

impl LetterAnalyzer {
    pub fn new(orchestrator: Arc<FailoverOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &Arc<FailoverOrchestrator> {
        &self.orchestrator
    }

    /// System path: failover across the shared registry. Images are sent as
    /// attachments; other documents are described by name only.
    pub async fn analyze(&self, path: &Path, language: &str) -> BriefResult<LetterAnalysis> {
        let request = AnalysisRequest::for_file(path, language).await?;
        let prompt = analysis_prompt(&request);
        debug!(file = %request.file_name, kind = %request.kind, "Analyzing with system providers");

        let attachment = request.is_image().then_some(path);
        let generation = self.orchestrator.generate(&prompt, attachment).await?;

        info!(
            "Analysis of '{}' produced by {}",
            request.file_name,
            generation.provider_label()
        );
        Ok(LetterAnalysis::from_generation(&request, &generation))
    }

    /// User-key path: one ad-hoc provider, failure is returned to the caller
    pub async fn analyze_with_user_key(
        &self,
        path: &Path,
        language: &str,
        provider: Provider,
    ) -> BriefResult<LetterAnalysis> {
        let request = AnalysisRequest::for_file(path, language).await?;
        let prompt = analysis_prompt(&request);
        debug!(
            file = %request.file_name,
            provider = %provider.name(),
            "Analyzing with user-supplied key"
        );

        let attachment = request.is_image().then_some(path);
        let generation = self
            .orchestrator
            .generate_for_user(provider, &prompt, attachment)
            .await?;

        Ok(LetterAnalysis::from_generation(&request, &generation))
    }
}

/// Probe a caller-supplied key with a trivial prompt before it is accepted
pub async fn validate_user_key(provider: &Provider) -> BriefResult<()> {
    provider.attempt(USER_KEY_PROBE_PROMPT, None).await?;
    info!("User API key for {} validated", provider.name());
    Ok(())
}
