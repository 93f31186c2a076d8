//! Scripted backends for unit tests

use crate::error::ProviderError;
use crate::llm::attachment::Attachment;
use crate::llm::providers::LlmBackend;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Backend that always returns the same outcome and counts its calls
pub(crate) struct ScriptedBackend {
    outcome: Result<String, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    attachment_calls: AtomicUsize,
}

impl ScriptedBackend {
    fn with_outcome(outcome: Result<String, ProviderError>) -> Self {
        Self {
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
            attachment_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn succeeding(text: &str) -> Arc<Self> {
        Arc::new(Self::with_outcome(Ok(text.to_string())))
    }

    pub(crate) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self::with_outcome(Err(ProviderError::from_message(
            "scripted", message,
        ))))
    }

    pub(crate) fn slow(text: &str, delay: Duration) -> Arc<Self> {
        let mut backend = Self::with_outcome(Ok(text.to_string()));
        backend.delay = Some(delay);
        Arc::new(backend)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn attachment_calls(&self) -> usize {
        self.attachment_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmBackend for ScriptedBackend {
    async fn generate(
        &self,
        _prompt: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if attachment.is_some() {
            self.attachment_calls.fetch_add(1, Ordering::SeqCst);
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
