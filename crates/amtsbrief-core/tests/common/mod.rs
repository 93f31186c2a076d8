//! Shared helpers for integration tests

#![allow(dead_code)]

use amtsbrief_core::error::ProviderError;
use amtsbrief_core::llm::{
    Attachment, AttachmentMode, BackendFactory, Capabilities, Credential, HealthPolicy,
    LlmBackend, Provider, ProviderIdentity, ProviderSpec, Vendor,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Backend that replays queued outcomes, then repeats a fixed one
pub struct ScriptedBackend {
    queued: Mutex<VecDeque<Result<String, ProviderError>>>,
    fallback: Result<String, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    attachment_calls: AtomicUsize,
}

impl ScriptedBackend {
    fn with_outcome(fallback: Result<String, ProviderError>) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback,
            delay: None,
            calls: AtomicUsize::new(0),
            attachment_calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding(text: &str) -> Arc<Self> {
        Arc::new(Self::with_outcome(Ok(text.to_string())))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self::with_outcome(Err(ProviderError::from_message(
            "scripted", message,
        ))))
    }

    /// Queued outcomes first, then `text` forever
    pub fn sequence(outcomes: Vec<Result<String, ProviderError>>, text: &str) -> Arc<Self> {
        let backend = Self::with_outcome(Ok(text.to_string()));
        backend.queued.lock().extend(outcomes);
        Arc::new(backend)
    }

    pub fn failing_slowly(message: &str, delay: Duration) -> Arc<Self> {
        let mut backend = Self::with_outcome(Err(ProviderError::from_message(
            "scripted", message,
        )));
        backend.delay = Some(delay);
        Arc::new(backend)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn attachment_calls(&self) -> usize {
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

        let next = self.queued.lock().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

/// Factory handing out pre-registered backends by provider name
#[derive(Default)]
pub struct ScriptedFactory {
    backends: HashMap<String, Arc<ScriptedBackend>>,
}

impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, backend: Arc<ScriptedBackend>) -> Self {
        self.backends.insert(name.to_string(), backend);
        self
    }
}

impl BackendFactory for ScriptedFactory {
    fn build(&self, identity: &ProviderIdentity, _secret: &str) -> Arc<dyn LlmBackend> {
        match self.backends.get(&identity.name) {
            Some(backend) => backend.clone(),
            None => ScriptedBackend::failing("no scripted backend"),
        }
    }
}

/// Table row with a credential key derived from the name
pub fn spec(name: &str, attachments: AttachmentMode) -> ProviderSpec {
    ProviderSpec::new(
        name,
        Vendor::OpenAi,
        "test-model",
        format!("{}_KEY", name.to_uppercase()),
        attachments,
    )
}

/// Standalone provider with a credential and the default policy
pub fn provider(name: &str, backend: Arc<ScriptedBackend>) -> Arc<Provider> {
    provider_with_policy(name, backend, HealthPolicy::default())
}

pub fn provider_with_policy(
    name: &str,
    backend: Arc<ScriptedBackend>,
    policy: HealthPolicy,
) -> Arc<Provider> {
    Arc::new(Provider::new(
        ProviderIdentity::new(name, Vendor::OpenAi, "test-model"),
        Credential::new("test-secret"),
        Capabilities::new(AttachmentMode::TextOnly),
        backend,
        policy,
    ))
}

/// Minimal PNG header, enough for format detection
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];
