//! A single vendor/model pair with its own health record

use crate::config::api_key::mask_api_key;
use crate::error::{ProviderError, ProviderErrorKind};
use crate::llm::attachment::Attachment;
use crate::llm::health::{HealthPolicy, HealthRecord, ProviderStatus};
use crate::llm::provider_types::{Capabilities, ProviderIdentity, Vendor};
use crate::llm::providers::LlmBackend;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Secret used to authenticate against a vendor
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Blank secrets are treated as absent
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        let trimmed = secret.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", mask_api_key(&self.0))
    }
}

/// Point-in-time view of a provider, safe to serialize for dashboards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSnapshot {
    pub name: String,
    pub vendor: Vendor,
    pub model: String,
    pub status: ProviderStatus,
    pub request_count: u64,
    /// Consecutive errors since the last success
    pub error_count: u32,
    pub last_error: Option<String>,
    pub last_request_at: Option<DateTime<Utc>>,
    pub eligible_now: bool,
    pub supports_attachments: bool,
}

/// One configured vendor/model pair.
///
/// The health record is shared between concurrent requests. Every mutation
/// happens inside one short critical section and the lock is never held
/// while the vendor call is in flight.
pub struct Provider {
    identity: ProviderIdentity,
    credential: Option<Credential>,
    capabilities: Capabilities,
    backend: Arc<dyn LlmBackend>,
    policy: HealthPolicy,
    attempt_timeout: Option<Duration>,
    health: Mutex<HealthRecord>,
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("identity", &self.identity)
            .field("credential", &self.credential)
            .field("capabilities", &self.capabilities)
            .field("policy", &self.policy)
            .field("attempt_timeout", &self.attempt_timeout)
            .field("health", &*self.health.lock())
            .finish()
    }
}

impl Provider {
    /// A provider with a credential starts ACTIVE, one without starts INACTIVE
    pub fn new(
        identity: ProviderIdentity,
        credential: Option<Credential>,
        capabilities: Capabilities,
        backend: Arc<dyn LlmBackend>,
        policy: HealthPolicy,
    ) -> Self {
        let health = if credential.is_some() {
            HealthRecord::active()
        } else {
            HealthRecord::inactive()
        };

        Self {
            identity,
            credential,
            capabilities,
            backend,
            policy,
            attempt_timeout: None,
            health: Mutex::new(health),
        }
    }

    /// Deadline applied to each vendor call
    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn identity(&self) -> &ProviderIdentity {
        &self.identity
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Current status as a reader would see it, without mutating the record
    pub fn status(&self) -> ProviderStatus {
        self.health
            .lock()
            .effective_status(Instant::now(), &self.policy)
    }

    /// Copy of the health record
    pub fn health(&self) -> HealthRecord {
        self.health.lock().clone()
    }

    /// False without a credential or while a rate-limit cooldown runs
    pub fn can_attempt(&self) -> bool {
        if self.credential.is_none() {
            return false;
        }
        !self
            .health
            .lock()
            .is_cooling_down(Instant::now(), &self.policy)
    }

    /// Orchestrator gate: refreshed status is ACTIVE and an attempt is allowed
    pub fn is_selectable(&self) -> bool {
        if self.credential.is_none() {
            return false;
        }

        let now = Instant::now();
        let mut health = self.health.lock();
        health.refresh(now, &self.policy) == ProviderStatus::Active
            && !health.is_cooling_down(now, &self.policy)
    }

    /// One vendor call. No retries happen here.
    pub async fn attempt(
        &self,
        prompt: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, ProviderError> {
        let vendor = self.identity.vendor.key();
        if self.credential.is_none() {
            return Err(ProviderError::new(
                vendor,
                ProviderErrorKind::Authentication,
                "no credential configured",
            ));
        }

        // Counted before the call so a hung request still shows up
        self.health.lock().record_request(Instant::now());

        let call = self.backend.generate(prompt, attachment);
        let outcome = match self.attempt_timeout {
            Some(deadline) => match tokio::time::timeout(deadline, call).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::timeout(vendor, deadline)),
            },
            None => call.await,
        };

        let outcome = outcome.and_then(|text| {
            if text.trim().is_empty() {
                Err(ProviderError::new(
                    vendor,
                    ProviderErrorKind::EmptyResponse,
                    "vendor returned no text",
                ))
            } else {
                Ok(text)
            }
        });

        let mut health = self.health.lock();
        match &outcome {
            Ok(_) => health.record_success(),
            Err(error) => {
                health.record_error(error, &self.policy);
                debug!(
                    provider = %self.identity.name,
                    status = %health.status(),
                    consecutive_errors = health.consecutive_errors(),
                    "Recorded provider error"
                );
            }
        }

        outcome
    }

    /// Read-only view for status reporting; never calls the vendor
    pub fn snapshot(&self) -> ProviderSnapshot {
        let now = Instant::now();
        let health = self.health.lock();
        let status = health.effective_status(now, &self.policy);
        let eligible_now = self.credential.is_some()
            && status == ProviderStatus::Active
            && !health.is_cooling_down(now, &self.policy);

        ProviderSnapshot {
            name: self.identity.name.clone(),
            vendor: self.identity.vendor,
            model: self.identity.model.clone(),
            status,
            request_count: health.request_count(),
            error_count: health.consecutive_errors(),
            last_error: health.last_error().map(str::to_string),
            last_request_at: health.last_request_at(),
            eligible_now,
            supports_attachments: self.capabilities.supports_attachments(),
        }
    }

    /// Operator self-heal back to ACTIVE. Returns false for providers
    /// without a credential, which stay INACTIVE.
    pub fn reset(&self) -> bool {
        if self.credential.is_none() {
            return false;
        }
        self.health.lock().reset();
        true
    }
}
