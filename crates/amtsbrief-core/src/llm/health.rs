//! Per-provider health state machine
//!
//! Transitions happen only on recorded outcomes, with one exception: an
//! expired rate-limit cooldown reads as ACTIVE (see [`HealthRecord::refresh`]).

use crate::config::timeouts;
use crate::error::ProviderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Health status of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderStatus {
    Active,
    Inactive,
    Error,
    RateLimited,
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Error => write!(f, "error"),
            Self::RateLimited => write!(f, "rate_limited"),
        }
    }
}

/// Thresholds applied by the health state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthPolicy {
    /// Consecutive errors that demote a provider to ERROR
    pub error_threshold: u32,
    /// How long a rate-limited provider is blocked after its last request
    pub rate_limit_cooldown: Duration,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            error_threshold: timeouts::health::ERROR_THRESHOLD,
            rate_limit_cooldown: timeouts::health::rate_limit_cooldown(),
        }
    }
}

impl HealthPolicy {
    pub fn with_error_threshold(mut self, threshold: u32) -> Self {
        self.error_threshold = threshold;
        self
    }

    pub fn with_rate_limit_cooldown(mut self, cooldown: Duration) -> Self {
        self.rate_limit_cooldown = cooldown;
        self
    }
}

/// Mutable health record of one provider
#[derive(Debug, Clone)]
pub struct HealthRecord {
    pub(crate) status: ProviderStatus,
    pub(crate) consecutive_errors: u32,
    pub(crate) request_count: u64,
    pub(crate) last_error: Option<String>,
    /// Monotonic timestamp used for cooldown arithmetic
    pub(crate) last_request: Option<Instant>,
    /// Wall-clock timestamp for reporting
    pub(crate) last_request_at: Option<DateTime<Utc>>,
}

impl HealthRecord {
    pub fn new(status: ProviderStatus) -> Self {
        Self {
            status,
            consecutive_errors: 0,
            request_count: 0,
            last_error: None,
            last_request: None,
            last_request_at: None,
        }
    }

    pub fn active() -> Self {
        Self::new(ProviderStatus::Active)
    }

    pub fn inactive() -> Self {
        Self::new(ProviderStatus::Inactive)
    }

    pub fn status(&self) -> ProviderStatus {
        self.status
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }

    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_request_at(&self) -> Option<DateTime<Utc>> {
        self.last_request_at
    }

    /// Stamp a request before the vendor is called
    pub fn record_request(&mut self, now: Instant) {
        self.last_request = Some(now);
        self.last_request_at = Some(Utc::now());
        self.request_count += 1;
    }

    pub fn record_success(&mut self) {
        self.consecutive_errors = 0;
        self.last_error = None;
        if matches!(
            self.status,
            ProviderStatus::Error | ProviderStatus::RateLimited
        ) {
            self.status = ProviderStatus::Active;
        }
    }

    pub fn record_error(&mut self, error: &ProviderError, policy: &HealthPolicy) {
        self.consecutive_errors += 1;
        self.last_error = Some(error.to_string());

        if self.consecutive_errors >= policy.error_threshold {
            self.status = ProviderStatus::Error;
        } else if error.is_rate_limited() {
            self.status = ProviderStatus::RateLimited;
        }
    }

    /// A rate-limited provider blocks requests until its cooldown elapses
    pub fn is_cooling_down(&self, now: Instant, policy: &HealthPolicy) -> bool {
        if self.status != ProviderStatus::RateLimited {
            return false;
        }

        match self.last_request {
            Some(last) => now.saturating_duration_since(last) < policy.rate_limit_cooldown,
            None => false,
        }
    }

    /// Status as observed at `now`, without mutating the record
    pub fn effective_status(&self, now: Instant, policy: &HealthPolicy) -> ProviderStatus {
        if self.status == ProviderStatus::RateLimited && !self.is_cooling_down(now, policy) {
            ProviderStatus::Active
        } else {
            self.status
        }
    }

    /// Apply the read-time cooldown expiry transition
    pub fn refresh(&mut self, now: Instant, policy: &HealthPolicy) -> ProviderStatus {
        self.status = self.effective_status(now, policy);
        self.status
    }

    /// Back to ACTIVE with an empty history
    pub fn reset(&mut self) {
        *self = Self::active();
    }
}
