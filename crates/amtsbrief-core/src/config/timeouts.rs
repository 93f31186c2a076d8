//! Centralized timeout and limit defaults
//!
//! All values can be overridden via configuration.

use std::time::Duration;

/// Default values for vendor HTTP calls
pub mod llm {
    use super::*;

    /// Default connection timeout for LLM APIs (30 seconds)
    pub const CONNECTION_SECS: u64 = 30;

    /// Default request timeout for LLM APIs (60 seconds)
    pub const REQUEST_SECS: u64 = 60;

    /// Default completion budget per request
    pub const MAX_TOKENS: u32 = 4000;

    pub fn connection_timeout() -> Duration {
        Duration::from_secs(CONNECTION_SECS)
    }

    pub fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_SECS)
    }
}

/// Default values for provider health tracking
pub mod health {
    use super::*;

    /// Consecutive errors before a provider is demoted to ERROR
    pub const ERROR_THRESHOLD: u32 = 3;

    /// Cooldown after a rate-limit signal (60 seconds)
    pub const RATE_LIMIT_COOLDOWN_SECS: u64 = 60;

    pub fn rate_limit_cooldown() -> Duration {
        Duration::from_secs(RATE_LIMIT_COOLDOWN_SECS)
    }
}

/// Default values for attachments
pub mod attachment {
    /// Largest attachment sent to a vendor (20 MiB)
    pub const MAX_BYTES: u64 = 20 * 1024 * 1024;
}
