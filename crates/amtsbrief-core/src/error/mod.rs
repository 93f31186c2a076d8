//! Error types for amtsbrief
//!
//! Two layers of errors live here:
//! - [`ProviderError`]: one failed vendor call. It is folded into the
//!   provider's health record and only reaches a caller as part of a
//!   terminal failure.
//! - [`BriefError`]: everything a caller of the core can observe, including
//!   the two terminal outcomes of a `generate` call.

mod classifiers;
mod constructors;
mod provider_error;
mod types;

pub use classifiers::classify_message;
pub use provider_error::{ProviderError, ProviderErrorKind, ProviderFailure};
pub use types::{BriefError, BriefResult};
