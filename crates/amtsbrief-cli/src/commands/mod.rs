//! CLI commands

pub mod analyze;
pub mod providers;
pub mod status;
pub mod validate_key;
