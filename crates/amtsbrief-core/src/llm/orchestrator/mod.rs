//! Failover orchestration over the ordered provider list

mod failover;
mod generation;
mod manager;
mod status;
mod types;


pub use failover::failover;
pub use generation::{Generation, Origin, PLACEHOLDER_MARKER};
pub use manager::FailoverOrchestrator;
pub use status::StatusReport;
pub use types::{ExhaustionPolicy, OrchestratorConfig};
