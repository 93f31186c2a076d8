//! Provider abstraction, health tracking and failover

pub mod attachment;
pub mod health;
pub mod orchestrator;
pub mod provider;
pub mod provider_types;
pub mod providers;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use attachment::{Attachment, AttachmentFormat, detect_file_format};
pub use health::{HealthPolicy, HealthRecord, ProviderStatus};
pub use orchestrator::{
    ExhaustionPolicy, FailoverOrchestrator, Generation, OrchestratorConfig, Origin,
    PLACEHOLDER_MARKER, StatusReport, failover,
};
pub use provider::{Credential, Provider, ProviderSnapshot};
pub use provider_types::{
    AttachmentMode, Capabilities, ProviderIdentity, ProviderSpec, Vendor, default_provider_table,
};
pub use providers::{BackendFactory, BackendSettings, HttpBackendFactory, LlmBackend};
pub use registry::{Credentials, ProviderList, ProviderRegistry, RegistryBuilder};
