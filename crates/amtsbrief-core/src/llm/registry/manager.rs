//! Registry that owns the shared provider list

use super::builder::RegistryBuilder;
use super::credentials::Credentials;
use crate::error::{BriefError, BriefResult};
use crate::llm::health::HealthPolicy;
use crate::llm::provider::{Credential, Provider};
use crate::llm::provider_types::{
    AttachmentMode, Capabilities, ProviderIdentity, ProviderSpec, Vendor,
};
use crate::llm::providers::BackendFactory;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Immutable, cheaply cloned view of the ordered provider list
pub type ProviderList = Arc<[Arc<Provider>]>;

/// Registry of system providers.
///
/// The list is rebuilt wholesale on reload and swapped in one step, so a
/// request that already took a snapshot keeps walking the old list.
pub struct ProviderRegistry {
    table: Vec<ProviderSpec>,
    factory: Arc<dyn BackendFactory>,
    policy: HealthPolicy,
    attempt_timeout: Option<Duration>,
    providers: RwLock<ProviderList>,
}

impl ProviderRegistry {
    pub fn builder(factory: Arc<dyn BackendFactory>) -> RegistryBuilder {
        RegistryBuilder::new(factory)
    }

    /// Build a registry over the default table
    pub fn build(factory: Arc<dyn BackendFactory>, credentials: &Credentials) -> Self {
        RegistryBuilder::new(factory).build(credentials)
    }

    pub(super) fn empty(
        table: Vec<ProviderSpec>,
        factory: Arc<dyn BackendFactory>,
        policy: HealthPolicy,
        attempt_timeout: Option<Duration>,
    ) -> Self {
        Self {
            table,
            factory,
            policy,
            attempt_timeout,
            providers: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Declared provider table
    pub fn table(&self) -> &[ProviderSpec] {
        &self.table
    }

    /// Credential keys named by the table, in table order
    pub fn credential_keys(&self) -> impl Iterator<Item = &str> {
        self.table.iter().map(|spec| spec.credential_key.as_str())
    }

    pub fn policy(&self) -> &HealthPolicy {
        &self.policy
    }

    /// Snapshot of the current ordered list
    pub fn providers(&self) -> ProviderList {
        self.providers.read().clone()
    }

    /// Rebuild every provider from `credentials` with fresh health and swap
    /// the new list in. Returns the new provider count.
    pub fn reload(&self, credentials: &Credentials) -> usize {
        let providers: Vec<Arc<Provider>> = self
            .table
            .iter()
            .filter_map(|spec| self.provider_for(spec, credentials))
            .map(Arc::new)
            .collect();

        let count = providers.len();
        *self.providers.write() = Arc::from(providers);

        info!(
            "Provider registry loaded {} of {} declared providers",
            count,
            self.table.len()
        );
        count
    }

    fn provider_for(&self, spec: &ProviderSpec, credentials: &Credentials) -> Option<Provider> {
        let Some(credential) = credentials.get(&spec.credential_key) else {
            debug!(
                provider = %spec.name,
                credential_key = %spec.credential_key,
                "Skipping provider without credential"
            );
            return None;
        };

        Some(self.assemble(
            spec.identity(),
            credential.clone(),
            Capabilities::new(spec.attachments),
        ))
    }

    fn assemble(
        &self,
        identity: ProviderIdentity,
        credential: Credential,
        capabilities: Capabilities,
    ) -> Provider {
        let backend = self.factory.build(&identity, credential.expose());
        Provider::new(
            identity,
            Some(credential),
            capabilities,
            backend,
            self.policy,
        )
        .with_attempt_timeout(self.attempt_timeout)
    }

    /// Ad-hoc provider for a caller-supplied key.
    ///
    /// The provider is never added to the shared list and starts ACTIVE with
    /// an empty history. Capabilities and endpoint come from the first table
    /// row with the same vendor when there is one.
    pub fn build_user_provider(
        &self,
        vendor_key: &str,
        model_id: &str,
        secret: &str,
    ) -> BriefResult<Provider> {
        let vendor: Vendor = vendor_key.parse()?;
        let credential = Credential::new(secret)
            .ok_or_else(|| BriefError::credential_missing(vendor.display_name()))?;

        let model_id = model_id.trim();
        if model_id.is_empty() {
            return Err(BriefError::invalid_input_field(
                "Model identifier must not be empty",
                "model",
            ));
        }

        let declared = self.table.iter().find(|spec| spec.vendor == vendor);
        let attachments = match declared {
            Some(spec) => spec.attachments,
            None if vendor == Vendor::Google => AttachmentMode::Native,
            None => AttachmentMode::TextOnly,
        };

        let mut identity = ProviderIdentity::new(vendor.display_name(), vendor, model_id);
        if let Some(base_url) = declared.and_then(|spec| spec.base_url.clone()) {
            identity = identity.with_base_url(base_url);
        }

        debug!(vendor = %vendor, model = %model_id, "Built user-scoped provider");
        Ok(self.assemble(identity, credential, Capabilities::new(attachments)))
    }

    pub fn find(&self, name: &str) -> Option<Arc<Provider>> {
        self.providers
            .read()
            .iter()
            .find(|provider| provider.name() == name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}
