//! Provider registry
//!
//! Turns the declared provider table plus the available credentials into the
//! ordered provider list the orchestrator walks.

mod builder;
mod credentials;
mod manager;

#[cfg(test)]
mod tests;

pub use builder::RegistryBuilder;
pub use credentials::Credentials;
pub use manager::{ProviderList, ProviderRegistry};
