//! Sequential failover over an ordered provider slice

use crate::error::{BriefError, BriefResult, ProviderFailure};
use crate::llm::attachment::Attachment;
use crate::llm::provider::Provider;
use crate::llm::provider_types::AttachmentMode;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Walk `providers` in order and return the first successful reply together
/// with the name of the provider that produced it.
///
/// Attempts are strictly sequential. Providers that are not selectable are
/// skipped, as are providers declared `Unsupported` when an attachment is
/// present. `TextOnly` providers are attempted without the attachment.
pub async fn failover(
    providers: &[Arc<Provider>],
    prompt: &str,
    attachment: Option<&Attachment>,
) -> BriefResult<(String, String)> {
    if providers.is_empty() {
        return Err(BriefError::NoProvidersConfigured);
    }

    let mut failures = Vec::new();

    for provider in providers {
        if !provider.is_selectable() {
            debug!(
                provider = %provider.name(),
                status = %provider.status(),
                "Skipping provider that is not selectable"
            );
            continue;
        }

        let routed = match (attachment, provider.capabilities().attachments) {
            (None, _) => None,
            (Some(attachment), AttachmentMode::Native) => Some(attachment),
            (Some(_), AttachmentMode::TextOnly) => {
                debug!(provider = %provider.name(), "Attempting without attachment");
                None
            }
            (Some(_), AttachmentMode::Unsupported) => {
                debug!(
                    provider = %provider.name(),
                    "Skipping provider without attachment support"
                );
                continue;
            }
        };

        match provider.attempt(prompt, routed).await {
            Ok(text) => {
                if !failures.is_empty() {
                    info!(
                        "Generated with provider '{}' after {} failed attempt(s)",
                        provider.name(),
                        failures.len()
                    );
                }
                return Ok((text, provider.name().to_string()));
            }
            Err(error) => {
                warn!("Provider '{}' failed: {}", provider.name(), error);
                failures.push(ProviderFailure::new(provider.name(), error));
            }
        }
    }

    Err(BriefError::AllProvidersFailed { failures })
}
