use super::*;
use crate::error::BriefError;
use crate::llm::health::ProviderStatus;
use crate::llm::provider_types::{AttachmentMode, ProviderSpec, Vendor};
use crate::llm::providers::{LlmBackend, MockBackendFactory};
use crate::llm::testing::ScriptedBackend;
use std::sync::Arc;

fn scripted_factory() -> Arc<MockBackendFactory> {
    let mut factory = MockBackendFactory::new();
    factory
        .expect_build()
        .returning(|_, _| ScriptedBackend::succeeding("ok") as Arc<dyn LlmBackend>);
    Arc::new(factory)
}

fn names(registry: &ProviderRegistry) -> Vec<String> {
    registry
        .providers()
        .iter()
        .map(|p| p.name().to_string())
        .collect()
}

#[test]
fn test_build_includes_only_credentialed_providers_in_order() {
    let credentials = Credentials::new()
        .with("OPENROUTER_API_KEY", "or-key")
        .with("GEMINI_API_KEY", "gm-key")
        .with("ANTHROPIC_API_KEY", "");

    let registry = ProviderRegistry::build(scripted_factory(), &credentials);

    assert_eq!(names(&registry), vec!["Gemini", "OpenRouter"]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_build_with_no_credentials_is_empty() {
    let registry = ProviderRegistry::build(scripted_factory(), &Credentials::new());

    assert!(registry.is_empty());
    assert!(registry.providers().is_empty());
}

#[test]
fn test_factory_receives_secret() {
    let mut factory = MockBackendFactory::new();
    factory
        .expect_build()
        .withf(|identity, secret| identity.vendor == Vendor::OpenAi && secret == "sk-live")
        .times(1)
        .returning(|_, _| ScriptedBackend::succeeding("ok") as Arc<dyn LlmBackend>);

    let credentials = Credentials::new().with("OPENAI_API_KEY", "sk-live");
    let registry = ProviderRegistry::build(Arc::new(factory), &credentials);

    assert_eq!(names(&registry), vec!["OpenAI"]);
}

#[test]
fn test_reload_swaps_list_without_touching_snapshots() {
    let registry = ProviderRegistry::build(
        scripted_factory(),
        &Credentials::new().with("GEMINI_API_KEY", "gm-key"),
    );
    let before = registry.providers();

    let count = registry.reload(
        &Credentials::new()
            .with("OPENAI_API_KEY", "sk-key")
            .with("ANTHROPIC_API_KEY", "an-key"),
    );

    assert_eq!(count, 2);
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].name(), "Gemini");
    assert_eq!(names(&registry), vec!["OpenAI", "Anthropic"]);
}

#[tokio::test]
async fn test_reload_starts_with_fresh_health() {
    let registry = ProviderRegistry::build(
        scripted_factory(),
        &Credentials::new().with("GEMINI_API_KEY", "gm-key"),
    );
    let gemini = registry.find("Gemini").unwrap();
    gemini.attempt("hi", None).await.unwrap();
    assert_eq!(gemini.snapshot().request_count, 1);

    registry.reload(&Credentials::new().with("GEMINI_API_KEY", "gm-key"));

    assert_eq!(registry.find("Gemini").unwrap().snapshot().request_count, 0);
}

#[test]
fn test_custom_table() {
    let table = vec![ProviderSpec::new(
        "Local",
        Vendor::OpenAi,
        "llama3",
        "LOCAL_KEY",
        AttachmentMode::Unsupported,
    )];
    let registry = ProviderRegistry::builder(scripted_factory())
        .table(table)
        .build(&Credentials::new().with("LOCAL_KEY", "x"));

    let local = registry.find("Local").unwrap();
    assert_eq!(local.capabilities().attachments, AttachmentMode::Unsupported);
    assert_eq!(registry.credential_keys().collect::<Vec<_>>(), vec!["LOCAL_KEY"]);
}

#[test]
fn test_user_provider_is_fresh_and_not_shared() {
    let registry = ProviderRegistry::build(scripted_factory(), &Credentials::new());

    let provider = registry
        .build_user_provider("gemini", "gemini-1.5-pro", "user-key")
        .unwrap();

    assert_eq!(provider.name(), "Gemini");
    assert_eq!(provider.identity().model, "gemini-1.5-pro");
    assert_eq!(provider.status(), ProviderStatus::Active);
    assert!(provider.capabilities().supports_attachments());
    assert!(registry.is_empty());
}

#[test]
fn test_user_provider_rejects_empty_secret() {
    let registry = ProviderRegistry::build(scripted_factory(), &Credentials::new());

    let err = registry
        .build_user_provider("openai", "gpt-4o-mini", "  ")
        .unwrap_err();

    assert!(matches!(err, BriefError::CredentialMissing { .. }));
}

#[test]
fn test_user_provider_rejects_unknown_vendor() {
    let registry = ProviderRegistry::build(scripted_factory(), &Credentials::new());

    let err = registry
        .build_user_provider("mistral", "large", "key")
        .unwrap_err();

    assert!(matches!(err, BriefError::InvalidInput { .. }));
}
