//! Credential source for the registry

use crate::config::api_key::mask_api_key;
use crate::llm::provider::Credential;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Mapping from credential key (e.g. `GEMINI_API_KEY`) to secret
#[derive(Clone, Default)]
pub struct Credentials {
    secrets: HashMap<String, Credential>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve each key through `lookup`; blank values count as absent
    pub fn from_lookup<'a, F>(keys: impl IntoIterator<Item = &'a str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut credentials = Self::new();
        for key in keys {
            if let Some(secret) = lookup(key) {
                credentials.insert(key, secret);
            }
        }
        credentials
    }

    /// Resolve keys from the process environment after loading `.env`
    pub fn from_env<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(keys, |key| std::env::var(key).ok())
    }

    /// Store a secret; blank secrets are ignored
    pub fn insert(&mut self, key: impl Into<String>, secret: impl Into<String>) {
        if let Some(credential) = Credential::new(secret) {
            self.secrets.insert(key.into(), credential);
        }
    }

    pub fn with(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.insert(key, secret);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Credential> {
        self.secrets.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.secrets.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, credential) in &self.secrets {
            map.entry(key, &mask_api_key(credential.expose()));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_absent() {
        let credentials = Credentials::from_lookup(["A_KEY", "B_KEY", "C_KEY"], |key| match key {
            "A_KEY" => Some("secret-a".to_string()),
            "B_KEY" => Some("   ".to_string()),
            _ => None,
        });

        assert!(credentials.contains("A_KEY"));
        assert!(!credentials.contains("B_KEY"));
        assert!(!credentials.contains("C_KEY"));
        assert_eq!(credentials.len(), 1);
    }

    #[test]
    fn test_debug_masks_secrets() {
        let credentials = Credentials::new().with("OPENAI_API_KEY", "sk-abcdefghijklmnopqrstuvwxyz");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("OPENAI_API_KEY"));
        assert!(!debug.contains("abcdefghijklmnopqrstuvwxyz"));
    }
}
