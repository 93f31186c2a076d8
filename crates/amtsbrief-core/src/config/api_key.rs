//! API key display helpers

/// Mask an API key for safe display
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 12 {
        return "*".repeat(len);
    }

    let prefix: String = chars[..8].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    let mask_len = len - 12;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}

/// Display credential state for one provider
pub fn format_api_key_status(provider: &str, credential_key: &str, key: Option<&str>) -> String {
    match key {
        Some(key) => format!(
            "✓ {} API key (from {}): {}",
            provider,
            credential_key,
            mask_api_key(key)
        ),
        None => format!("✗ {} API key missing. Set {}", provider, credential_key),
    }
}
