//! `amtsbrief validate-key`

use crate::console::CliConsole;
use crate::context::AppContext;
use amtsbrief_core::analysis::validate_user_key;
use amtsbrief_core::config::mask_api_key;
use serde_json::json;

pub async fn execute(
    ctx: &AppContext,
    vendor: &str,
    model: &str,
    key: &str,
    json: bool,
) -> anyhow::Result<()> {
    let console = CliConsole::new(!json);
    let provider = ctx.registry.build_user_provider(vendor, model, key)?;
    let result = validate_user_key(&provider).await;

    if json {
        let body = json!({
            "provider": provider.name(),
            "model": model,
            "key": mask_api_key(key),
            "valid": result.is_ok(),
            "error": result.as_ref().err().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    }

    match result {
        Ok(()) => {
            if !json {
                console.success(&format!(
                    "{} key {} works with {}",
                    provider.name(),
                    mask_api_key(key),
                    model
                ));
            }
            Ok(())
        }
        Err(err) => {
            if !json {
                console.error(&format!("Invalid API key: {}", err));
            }
            Err(anyhow::anyhow!("API key validation failed"))
        }
    }
}
