//! `amtsbrief providers`

use crate::console::CliConsole;
use crate::context::AppContext;
use amtsbrief_core::config::{format_api_key_status, mask_api_key};
use colored::*;
use serde_json::json;

pub fn execute(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let table = ctx.registry.table();

    if json {
        let rows: Vec<_> = table
            .iter()
            .enumerate()
            .map(|(position, spec)| {
                let credential = ctx.credentials.get(&spec.credential_key);
                json!({
                    "priority": position + 1,
                    "name": spec.name,
                    "vendor": spec.vendor,
                    "model": spec.model,
                    "attachments": spec.attachments,
                    "credential_key": spec.credential_key,
                    "credential": credential.map(|c| mask_api_key(c.expose())),
                    "loaded": ctx.registry.find(&spec.name).is_some(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let console = CliConsole::new(true);
    console.print_header("Providers (failover order)");

    for (position, spec) in table.iter().enumerate() {
        println!(
            "{} {} {} {}",
            format!("{}.", position + 1).dimmed(),
            spec.name.bold(),
            format!("{}/{}", spec.vendor, spec.model).dimmed(),
            format!("[{:?}]", spec.attachments).to_lowercase().cyan()
        );
        let secret = ctx
            .credentials
            .get(&spec.credential_key)
            .map(|credential| credential.expose());
        println!(
            "   {}",
            format_api_key_status(&spec.name, &spec.credential_key, secret)
        );
    }

    if ctx.registry.is_empty() {
        println!();
        console.warn("No provider has a credential; analyses will return a placeholder");
    }
    Ok(())
}
