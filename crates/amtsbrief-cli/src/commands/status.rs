//! `amtsbrief status`

use crate::console::CliConsole;
use crate::context::AppContext;
use amtsbrief_core::ProviderStatus;
use colored::*;

pub fn execute(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let report = ctx.orchestrator.status_snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let console = CliConsole::new(true);
    console.print_header("Provider Status");

    if report.providers.is_empty() {
        console.warn("No providers configured; analyses will return a placeholder");
        return Ok(());
    }

    // BTreeMap is name-sorted; show failover order instead
    for provider in ctx.registry.providers().iter() {
        let Some(snapshot) = report.providers.get(provider.name()) else {
            continue;
        };

        let status = match snapshot.status {
            ProviderStatus::Active => snapshot.status.to_string().green(),
            ProviderStatus::RateLimited => snapshot.status.to_string().yellow(),
            ProviderStatus::Error => snapshot.status.to_string().red(),
            ProviderStatus::Inactive => snapshot.status.to_string().dimmed(),
        };
        let eligible = if snapshot.eligible_now {
            "eligible".green()
        } else {
            "skipped".dimmed()
        };

        println!(
            "  {} {} [{}] {} requests={} errors={}",
            snapshot.name.bold(),
            format!("({})", snapshot.model).dimmed(),
            status,
            eligible,
            snapshot.request_count,
            snapshot.error_count
        );
        if let Some(error) = &snapshot.last_error {
            println!("    {} {}", "→".dimmed(), error.dimmed());
        }
    }

    println!();
    println!(
        "{} of {} provider(s) active",
        report.active_providers, report.total_providers
    );
    Ok(())
}
