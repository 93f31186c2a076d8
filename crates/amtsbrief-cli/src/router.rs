//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use crate::context::AppContext;
use crate::logging;

/// Load configuration, install logging and dispatch the subcommand
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let config = AppContext::load_config(cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose);
    let ctx = AppContext::build(config)?;

    match cli.command {
        Commands::Analyze {
            file,
            language,
            user_key,
            vendor,
            model,
        } => {
            let user = user_key.map(|key| commands::analyze::UserKey { vendor, model, key });
            commands::analyze::execute(&ctx, &file, &language, user, cli.json, cli.verbose).await
        }
        Commands::Status => commands::status::execute(&ctx, cli.json),
        Commands::ValidateKey { vendor, model, key } => {
            commands::validate_key::execute(&ctx, &vendor, &model, &key, cli.json).await
        }
        Commands::Providers => commands::providers::execute(&ctx, cli.json),
    }
}
