//! Amtsbrief command-line interface
//!
//! Thin caller around `amtsbrief-core`: analyzes a letter through the
//! configured LLM providers and exposes the provider status.
//!
//! ```bash
//! amtsbrief analyze bescheid.jpg --language de
//! cat bescheid.pdf | amtsbrief analyze - --json
//! amtsbrief status
//! ```

mod args;
mod commands;
mod console;
mod context;
mod logging;
mod router;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    router::route(cli).await
}
