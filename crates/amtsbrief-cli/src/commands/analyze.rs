//! `amtsbrief analyze`

use crate::console::CliConsole;
use crate::context::AppContext;
use amtsbrief_core::analysis::{LetterAnalysis, UrgencyLevel};
use anyhow::Context;
use colored::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::io::AsyncReadExt;

/// Personal key supplied on the command line
pub struct UserKey {
    pub vendor: String,
    pub model: String,
    pub key: String,
}

/// The file being analyzed. Stdin input is spooled into a temporary file
/// that is removed when this value is dropped, on success and error alike.
enum InputFile {
    Path(PathBuf),
    Spooled(NamedTempFile),
}

impl InputFile {
    async fn resolve(file: &str) -> anyhow::Result<Self> {
        if file != "-" {
            return Ok(Self::Path(PathBuf::from(file)));
        }

        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .context("Failed to read letter from stdin")?;
        anyhow::ensure!(!bytes.is_empty(), "No input received on stdin");

        let mut temp = tempfile::Builder::new()
            .prefix("amtsbrief-")
            .tempfile()
            .context("Failed to create temporary file")?;
        temp.write_all(&bytes)
            .and_then(|_| temp.flush())
            .context("Failed to spool stdin")?;
        Ok(Self::Spooled(temp))
    }

    fn path(&self) -> &Path {
        match self {
            Self::Path(path) => path,
            Self::Spooled(temp) => temp.path(),
        }
    }
}

pub async fn execute(
    ctx: &AppContext,
    file: &str,
    language: &str,
    user: Option<UserKey>,
    json: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let console = CliConsole::new(verbose && !json);
    let input = InputFile::resolve(file).await?;
    let analyzer = ctx.analyzer();

    let analysis = match user {
        Some(user) => {
            let provider = ctx
                .registry
                .build_user_provider(&user.vendor, &user.model, &user.key)?;
            console.info(&format!("Using personal {} key", provider.name()));
            analyzer
                .analyze_with_user_key(input.path(), language, provider)
                .await?
        }
        None => {
            console.info(&format!(
                "Using {} system provider(s)",
                ctx.registry.len()
            ));
            analyzer.analyze(input.path(), language).await?
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&console, &analysis);
    }
    Ok(())
}

fn print_analysis(console: &CliConsole, analysis: &LetterAnalysis) {
    if analysis.degraded {
        console.warn("No AI provider produced this analysis; showing a placeholder");
    }

    console.print_header(&analysis.summary);
    console.print_field("File", &analysis.file_name);
    console.print_field("Type", &analysis.file_type);
    console.print_field("Language", &analysis.analysis_language);
    console.print_field("Provider", &analysis.llm_provider);
    console.print_field("Sender", &analysis.analysis.sender);
    console.print_field("Letter type", &analysis.analysis.letter_type);

    let urgency = analysis.urgency_level.to_string();
    let urgency = match analysis.urgency_level {
        UrgencyLevel::High => urgency.red().bold(),
        UrgencyLevel::Medium => urgency.yellow(),
        UrgencyLevel::Low => urgency.green(),
    };
    console.print_field("Urgency", &urgency.to_string());

    println!();
    println!("{}", "Actions".bold());
    for action in &analysis.actions_needed {
        println!("  • {}", action);
    }

    println!();
    println!("{}", "Analysis".bold());
    println!("{}", analysis.analysis.full_analysis);

    println!();
    println!("{}", "Response template".bold());
    println!("{}", analysis.response_template.dimmed());
}
