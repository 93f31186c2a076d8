//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_VENDOR: &str = "gemini";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Parser)]
#[command(name = "amtsbrief")]
#[command(about = "Analyze official letters with automatic LLM provider failover")]
#[command(
    long_about = r#"Analyze official letters with automatic LLM provider failover

USAGE:
  amtsbrief analyze letter.jpg            # Analyze with system providers
  amtsbrief analyze - < letter.pdf        # Read the letter from stdin
  amtsbrief analyze letter.jpg --user-key KEY
  amtsbrief status                        # Provider health
  amtsbrief providers                     # Declared providers and credentials
  amtsbrief validate-key --key KEY        # Probe a personal API key

Provider keys are read from GEMINI_API_KEY, OPENAI_API_KEY,
ANTHROPIC_API_KEY and OPENROUTER_API_KEY (a .env file is honored)."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./amtsbrief.toml when present)
    #[arg(long, global = true, env = "AMTSBRIEF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output and debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Analyze a letter (image or document)
    Analyze {
        /// File to analyze, or `-` to read from stdin
        file: String,

        /// Language of the analysis
        #[arg(long, short, default_value = "en")]
        language: String,

        /// Use a personal API key instead of the system providers
        #[arg(long, env = "AMTSBRIEF_USER_KEY", hide_env_values = true)]
        user_key: Option<String>,

        /// Vendor of the personal key
        #[arg(long, default_value = DEFAULT_VENDOR)]
        vendor: String,

        /// Model used with the personal key
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
    },

    /// Show provider health
    Status,

    /// Probe a personal API key with a trivial prompt
    ValidateKey {
        #[arg(long, default_value = DEFAULT_VENDOR)]
        vendor: String,

        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// The key to check
        #[arg(long, env = "AMTSBRIEF_USER_KEY", hide_env_values = true)]
        key: String,
    },

    /// List declared providers and whether their credential is set
    Providers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["amtsbrief", "analyze", "brief.png"]);
        match cli.command {
            Commands::Analyze {
                file,
                language,
                vendor,
                model,
                ..
            } => {
                assert_eq!(file, "brief.png");
                assert_eq!(language, "en");
                assert_eq!(vendor, "gemini");
                assert_eq!(model, "gemini-1.5-flash");
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["amtsbrief", "status", "--json", "-v"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status));
    }
}
