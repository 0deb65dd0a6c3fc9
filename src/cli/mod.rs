//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for deidentify using clap.

pub mod commands;

use crate::config::{config_from_env, load_config, secret_key, DeidentifyConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// deidentify - Deterministic PII pseudonymization
#[derive(Parser, Debug)]
#[command(name = "deidentify")]
#[command(version, about, long_about = None)]
#[command(author = "Deidentify Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults and environment only when omitted)
    #[arg(short, long, env = "DEIDENTIFY_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DEIDENTIFY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Secret key for the keyed hash; overrides the configuration file
    #[arg(long, env = "DEIDENTIFY_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a freshly generated secret key
    GenerateKey(commands::generate_key::GenerateKeyArgs),

    /// Deidentify free text
    Text(commands::text::TextArgs),

    /// Deidentify a JSON array of string rows
    Matrix(commands::matrix::MatrixArgs),

    /// Deidentify a JSON table of typed columns
    Table(commands::table::TableArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

impl Cli {
    /// Load the configuration and apply the `--secret-key` override
    pub fn resolve_config(&self) -> Result<DeidentifyConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => config_from_env()?,
        };
        if let Some(key) = &self.secret_key {
            config.engine.secret_key = Some(secret_key(key.as_str()));
        }
        Ok(config)
    }

    /// Execute the selected command, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::GenerateKey(args) => args.execute(),
            Commands::Text(args) => args.execute(self),
            Commands::Matrix(args) => args.execute(self),
            Commands::Table(args) => args.execute(self),
            Commands::ValidateConfig(args) => args.execute(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseudonymization::PiiCategory;

    #[test]
    fn test_cli_parse_generate_key() {
        let cli = Cli::parse_from(["deidentify", "generate-key"]);
        assert!(matches!(cli.command, Commands::GenerateKey(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["deidentify", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["deidentify", "--log-level", "debug", "generate-key"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_text() {
        let cli = Cli::parse_from(["deidentify", "text", "--input", "notes.txt", "--dry-run"]);
        match cli.command {
            Commands::Text(args) => {
                assert_eq!(args.input.as_deref(), Some("notes.txt"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_matrix_schema() {
        let cli = Cli::parse_from([
            "deidentify",
            "matrix",
            "--categories",
            "name,email",
            "--names",
            "full_name,contact",
        ]);
        match cli.command {
            Commands::Matrix(args) => {
                assert_eq!(
                    args.categories,
                    Some(vec![PiiCategory::Name, PiiCategory::Email])
                );
                assert_eq!(
                    args.names,
                    Some(vec!["full_name".to_string(), "contact".to_string()])
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        let result = Cli::try_parse_from(["deidentify", "matrix", "--categories", "passport"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_secret_key_flag_overrides_config() {
        let cli = Cli::parse_from(["deidentify", "--secret-key", "flag-key", "table"]);
        let config = cli.resolve_config().unwrap();
        assert!(config.engine.secret_key.is_some());
    }
}
