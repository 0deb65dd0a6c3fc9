//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the deidentify configuration file.

use crate::cli::Cli;
use clap::Args;

use super::EXIT_CONFIG;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Also require a secret key to be configured
    #[arg(long)]
    pub require_key: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let source = cli.config.as_deref().unwrap_or("<environment>");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("Validating configuration: {source}");
        println!();

        // Loading validates as well
        let config = match cli.resolve_config() {
            Ok(c) => {
                println!("Configuration is valid");
                c
            }
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let key_configured = config.engine.secret_key.is_some();

        println!();
        println!("Configuration Summary:");
        println!(
            "  Secret Key: {}",
            if key_configured { "configured" } else { "not configured" }
        );
        println!("  Inference Sample Rows: {}", config.inference.sample_rows);
        println!(
            "  Name Threshold: {}%",
            config.inference.name_threshold_pct
        );
        println!(
            "  Default Threshold: {}%",
            config.inference.default_threshold_pct
        );
        println!("  Log Level: {}", config.logging.level);
        if config.logging.local_enabled {
            println!(
                "  Log Files: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();

        if self.require_key && !key_configured {
            println!("No secret key configured (engine.secret_key or DEIDENTIFY_SECRET_KEY)");
            return Ok(EXIT_CONFIG);
        }
        Ok(0)
    }
}
