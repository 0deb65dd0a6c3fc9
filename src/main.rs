// deidentify - Deterministic PII pseudonymization
// Copyright (c) 2025 Deidentify Contributors
// Licensed under the MIT License

use clap::Parser;
use deidentify::cli::Cli;
use deidentify::config::LoggingConfig;
use deidentify::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; load
    // errors are reported by the command itself
    let mut logging_config = cli
        .resolve_config()
        .map(|config| config.logging)
        .unwrap_or_else(|_| LoggingConfig::default());
    if let Some(level) = &cli.log_level {
        logging_config.level = level.to_lowercase();
    }
    let log_level = logging_config.level.clone();
    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "deidentify starting");

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    drop(_guard);
    process::exit(exit_code);
}
