//! Matrix command implementation
//!
//! Reads a JSON array of string rows and writes the deidentified rows back as
//! JSON. Categories not given on the command line are inferred from the data.

use crate::cli::Cli;
use crate::config::DeidentifyConfig;
use crate::domain::Result;
use crate::pseudonymization::{Deidentifier, MatrixSchema, PiiCategory};
use clap::Args;

use super::{parse_json, read_input, report_failure, EXIT_CONFIG};

/// Arguments for the matrix command
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Input JSON file (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Comma-separated category per column (name, email, phone, ssn, credit_card, address, generic)
    #[arg(long, value_delimiter = ',')]
    pub categories: Option<Vec<PiiCategory>>,

    /// Comma-separated column names used as field contexts
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,
}

impl MatrixArgs {
    /// Execute the matrix command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let config = match cli.resolve_config() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        match self.run(&config, read_input(self.input.as_deref())) {
            Ok(output) => {
                println!("{output}");
                Ok(0)
            }
            Err(e) => Ok(report_failure(&e)),
        }
    }

    fn schema(&self) -> MatrixSchema {
        MatrixSchema {
            categories: self.categories.clone(),
            names: self.names.clone(),
        }
    }

    fn run(&self, config: &DeidentifyConfig, input: Result<String>) -> Result<String> {
        let engine = Deidentifier::from_config(config)?;
        let rows: Vec<Vec<String>> = parse_json(&input?)?;

        tracing::info!(
            rows = rows.len(),
            explicit_categories = self.categories.is_some(),
            "Deidentifying matrix"
        );

        let output = engine.matrix(&rows, &self.schema())?;
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
