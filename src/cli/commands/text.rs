//! Text command implementation
//!
//! Deidentifies free text read from a file or stdin. With `--dry-run` only a
//! detection report is printed; the text itself is never echoed. Dry runs do
//! not need a secret key.

use crate::cli::Cli;
use crate::config::DeidentifyConfig;
use crate::domain::{DeidentifyError, Result};
use crate::pseudonymization::detector::{regex::RegexDetector, PiiDetector};
use crate::pseudonymization::{DetectionReport, Deidentifier};
use clap::Args;
use std::fs::File;
use std::io;

use super::{read_input, report_failure, EXIT_CONFIG};

/// Arguments for the text command
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Input file (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Print a detection report instead of the deidentified text
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the dry-run report as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

impl TextArgs {
    /// Execute the text command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!(input = ?self.input, dry_run = self.dry_run, "Deidentifying text");

        let result = if self.dry_run {
            self.detection_report()
        } else {
            let config = match cli.resolve_config() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(EXIT_CONFIG);
                }
            };
            self.deidentify(&config)
        };

        match result {
            Ok(output) => {
                print!("{output}");
                Ok(0)
            }
            Err(e) => Ok(report_failure(&e)),
        }
    }

    fn deidentify(&self, config: &DeidentifyConfig) -> Result<String> {
        let engine = Deidentifier::from_config(config)?;
        match self.input.as_deref() {
            Some(path) => {
                let file = File::open(path)
                    .map_err(|e| DeidentifyError::Input(format!("Failed to read {path}: {e}")))?;
                engine.text_from_reader(file)
            }
            None => engine.text_from_reader(io::stdin().lock()),
        }
    }

    fn detection_report(&self) -> Result<String> {
        let input = read_input(self.input.as_deref())?;
        let detector = RegexDetector::new()?;
        let report = DetectionReport::from_matches(&detector.detect(&input));

        if self.json {
            return Ok(format!("{}\n", report.format_json()?));
        }
        Ok(report.format_console())
    }
}
