//! Generate-key command implementation

use crate::config::generate_secret_key;
use clap::Args;

use super::report_failure;

/// Arguments for the generate-key command
#[derive(Args, Debug)]
pub struct GenerateKeyArgs {}

impl GenerateKeyArgs {
    /// Execute the generate-key command
    pub fn execute(&self) -> anyhow::Result<i32> {
        match generate_secret_key() {
            Ok(key) => {
                println!("{key}");
                Ok(0)
            }
            Err(e) => Ok(report_failure(&e)),
        }
    }
}
