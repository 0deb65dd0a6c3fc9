//! Table command implementation
//!
//! Reads `{"columns": [{"name", "category", "values"}]}` JSON and writes the
//! deidentified table in the same shape. `null` values stay `null`.

use crate::cli::Cli;
use crate::config::DeidentifyConfig;
use crate::domain::Result;
use crate::pseudonymization::{Deidentifier, Table};
use clap::Args;

use super::{parse_json, read_input, report_failure, EXIT_CONFIG};

/// Arguments for the table command
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Input JSON file (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,
}

impl TableArgs {
    /// Execute the table command
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

    fn run(&self, config: &DeidentifyConfig, input: Result<String>) -> Result<String> {
        let engine = Deidentifier::from_config(config)?;
        let table: Table = parse_json(&input?)?;

        tracing::info!(columns = table.columns.len(), "Deidentifying table");

        let output = engine.table(&table)?;
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{exit_code, EXIT_INPUT};
    use crate::config::secret_key;
    use serde_json::Value;

    fn keyed_config() -> DeidentifyConfig {
        let mut config = DeidentifyConfig::default();
        config.engine.secret_key = Some(secret_key("table-key"));
        config
    }

    #[test]
    fn test_table_preserves_nulls() {
        let input = r#"{"columns":[{"name":"ssn","category":"ssn","values":["123-45-6789",null]}]}"#;
        let out = TableArgs { input: None }
            .run(&keyed_config(), Ok(input.to_string()))
            .unwrap();
        let table: Table = serde_json::from_str(&out).unwrap();
        let values = &table.columns[0].values;
        assert_eq!(values.len(), 2);
        assert!(matches!(&values[0], Value::String(s) if s != "123-45-6789" && s.len() == 11));
        assert_eq!(values[1], Value::Null);
    }

    #[test]
    fn test_table_rejects_object_cells() {
        let input = r#"{"columns":[{"name":"x","category":"generic","values":[{"a":1}]}]}"#;
        let err = TableArgs { input: None }
            .run(&keyed_config(), Ok(input.to_string()))
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INPUT);
    }
}
