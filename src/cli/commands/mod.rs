//! CLI command implementations
//!
//! Commands print their results to stdout and diagnostics to stderr. Exit
//! codes: 0 success, 2 configuration error, 3 invalid input, 5 fatal error.

pub mod generate_key;
pub mod matrix;
pub mod table;
pub mod text;
pub mod validate;

use crate::domain::{DeidentifyError, Result};
use std::fs;
use std::io::{self, Read};

/// Configuration error exit code
pub const EXIT_CONFIG: i32 = 2;

/// Invalid input exit code
pub const EXIT_INPUT: i32 = 3;

/// Fatal error exit code
pub const EXIT_FATAL: i32 = 5;

/// Map a library error onto a process exit code
pub fn exit_code(error: &DeidentifyError) -> i32 {
    match error {
        DeidentifyError::Configuration(_) => EXIT_CONFIG,
        e if e.is_input_error() => EXIT_INPUT,
        _ => EXIT_FATAL,
    }
}

/// Read the whole input from `path`, or from stdin when no path is given
pub(crate) fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| DeidentifyError::Input(format!("Failed to read {path}: {e}"))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| DeidentifyError::Input(format!("Failed to read stdin: {e}")))?;
            Ok(buf)
        }
    }
}

/// Parse JSON input, reporting syntax errors as invalid input
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| DeidentifyError::Input(format!("Invalid JSON input: {e}")))
}

/// Print `error` and return its exit code
pub(crate) fn report_failure(error: &DeidentifyError) -> i32 {
    crate::log_error_with_context!(error, "Command failed");
    eprintln!("Error: {error}");
    exit_code(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&DeidentifyError::Configuration("x".into())), EXIT_CONFIG);
        assert_eq!(
            exit_code(&DeidentifyError::SchemaMismatch {
                columns: 2,
                categories: 1,
                names: 2
            }),
            EXIT_INPUT
        );
        assert_eq!(exit_code(&DeidentifyError::Io("x".into())), EXIT_FATAL);
    }

    #[test]
    fn test_report_failure_returns_exit_code() {
        assert_eq!(report_failure(&DeidentifyError::Input("bad".into())), EXIT_INPUT);
        assert_eq!(
            report_failure(&DeidentifyError::Configuration("bad".into())),
            EXIT_CONFIG
        );
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(read_input(Some(&path)).unwrap(), "hello");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some("/nonexistent/input.txt")).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INPUT);
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        let err = parse_json::<Vec<Vec<String>>>("[[1,").unwrap_err();
        assert!(matches!(err, DeidentifyError::Input(_)));
    }
}
