//! Result type alias for deidentify
//!
//! This module provides a convenient Result type alias that uses
//! `DeidentifyError` as the error type.

use super::errors::DeidentifyError;

/// Result type alias for deidentify operations
///
/// # Examples
///
/// ```
/// use deidentify::domain::result::Result;
/// use deidentify::domain::errors::DeidentifyError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DeidentifyError::BadParameter("unknown category".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DeidentifyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DeidentifyError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(DeidentifyError::Input("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
