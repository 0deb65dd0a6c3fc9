//! Logging and observability
//!
//! Structured logging through `tracing`, plus macros that keep transform
//! events uniform. Events carry counts, categories and durations only, never
//! the values being deidentified.
//!
//! # Example
//!
//! ```no_run
//! use deidentify::logging::init_logging;
//! use deidentify::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a transform
///
/// # Example
///
/// ```
/// use deidentify::log_transform_start;
///
/// log_transform_start!("matrix", 120);
/// ```
#[macro_export]
macro_rules! log_transform_start {
    ($operation:expr, $items:expr) => {
        tracing::debug!(operation = $operation, items = $items, "Starting transform");
    };
}

/// Log the completion of a transform
///
/// # Example
///
/// ```
/// use deidentify::log_transform_complete;
/// use std::time::Duration;
///
/// log_transform_complete!("text", 3, Duration::from_millis(4));
/// ```
#[macro_export]
macro_rules! log_transform_complete {
    ($operation:expr, $replaced:expr, $duration:expr) => {
        tracing::debug!(
            operation = $operation,
            replaced = $replaced,
            duration_ms = $duration.as_millis() as u64,
            "Transform completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```
/// use deidentify::log_error_with_context;
/// use deidentify::domain::DeidentifyError;
///
/// let error = DeidentifyError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
