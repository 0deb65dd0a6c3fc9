//! Domain error types for deidentify.
//!
//! All fallible library operations return [`Result<T, DeidentifyError>`]:
//!
//! ```rust
//! use deidentify::domain::{DeidentifyError, Result};
//!
//! fn check_width(columns: usize, categories: usize) -> Result<()> {
//!     if columns != categories {
//!         return Err(DeidentifyError::SchemaMismatch { columns, categories, names: columns });
//!     }
//!     Ok(())
//! }
//! # assert!(check_width(2, 1).is_err());
//! ```

pub mod errors;
pub mod result;

pub use errors::DeidentifyError;
pub use result::Result;
