//! Anonymization strategy module
//!
//! Provides the replacement seam used by the detector and the engine.

pub mod pseudonym;

pub use pseudonym::ConsistentAnonymizer;

use crate::domain::Result;
use crate::pseudonymization::models::PiiCategory;

/// Trait for anonymization strategy implementations
pub trait Anonymizer: Send + Sync {
    /// Replacement for `value` of `category`, scoped to `field_context`
    fn anonymize_field(
        &self,
        category: PiiCategory,
        value: &str,
        field_context: &str,
    ) -> Result<String>;
}
