//! Consistent pseudonymization strategy - keyed generation behind the consistency store

use super::Anonymizer;
use crate::domain::Result;
use crate::pseudonymization::generator::Generator;
use crate::pseudonymization::models::PiiCategory;
use crate::pseudonymization::store::ConsistencyStore;
use std::sync::Arc;

/// Replaces values with keyed synthetic ones, reusing earlier replacements
#[derive(Debug, Clone)]
pub struct ConsistentAnonymizer {
    generator: Arc<Generator>,
    store: Arc<ConsistencyStore>,
}

impl ConsistentAnonymizer {
    pub fn new(generator: Arc<Generator>, store: Arc<ConsistencyStore>) -> Self {
        Self { generator, store }
    }

    pub fn store(&self) -> &Arc<ConsistencyStore> {
        &self.store
    }
}

impl Anonymizer for ConsistentAnonymizer {
    fn anonymize_field(
        &self,
        category: PiiCategory,
        value: &str,
        field_context: &str,
    ) -> Result<String> {
        // Empty values pass through and are never cached
        if value.is_empty() {
            return Ok(String::new());
        }

        Ok(self
            .store
            .get_or_insert_with(field_context, value, || {
                self.generator.generate(value, category)
            }))
    }
}
