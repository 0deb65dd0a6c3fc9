//! Consistency store for referential integrity
//!
//! Maps `field context -> (original -> replacement)` behind a single
//! reader/writer lock. Lookups share the read lock; the write lock is held
//! only for the insertion itself, never while a replacement is generated.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Thread-safe two-level replacement cache
#[derive(Debug, Default)]
pub struct ConsistencyStore {
    mappings: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl ConsistencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached replacement for `original` under `context`
    pub fn get(&self, context: &str, original: &str) -> Option<String> {
        self.mappings
            .read()
            .get(context)
            .and_then(|entries| entries.get(original))
            .cloned()
    }

    /// Insert a replacement unless one is already stored
    ///
    /// Returns the value that ends up stored, so concurrent first-time
    /// writers all observe the same winner.
    pub fn insert(&self, context: &str, original: &str, replacement: String) -> String {
        let mut mappings = self.mappings.write();
        mappings
            .entry(context.to_string())
            .or_default()
            .entry(original.to_string())
            .or_insert(replacement)
            .clone()
    }

    /// Lookup-before-generate: `generate` runs outside the lock on a miss
    pub fn get_or_insert_with<F>(&self, context: &str, original: &str, generate: F) -> String
    where
        F: FnOnce() -> String,
    {
        if let Some(existing) = self.get(context, original) {
            return existing;
        }
        let replacement = generate();
        self.insert(context, original, replacement)
    }

    /// Drop every context and mapping
    pub fn clear(&self) {
        self.mappings.write().clear();
    }

    /// Total number of stored mappings across all contexts
    pub fn len(&self) -> usize {
        self.mappings.read().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of field contexts with at least one mapping
    pub fn context_count(&self) -> usize {
        self.mappings.read().len()
    }
}
