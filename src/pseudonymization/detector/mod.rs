//! PII detection module
//!
//! Provides the trait-based detection interface and the regex detector that
//! resolves overlapping candidates into a single set of spans.

pub mod patterns;
pub mod regex;

use crate::pseudonymization::anonymizer::Anonymizer;
use crate::pseudonymization::models::{PiiMatch, Replacement, ReplacementOutcome, TextOutcome};

/// Trait for PII detection implementations
pub trait PiiDetector: Send + Sync {
    /// Detect PII in free text
    ///
    /// Returned matches never overlap and are ordered by start offset.
    fn detect(&self, text: &str) -> Vec<PiiMatch>;

    /// Detect PII and replace every match in a single left-to-right pass
    ///
    /// A failed replacement writes the category's sentinel marker into the
    /// text and is recorded as [`ReplacementOutcome::Failed`]; the remaining
    /// matches are still processed.
    fn redact(&self, text: &str, anonymizer: &dyn Anonymizer) -> TextOutcome {
        let matches = self.detect(text);
        if matches.is_empty() {
            return TextOutcome::unchanged(text);
        }

        let mut output = String::with_capacity(text.len());
        let mut replacements = Vec::with_capacity(matches.len());
        let mut cursor = 0;

        for m in matches {
            output.push_str(&text[cursor..m.start]);

            let outcome =
                match anonymizer.anonymize_field(m.category, &m.value, m.category.field_context()) {
                    Ok(replacement) => {
                        output.push_str(&replacement);
                        ReplacementOutcome::Replaced(replacement)
                    }
                    Err(e) => {
                        tracing::warn!(
                            category = %m.category.label(),
                            start = m.start,
                            end = m.end,
                            "Replacement failed, writing sentinel"
                        );
                        output.push_str(m.category.sentinel());
                        ReplacementOutcome::Failed(e.to_string())
                    }
                };

            replacements.push(Replacement {
                category: m.category,
                rule: m.rule,
                start: m.start,
                end: m.end,
                outcome,
            });
            cursor = m.end;
        }

        output.push_str(&text[cursor..]);

        TextOutcome {
            text: output,
            replacements,
        }
    }
}
