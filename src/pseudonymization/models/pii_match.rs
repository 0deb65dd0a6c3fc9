//! Detection and replacement data models

use super::PiiCategory;
use crate::domain::{DeidentifyError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Pattern rule that produced a match
///
/// Declaration order is the resolution precedence used by the detector:
/// when two candidate spans overlap, the one from the earlier rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    Email,
    Phone,
    Ssn,
    CreditCard,
    /// Address introduced by a phrase such as "lives at"
    ContextAddress,
    /// Street followed directly by a country
    CountryAddress,
    /// Street, city and country
    CityCountryAddress,
    /// Address introduced by a label such as "HQ:"
    LabeledAddress,
    Name,
    /// House number + street type with optional city/country
    StandardAddress,
}

impl MatchRule {
    /// All rules in precedence order
    pub const PRECEDENCE: [MatchRule; 10] = [
        Self::Email,
        Self::Phone,
        Self::Ssn,
        Self::CreditCard,
        Self::ContextAddress,
        Self::CountryAddress,
        Self::CityCountryAddress,
        Self::LabeledAddress,
        Self::Name,
        Self::StandardAddress,
    ];

    /// Category of the values this rule matches
    pub fn category(&self) -> PiiCategory {
        match self {
            Self::Email => PiiCategory::Email,
            Self::Phone => PiiCategory::Phone,
            Self::Ssn => PiiCategory::Ssn,
            Self::CreditCard => PiiCategory::CreditCard,
            Self::Name => PiiCategory::Name,
            Self::ContextAddress
            | Self::CountryAddress
            | Self::CityCountryAddress
            | Self::LabeledAddress
            | Self::StandardAddress => PiiCategory::Address,
        }
    }
}

/// A resolved PII span in a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiMatch {
    /// Rule that produced the match
    pub rule: MatchRule,
    /// Category of PII
    pub category: PiiCategory,
    /// Byte offset where the span starts
    pub start: usize,
    /// Byte offset one past the end of the span
    pub end: usize,
    /// Matched text
    pub value: String,
}

impl PiiMatch {
    /// Create a match for `rule` covering `span` of `text`
    pub fn new(rule: MatchRule, text: &str, span: Range<usize>) -> Self {
        Self {
            rule,
            category: rule.category(),
            value: text[span.clone()].to_string(),
            start: span.start,
            end: span.end,
        }
    }

    /// Byte range of the match
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the two spans share at least one byte
    pub fn overlaps(&self, other: &PiiMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Result of replacing one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum ReplacementOutcome {
    /// The span was replaced with this synthetic value
    Replaced(String),
    /// Replacement failed; the sentinel marker was written instead
    Failed(String),
}

/// One replacement performed during a text pass
///
/// The original value is deliberately not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub category: PiiCategory,
    pub rule: MatchRule,
    /// Span in the original text
    pub start: usize,
    pub end: usize,
    pub outcome: ReplacementOutcome,
}

impl Replacement {
    /// Whether the replacement failed
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, ReplacementOutcome::Failed(_))
    }
}

/// Rewritten text together with the outcome of every replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOutcome {
    /// Rewritten text (failed spans carry their category's sentinel)
    pub text: String,
    /// Replacements in left-to-right order
    pub replacements: Vec<Replacement>,
}

impl TextOutcome {
    /// Outcome for text that contained nothing to replace
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            replacements: Vec::new(),
        }
    }

    /// Failed replacements
    pub fn failures(&self) -> impl Iterator<Item = &Replacement> {
        self.replacements.iter().filter(|r| r.is_failure())
    }

    /// Whether any replacement failed
    pub fn has_failures(&self) -> bool {
        self.replacements.iter().any(Replacement::is_failure)
    }

    /// Return the text, or the first failure as an error
    pub fn into_strict(self) -> Result<String> {
        if let Some(failed) = self.replacements.iter().find(|r| r.is_failure()) {
            let reason = match &failed.outcome {
                ReplacementOutcome::Failed(reason) => reason.clone(),
                ReplacementOutcome::Replaced(_) => String::new(),
            };
            return Err(DeidentifyError::Redaction {
                category: failed.category.label().to_string(),
                reason,
            });
        }
        Ok(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_matches_ordering() {
        let mut sorted = MatchRule::PRECEDENCE;
        sorted.sort();
        assert_eq!(sorted, MatchRule::PRECEDENCE);
        assert!(MatchRule::LabeledAddress < MatchRule::Name);
        assert!(MatchRule::Name < MatchRule::StandardAddress);
    }

    #[test]
    fn test_match_span_and_overlap() {
        let text = "Jane Doe jane@example.com";
        let name = PiiMatch::new(MatchRule::Name, text, 0..8);
        let email = PiiMatch::new(MatchRule::Email, text, 9..25);
        assert_eq!(name.value, "Jane Doe");
        assert_eq!(email.category, PiiCategory::Email);
        assert!(!name.overlaps(&email));

        let wide = PiiMatch::new(MatchRule::StandardAddress, text, 5..12);
        assert!(wide.overlaps(&name));
        assert!(wide.overlaps(&email));
    }

    #[test]
    fn test_into_strict_surfaces_first_failure() {
        let outcome = TextOutcome {
            text: "[SSN REDACTION ERROR]".to_string(),
            replacements: vec![Replacement {
                category: PiiCategory::Ssn,
                rule: MatchRule::Ssn,
                start: 0,
                end: 11,
                outcome: ReplacementOutcome::Failed("generator unavailable".to_string()),
            }],
        };
        assert!(outcome.has_failures());
        assert_eq!(outcome.failures().count(), 1);

        let err = outcome.into_strict().unwrap_err();
        assert!(matches!(err, DeidentifyError::Redaction { ref category, .. } if category == "SSN"));
    }

    #[test]
    fn test_into_strict_passes_clean_text() {
        let outcome = TextOutcome::unchanged("nothing here");
        assert_eq!(outcome.into_strict().unwrap(), "nothing here");
    }
}
