//! Regex-based PII detector

use super::{patterns::PatternCatalog, PiiDetector};
use crate::domain::Result;
use crate::pseudonymization::models::{MatchRule, PiiCategory, PiiMatch};
use std::sync::Arc;

/// Regex-based PII detector
///
/// Runs every catalog rule over the original text, drops candidates that fail
/// their validity checks and keeps the highest-precedence span wherever
/// candidates overlap. An address that runs into a kept span is cut back to
/// its house number and street rather than dropped.
#[derive(Debug, Clone)]
pub struct RegexDetector {
    catalog: Arc<PatternCatalog>,
}

impl RegexDetector {
    /// Create a new regex detector with the built-in catalog
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(Arc::new(PatternCatalog::new()?)))
    }

    /// Create a new regex detector sharing an already compiled catalog
    pub fn with_catalog(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<PatternCatalog> {
        &self.catalog
    }

    fn is_valid(&self, text: &str, candidate: &PiiMatch) -> bool {
        match candidate.rule {
            MatchRule::Phone | MatchRule::CreditCard => !is_digit_flanked(text, candidate),
            MatchRule::Ssn => {
                !is_digit_flanked(text, candidate) && self.is_plausible_ssn(text, &candidate.value)
            }
            MatchRule::Name => !self.is_address_name(text, candidate),
            _ => true,
        }
    }

    /// Consistently delimited or bare nine-digit runs stand alone; anything else needs a keyword
    fn is_plausible_ssn(&self, text: &str, value: &str) -> bool {
        let bytes = value.as_bytes();
        let delimited = bytes.len() == 11 && is_ssn_separator(bytes[3]) && bytes[3] == bytes[6];
        let bare = bytes.len() == 9 && bytes.iter().all(u8::is_ascii_digit);
        delimited || bare || self.catalog.has_ssn_context(text)
    }

    /// Whether a capitalized bigram is really part of a place or street
    fn is_address_name(&self, text: &str, candidate: &PiiMatch) -> bool {
        if self.catalog.is_address_context(&candidate.value) {
            return true;
        }
        let next = following_word(text, candidate.end);
        !next.is_empty() && self.catalog.has_street_type(next)
    }

    /// Cut an address candidate short of the first kept span it runs into
    fn clip_address(
        &self,
        text: &str,
        candidate: &PiiMatch,
        selected: &[PiiMatch],
    ) -> Option<PiiMatch> {
        let cut = selected
            .iter()
            .filter(|kept| kept.overlaps(candidate))
            .map(|kept| kept.start)
            .min()?;
        if cut <= candidate.start {
            return None;
        }
        let core = self.catalog.address_core(text, candidate.start..cut)?;
        Some(PiiMatch::new(candidate.rule, text, core))
    }
}

impl PiiDetector for RegexDetector {
    fn detect(&self, text: &str) -> Vec<PiiMatch> {
        let candidates = self
            .catalog
            .match_all(text)
            .into_iter()
            .filter(|candidate| self.is_valid(text, candidate));

        // Candidates arrive in precedence order, leftmost first within a rule
        let mut selected: Vec<PiiMatch> = Vec::new();
        for candidate in candidates {
            if selected.iter().all(|kept| !kept.overlaps(&candidate)) {
                selected.push(candidate);
            } else if candidate.category == PiiCategory::Address {
                if let Some(clipped) = self.clip_address(text, &candidate, &selected) {
                    tracing::debug!(
                        rule = ?clipped.rule,
                        start = clipped.start,
                        end = clipped.end,
                        "Address clipped at overlapping match"
                    );
                    selected.push(clipped);
                }
            }
        }

        selected.sort_by_key(|m| m.start);
        selected
    }
}

fn is_ssn_separator(b: u8) -> bool {
    b == b'-' || b == b' '
}

fn is_digit_flanked(text: &str, candidate: &PiiMatch) -> bool {
    let bytes = text.as_bytes();
    let before = candidate.start > 0 && bytes[candidate.start - 1].is_ascii_digit();
    let after = bytes.get(candidate.end).is_some_and(u8::is_ascii_digit);
    before || after
}

fn following_word(text: &str, end: usize) -> &str {
    let rest = text[end..].trim_start();
    let len = rest
        .find(|c: char| !c.is_alphabetic())
        .unwrap_or(rest.len());
    &rest[..len]
}
