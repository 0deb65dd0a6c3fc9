//! Pattern catalog for PII detection
//!
//! Every matcher is compiled once when the catalog is built; the catalog is
//! immutable afterwards and is shared behind an `Arc` by the detector and the
//! type inference.

pub mod gazetteer;

use crate::domain::{DeidentifyError, Result};
use crate::pseudonymization::models::{MatchRule, PiiCategory, PiiMatch};
use gazetteer::alternation;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_PATTERN: &str = r"(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}";
const SSN_PATTERN: &str = r"\d{3}[- ]?\d{2}[- ]?\d{4}";
const SSN_CONTEXT_PATTERN: &str = r"(?i)SSN|social security";
const CREDIT_CARD_PATTERN: &str = r"\d{4}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}";
const NAME_PATTERN: &str = r"\b[A-Z][a-z]+ [A-Z][a-z]+\b";

// Address building blocks
const HOUSE_NUMBER: &str = r"(\d+[-\s]?\w*|\d+-\d+-\d+)";
const WORDS_THEN_SEPARATOR: &str = r"([A-Za-z\p{L}]+([\s'-][A-Za-z\p{L}]+)*[\s,]+)+";
const PLACE_WORDS: &str = r"([A-Za-z\p{L}]+([\s'-][A-Za-z\p{L}]+)*)";
const TRAILING_WORDS: &str = r"([\s'-][A-Za-z\p{L}]+)*";

// The address patterns combine large case-insensitive Unicode alternations
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Compiled matchers for every PII category plus disambiguation gazetteers
#[derive(Debug)]
pub struct PatternCatalog {
    email: Regex,
    phone: Regex,
    ssn: Regex,
    ssn_context: Regex,
    credit_card: Regex,
    name: Regex,
    address: Regex,
    address_word: Regex,
    street_token: Regex,
    international_street: Regex,
    country: Regex,
    city: Regex,
    iso_country_code: Regex,
    context_address: Regex,
    country_address: Regex,
    city_country_address: Regex,
    labeled_address: Regex,
}

impl PatternCatalog {
    /// Compile the built-in catalog
    pub fn new() -> Result<Self> {
        let country_src = format!("(?i)({})", alternation(gazetteer::COUNTRY_NAMES));
        let city_src = format!("(?i)({})", alternation(gazetteer::CITY_NAMES));
        let iso_src = format!(r"(?i)\b({})\b", alternation(gazetteer::ISO_COUNTRY_CODES));
        let address_word_src = format!(r"(?i)\b({})\b", alternation(gazetteer::STREET_TYPES));
        let street_token_src = format!(
            r"(?i)\b({})\b",
            alternation(gazetteer::ADDRESS_STREET_TYPES)
        );
        let international_src = format!(
            "(?i)({})",
            alternation(gazetteer::INTERNATIONAL_STREET_FRAGMENTS)
        );

        let context_address_src = format!(
            r"(?i)({}) (\d+[^\n\.]*?({})[^\n\.]*)",
            alternation(gazetteer::ADDRESS_CONTEXT_PHRASES),
            alternation(gazetteer::CONTEXT_ADDRESS_STREET_TYPES),
        );
        let country_address_src = format!(
            r"(?i){HOUSE_NUMBER}[\s,]+{WORDS_THEN_SEPARATOR}({})[\s,]+{country_src}",
            alternation(gazetteer::COUNTRY_ADDRESS_STREET_TYPES),
        );
        let city_country_address_src = format!(
            r"(?i)(\d+)[\s,]+{WORDS_THEN_SEPARATOR}({})[\s,]+{PLACE_WORDS}[\s,]+{city_src}[\s,]+{country_src}",
            alternation(gazetteer::CITY_COUNTRY_ADDRESS_STREET_TYPES),
        );
        // Street type after the words ("15 Oak Road") or right after the number ("15 Rue de Rivoli")
        let labeled_streets = alternation(gazetteer::LABELED_ADDRESS_STREET_TYPES);
        let labeled_address_src = format!(
            r"(?i)(:\s+|\bat\s+|@\s+)({HOUSE_NUMBER}[\s,]+({WORDS_THEN_SEPARATOR}({labeled_streets})\b|({labeled_streets})\b{TRAILING_WORDS}))",
        );
        let address_src = format!(
            r"(?i){HOUSE_NUMBER}[\s,]+{WORDS_THEN_SEPARATOR}({})\b((\s*,\s*|\s+){PLACE_WORDS}?(\s*,\s*|\s+)?({iso_src}|{country_src})?)?",
            alternation(gazetteer::ADDRESS_STREET_TYPES),
        );

        Ok(Self {
            email: compile("email", EMAIL_PATTERN)?,
            phone: compile("phone", PHONE_PATTERN)?,
            ssn: compile("ssn", SSN_PATTERN)?,
            ssn_context: compile("ssn_context", SSN_CONTEXT_PATTERN)?,
            credit_card: compile("credit_card", CREDIT_CARD_PATTERN)?,
            name: compile("name", NAME_PATTERN)?,
            address: compile("address", &address_src)?,
            address_word: compile("address_word", &address_word_src)?,
            street_token: compile("street_token", &street_token_src)?,
            international_street: compile("international_street", &international_src)?,
            country: compile("country", &country_src)?,
            city: compile("city", &city_src)?,
            iso_country_code: compile("iso_country_code", &iso_src)?,
            context_address: compile("context_address", &context_address_src)?,
            country_address: compile("country_address", &country_address_src)?,
            city_country_address: compile("city_country_address", &city_country_address_src)?,
            labeled_address: compile("labeled_address", &labeled_address_src)?,
        })
    }

    /// Run every rule over `text`
    ///
    /// Returns raw candidates ordered by rule precedence, then by position.
    /// Candidates may overlap; resolving them is the detector's job. Context
    /// and label rules report only the address part of their match.
    pub fn match_all(&self, text: &str) -> Vec<PiiMatch> {
        let mut matches = Vec::new();

        for rule in MatchRule::PRECEDENCE {
            let (regex, group) = self.rule_pattern(rule);

            let spans: Vec<Range<usize>> = if group == 0 {
                regex.find_iter(text).map(|m| m.range()).collect()
            } else {
                regex
                    .captures_iter(text)
                    .filter_map(|caps| caps.get(group).map(|m| m.range()))
                    .collect()
            };

            for span in spans {
                let span = if rule.category() == PiiCategory::Address {
                    trim_address_span(text, span)
                } else {
                    span
                };
                if !span.is_empty() {
                    matches.push(PiiMatch::new(rule, text, span));
                }
            }
        }

        matches
    }

    /// Regex and capture group reporting the replaceable span for `rule`
    fn rule_pattern(&self, rule: MatchRule) -> (&Regex, usize) {
        match rule {
            MatchRule::Email => (&self.email, 0),
            MatchRule::Phone => (&self.phone, 0),
            MatchRule::Ssn => (&self.ssn, 0),
            MatchRule::CreditCard => (&self.credit_card, 0),
            MatchRule::ContextAddress => (&self.context_address, 2),
            MatchRule::CountryAddress => (&self.country_address, 0),
            MatchRule::CityCountryAddress => (&self.city_country_address, 0),
            MatchRule::LabeledAddress => (&self.labeled_address, 2),
            MatchRule::Name => (&self.name, 0),
            MatchRule::StandardAddress => (&self.address, 0),
        }
    }

    pub fn is_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    pub fn is_phone(&self, value: &str) -> bool {
        self.phone.is_match(value)
    }

    pub fn is_ssn(&self, value: &str) -> bool {
        self.ssn.is_match(value)
    }

    pub fn is_credit_card(&self, value: &str) -> bool {
        self.credit_card.is_match(value)
    }

    /// Full address pattern or any street-type word
    pub fn is_address(&self, value: &str) -> bool {
        self.address.is_match(value) || self.address_word.is_match(value)
    }

    /// Capitalized bigram
    pub fn is_name_like(&self, value: &str) -> bool {
        self.name.is_match(value)
    }

    /// Whole-word street type ("Street", "Rue", "Jalan", ...)
    pub fn has_street_type(&self, value: &str) -> bool {
        self.address_word.is_match(value)
    }

    /// Whether `text` mentions an SSN or social security
    pub fn has_ssn_context(&self, text: &str) -> bool {
        self.ssn_context.is_match(text)
    }

    /// Whether `value` reads like part of an address rather than a person
    pub fn is_address_context(&self, value: &str) -> bool {
        self.address_word.is_match(value)
            || self.international_street.is_match(value)
            || self.country.is_match(value)
            || self.city.is_match(value)
    }

    /// Narrow an address `span` to its house number and street
    ///
    /// The street ends at the last street-type word, or at the next comma when
    /// the street type directly follows the number ("15 Rue de Rivoli").
    /// Returns `None` when the span holds no street type.
    pub fn address_core(&self, text: &str, span: Range<usize>) -> Option<Range<usize>> {
        let fragment = &text[span.clone()];
        let mut tokens = self.street_token.find_iter(fragment);
        let first = tokens.next()?;

        let number_end = fragment
            .find(|c: char| c.is_whitespace() || c == ',')
            .unwrap_or(fragment.len());
        let street_first = number_end <= first.start()
            && fragment[number_end..first.start()]
                .chars()
                .all(|c| c.is_whitespace() || c == ',');

        let core_end = if street_first {
            fragment[first.end()..]
                .find(',')
                .map_or(fragment.len(), |i| first.end() + i)
        } else {
            tokens.last().map_or(first.end(), |m| m.end())
        };

        let core = trim_address_span(text, span.start..span.start + core_end);
        (!core.is_empty()).then_some(core)
    }

    /// Whether `value` contains an ISO-3166 country code as a whole word
    pub fn has_iso_country_code(&self, value: &str) -> bool {
        self.iso_country_code.is_match(value)
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| DeidentifyError::Configuration(format!("Invalid '{name}' pattern: {e}")))
}

/// Drop surrounding whitespace and trailing commas so punctuation stays in the text
fn trim_address_span(text: &str, span: Range<usize>) -> Range<usize> {
    let slice = &text[span.clone()];
    let leading = slice.len() - slice.trim_start().len();
    let trimmed_end = slice
        .trim_end_matches(|c: char| c.is_whitespace() || c == ',')
        .len();
    if trimmed_end <= leading {
        return span.start..span.start;
    }
    (span.start + leading)..(span.start + trimmed_end)
}
