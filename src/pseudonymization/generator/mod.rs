//! Deterministic synthetic value generation
//!
//! Every replacement is derived from `HMAC-SHA256(key, original)`. Successive
//! 8-byte windows of the digest are read as big-endian integers and reduced
//! modulo a list length or numeric range, so the same key and original always
//! produce the same synthetic value while different keys diverge.

pub mod luhn;
pub mod wordlists;

pub use wordlists::WordLists;

use crate::config::SecretKey;
use crate::domain::{DeidentifyError, Result};
use crate::pseudonymization::models::PiiCategory;
use hmac::{Hmac, Mac};
use regex::Regex;
use secrecy::ExposeSecret;
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

const DIGEST_LEN: usize = 32;
const PHONE_SKELETON_PATTERN: &str = r"^(\+?1?\s?)?(\(?)(\d{3})(\)?[\s.-]?)(\d{3})([\s.-]?)(\d{4})";
const CARD_PREFIX: [u8; 4] = [4, 0, 0, 0];
const CARD_RANDOM_DIGITS: usize = 11;
const RESERVED_SSN_AREA: u64 = 666;

/// Keyed generator of format-preserving synthetic values
///
/// Holds no memory across calls; caching lives in the consistency store.
#[derive(Clone)]
pub struct Generator {
    mac: HmacSha256,
    words: WordLists,
    phone_skeleton: Regex,
}

impl Generator {
    /// Create a generator with the built-in word lists
    pub fn new(key: &SecretKey) -> Result<Self> {
        Self::with_word_lists(key, WordLists::default())
    }

    /// Create a generator drawing from custom word lists
    ///
    /// # Errors
    ///
    /// Returns [`DeidentifyError::BadParameter`] for an empty key or an empty list.
    pub fn with_word_lists(key: &SecretKey, words: WordLists) -> Result<Self> {
        let material = key.expose_secret();
        if material.is_empty() {
            return Err(DeidentifyError::BadParameter(
                "secret key must not be empty".to_string(),
            ));
        }
        words.validate()?;

        let mac = HmacSha256::new_from_slice(material.as_bytes())
            .map_err(|e| DeidentifyError::Configuration(format!("Invalid secret key: {e}")))?;
        let phone_skeleton = Regex::new(PHONE_SKELETON_PATTERN).map_err(|e| {
            DeidentifyError::Configuration(format!("Invalid 'phone_skeleton' pattern: {e}"))
        })?;

        Ok(Self {
            mac,
            words,
            phone_skeleton,
        })
    }

    /// Synthetic replacement for `original` in `category`
    pub fn generate(&self, original: &str, category: PiiCategory) -> String {
        let digest = self.digest(original);
        match category {
            PiiCategory::Name => self.name(&digest),
            PiiCategory::Email => self.email(&digest),
            PiiCategory::Phone => self.phone(original, &digest),
            PiiCategory::Ssn => ssn(&digest),
            PiiCategory::CreditCard => credit_card(&digest),
            PiiCategory::Address => self.address(&digest),
            PiiCategory::Generic => generic(&digest),
        }
    }

    fn digest(&self, original: &str) -> [u8; DIGEST_LEN] {
        let mut mac = self.mac.clone();
        mac.update(original.as_bytes());
        let bytes = mac.finalize().into_bytes();

        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&bytes);
        digest
    }

    fn name(&self, digest: &[u8; DIGEST_LEN]) -> String {
        format!(
            "{} {}",
            pick(&self.words.first_names, digest, 0),
            pick(&self.words.last_names, digest, 8)
        )
    }

    fn email(&self, digest: &[u8; DIGEST_LEN]) -> String {
        format!(
            "{}{}@{}",
            pick(&self.words.email_usernames, digest, 0),
            window(digest, 16) % 9999,
            pick(&self.words.email_domains, digest, 8)
        )
    }

    /// Keeps the original's prefix, parentheses, area code and separators
    fn phone(&self, original: &str, digest: &[u8; DIGEST_LEN]) -> String {
        let Some(caps) = self.phone_skeleton.captures(original) else {
            return generic(digest);
        };
        let part = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        let exchange = 200 + window(digest, 0) % 799;
        let subscriber = 1000 + window(digest, 8) % 8999;

        format!(
            "{}{}{}{}{:03}{}{:04}",
            part(1),
            part(2),
            part(3),
            part(4),
            exchange,
            part(6),
            subscriber
        )
    }

    fn address(&self, digest: &[u8; DIGEST_LEN]) -> String {
        format!(
            "{} {}",
            1 + window(digest, 0) % 9999,
            pick(&self.words.street_names, digest, 8)
        )
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("key", &"[REDACTED]")
            .field("first_names", &self.words.first_names.len())
            .field("street_names", &self.words.street_names.len())
            .finish()
    }
}

/// Area 100..=664 or 667, group 1..=99, serial 1..=9999
fn ssn(digest: &[u8; DIGEST_LEN]) -> String {
    let mut area = 100 + window(digest, 0) % 565;
    if area == RESERVED_SSN_AREA {
        area += 1;
    }
    let group = 1 + window(digest, 8) % 99;
    let serial = 1 + window(digest, 16) % 9999;
    format!("{area:03}-{group:02}-{serial:04}")
}

/// Test-issuer prefix, eleven digest digits and a Luhn check digit, in blocks of four
fn credit_card(digest: &[u8; DIGEST_LEN]) -> String {
    let mut digits = Vec::with_capacity(16);
    digits.extend_from_slice(&CARD_PREFIX);
    for i in 0..CARD_RANDOM_DIGITS {
        let pair = u16::from_be_bytes([digest[i * 2], digest[i * 2 + 1]]);
        digits.push((pair % 10) as u8);
    }
    digits.push(luhn::check_digit(&digits));

    digits
        .chunks(4)
        .map(|block| block.iter().map(|d| char::from(b'0' + d)).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn generic(digest: &[u8; DIGEST_LEN]) -> String {
    format!("DATA_{}", hex::encode(&digest[..8]))
}

/// Big-endian u64 read from `digest[offset..offset + 8]`
fn window(digest: &[u8; DIGEST_LEN], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&digest[offset..offset + 8]);
    u64::from_be_bytes(buf)
}

fn pick<'a>(list: &'a [String], digest: &[u8; DIGEST_LEN], offset: usize) -> &'a str {
    let index = (window(digest, offset) % list.len() as u64) as usize;
    &list[index]
}
