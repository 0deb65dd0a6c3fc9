//! Secret key handling using the secrecy crate
//!
//! The deidentification key is held in a `Secret` container: memory is zeroed
//! on drop, `Debug` output is redacted and the raw bytes are only reachable
//! through `expose_secret()`.
//!
//! # Example
//!
//! ```rust
//! use deidentify::config::{secret_key, KeyMaterial};
//! use secrecy::ExposeSecret;
//!
//! let key = secret_key("my-secret-key");
//! assert_eq!(key.expose_secret().as_bytes(), b"my-secret-key");
//!
//! // Debug output is redacted
//! assert!(!format!("{key:?}").contains("my-secret-key"));
//! ```

use crate::domain::{DeidentifyError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Number of random bytes in a generated key
pub const GENERATED_KEY_BYTES: usize = 32;

/// Key text whose UTF-8 bytes are the HMAC key
///
/// A hex-looking key is used verbatim, never decoded.
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct KeyMaterial(String);

impl CloneableSecret for KeyMaterial {}
impl DebugSecret for KeyMaterial {}
impl SerializableSecret for KeyMaterial {}

impl From<String> for KeyMaterial {
    fn from(s: String) -> Self {
        KeyMaterial(s)
    }
}

impl From<&str> for KeyMaterial {
    fn from(s: &str) -> Self {
        KeyMaterial(s.to_string())
    }
}

impl KeyMaterial {
    /// Bytes fed to the keyed hash
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for KeyMaterial {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeyMaterial {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(KeyMaterial)
    }
}

/// Deidentification key
pub type SecretKey = Secret<KeyMaterial>;

/// Wrap key text in a [`SecretKey`]
#[inline]
pub fn secret_key(value: impl Into<KeyMaterial>) -> SecretKey {
    Secret::new(value.into())
}

/// Generate a fresh key: 32 bytes from the OS CSPRNG, hex-encoded
///
/// # Errors
///
/// Returns [`DeidentifyError::KeyGeneration`] when the OS random source fails.
pub fn generate_secret_key() -> Result<String> {
    let mut bytes = [0u8; GENERATED_KEY_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| DeidentifyError::KeyGeneration(e.to_string()))?;
    let key = hex::encode(bytes);
    bytes.zeroize();
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_key_uses_raw_bytes() {
        let key = secret_key("deadbeef");
        assert_eq!(key.expose_secret().as_bytes(), b"deadbeef");
        assert_eq!(key.expose_secret().len(), 8);
    }

    #[test]
    fn test_secret_debug_redacted() {
        let key = secret_key("sensitive-key".to_string());
        let debug_output = format!("{key:?}");
        assert!(!debug_output.contains("sensitive-key"));
    }

    #[test]
    fn test_generate_secret_key() {
        let key = generate_secret_key().unwrap();
        assert_eq!(key.len(), GENERATED_KEY_BYTES * 2);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));

        let other = generate_secret_key().unwrap();
        assert_ne!(key, other);
    }

    #[test]
    fn test_secret_serde() {
        #[derive(Serialize, Deserialize)]
        struct Engine {
            secret_key: SecretKey,
        }

        let engine: Engine = toml::from_str(r#"secret_key = "abc123""#).unwrap();
        assert_eq!(engine.secret_key.expose_secret().as_bytes(), b"abc123");
    }
}
