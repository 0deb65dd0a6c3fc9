//! PII category enumeration

use crate::domain::DeidentifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of PII categories the engine can generate replacements for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Person names (first + last)
    Name,
    /// Email addresses
    Email,
    /// Telephone numbers
    Phone,
    /// US Social Security Numbers
    Ssn,
    /// Payment card numbers
    #[serde(alias = "cc")]
    CreditCard,
    /// Postal addresses
    Address,
    /// Anything else; replaced with an opaque `DATA_` token
    Generic,
}

impl PiiCategory {
    /// Every category, in declaration order
    pub const ALL: [PiiCategory; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Ssn,
        Self::CreditCard,
        Self::Address,
        Self::Generic,
    ];

    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Ssn => "SSN",
            Self::CreditCard => "CREDIT_CARD",
            Self::Address => "ADDRESS",
            Self::Generic => "GENERIC",
        }
    }

    /// Field context used for free-text matches and single-value calls
    pub fn field_context(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ssn => "ssn",
            Self::CreditCard => "credit_card",
            Self::Address => "address",
            Self::Generic => "generic",
        }
    }

    /// Marker embedded in free text when a replacement for this category fails
    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::Name => "[NAME REDACTION ERROR]",
            Self::Email => "[EMAIL REDACTION ERROR]",
            Self::Phone => "[PHONE REDACTION ERROR]",
            Self::Ssn => "[SSN REDACTION ERROR]",
            Self::CreditCard => "[CC REDACTION ERROR]",
            Self::Address => "[ADDRESS REDACTION ERROR]",
            Self::Generic => "[DATA REDACTION ERROR]",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_context())
    }
}

impl FromStr for PiiCategory {
    type Err = DeidentifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "ssn" => Ok(Self::Ssn),
            "credit_card" | "creditcard" | "cc" => Ok(Self::CreditCard),
            "address" => Ok(Self::Address),
            "generic" => Ok(Self::Generic),
            other => Err(DeidentifyError::BadParameter(format!(
                "Unknown PII category: '{other}'"
            ))),
        }
    }
}
