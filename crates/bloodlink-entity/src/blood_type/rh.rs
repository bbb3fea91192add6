//! Rh factor enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bloodlink_core::error::AppError;

/// Presence of the RhD antigen.
///
/// `Negative` orders before `Positive` so sorted sets list `O-` before `O+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RhFactor {
    /// RhD antigen absent.
    Negative,
    /// RhD antigen present.
    Positive,
}

impl RhFactor {
    /// The suffix used in the canonical blood type string.
    pub fn sign(&self) -> char {
        match self {
            Self::Negative => '-',
            Self::Positive => '+',
        }
    }

    /// Return the factor as a lowercase word.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }
}

impl fmt::Display for RhFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RhFactor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" | "+" => Ok(Self::Positive),
            "negative" | "neg" | "-" => Ok(Self::Negative),
            other => Err(AppError::validation(format!("Unknown Rh factor '{other}'"))),
        }
    }
}
