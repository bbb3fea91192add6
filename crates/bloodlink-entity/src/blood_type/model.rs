//! The combined ABO + Rh blood type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bloodlink_core::error::AppError;

use super::group::AboGroup;
use super::rh::RhFactor;

/// An ABO group plus Rh factor, e.g. `AB+`.
///
/// Only the eight valid combinations are representable. Serializes as the
/// canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BloodType {
    /// ABO group.
    pub group: AboGroup,
    /// Rh factor.
    pub rh: RhFactor,
}

impl BloodType {
    /// Universal red-cell donor.
    pub const O_NEGATIVE: Self = Self::new(AboGroup::O, RhFactor::Negative);
    /// Universal red-cell recipient.
    pub const AB_POSITIVE: Self = Self::new(AboGroup::AB, RhFactor::Positive);

    /// All eight blood types, ordered `O-, O+, A-, A+, B-, B+, AB-, AB+`.
    pub const ALL: [Self; 8] = [
        Self::new(AboGroup::O, RhFactor::Negative),
        Self::new(AboGroup::O, RhFactor::Positive),
        Self::new(AboGroup::A, RhFactor::Negative),
        Self::new(AboGroup::A, RhFactor::Positive),
        Self::new(AboGroup::B, RhFactor::Negative),
        Self::new(AboGroup::B, RhFactor::Positive),
        Self::new(AboGroup::AB, RhFactor::Negative),
        Self::new(AboGroup::AB, RhFactor::Positive),
    ];

    /// Create a blood type from its parts.
    pub const fn new(group: AboGroup, rh: RhFactor) -> Self {
        Self { group, rh }
    }

    /// Parse form values such as `("AB", "positive")`.
    pub fn from_parts(group: &str, rh: &str) -> Result<Self, AppError> {
        Ok(Self::new(group.parse()?, rh.parse()?))
    }

    /// The canonical string, e.g. `"O-"`.
    pub fn canonical(&self) -> String {
        format!("{}{}", self.group, self.rh.sign())
    }

    /// The same group with the given Rh factor.
    pub fn with_rh(&self, rh: RhFactor) -> Self {
        Self::new(self.group, rh)
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.group, self.rh.sign())
    }
}

impl FromStr for BloodType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (group, sign) = match trimmed.char_indices().last() {
            Some((idx, c)) if c == '+' || c == '-' => (&trimmed[..idx], &trimmed[idx..]),
            _ => {
                return Err(AppError::validation(format!(
                    "Blood type '{trimmed}' must end with '+' or '-'"
                )));
            }
        };
        Ok(Self::new(group.parse()?, sign.parse()?))
    }
}

impl TryFrom<String> for BloodType {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BloodType> for String {
    fn from(value: BloodType) -> Self {
        value.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strings() {
        let strings: Vec<String> = BloodType::ALL.iter().map(BloodType::canonical).collect();
        assert_eq!(
            strings,
            vec!["O-", "O+", "A-", "A+", "B-", "B+", "AB-", "AB+"]
        );
    }

    #[test]
    fn test_parse_canonical_roundtrip() {
        for bt in BloodType::ALL {
            let parsed: BloodType = bt.to_string().parse().expect("parse");
            assert_eq!(parsed, bt);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: BloodType = " ab+ ".parse().expect("parse");
        assert_eq!(parsed, BloodType::AB_POSITIVE);
    }

    #[test]
    fn test_from_form_parts() {
        let bt = BloodType::from_parts("O", "negative").expect("parse");
        assert_eq!(bt, BloodType::O_NEGATIVE);
        assert!(BloodType::from_parts("C", "negative").is_err());
        assert!(BloodType::from_parts("A", "unknown").is_err());
    }

    #[test]
    fn test_rejects_invalid_strings() {
        for raw in ["", "+", "AB", "C+", "ABO-", "A*"] {
            assert!(raw.parse::<BloodType>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&BloodType::O_NEGATIVE).expect("serialize");
        assert_eq!(json, "\"O-\"");
        let parsed: BloodType = serde_json::from_str("\"B+\"").expect("deserialize");
        assert_eq!(parsed, BloodType::new(AboGroup::B, RhFactor::Positive));
        assert!(serde_json::from_str::<BloodType>("\"Z+\"").is_err());
    }
}
