//! Request criticality tier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bloodlink_core::error::AppError;

/// Triage tier of a blood request.
///
/// Ordered by severity: `Urgent < Severe < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    /// Needed within hours.
    Urgent,
    /// Needed within the hour.
    Severe,
    /// Life-threatening, needed now.
    Critical,
}

impl Criticality {
    /// All tiers, most severe first.
    pub const DESCENDING: [Self; 3] = [Self::Critical, Self::Severe, Self::Urgent];

    /// The next tier up, capped at `Critical`.
    pub fn escalated(self) -> Self {
        match self {
            Self::Urgent => Self::Severe,
            Self::Severe | Self::Critical => Self::Critical,
        }
    }

    /// Check whether this is the critical tier.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Severe => "severe",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Criticality {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urgent" => Ok(Self::Urgent),
            "severe" => Ok(Self::Severe),
            "critical" => Ok(Self::Critical),
            other => Err(AppError::validation(format!(
                "Unknown criticality '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_severity() {
        assert!(Criticality::Critical > Criticality::Severe);
        assert!(Criticality::Severe > Criticality::Urgent);
    }

    #[test]
    fn test_escalation_caps_at_critical() {
        assert_eq!(Criticality::Urgent.escalated(), Criticality::Severe);
        assert_eq!(Criticality::Severe.escalated(), Criticality::Critical);
        assert_eq!(Criticality::Critical.escalated(), Criticality::Critical);
    }
}
