//! Eligibility verdict value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a donor is or is not eligible. The first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityReason {
    /// Age outside the allowed range.
    AgeOutOfRange,
    /// Weight below the minimum.
    WeightTooLow,
    /// Too few days since the last donation.
    IntervalNotMet,
    /// Medical conditions contain a disqualifying term.
    MedicalCondition,
    /// All checks passed.
    Eligible,
}

impl EligibilityReason {
    /// Human-readable reason shown to the donor.
    pub fn message(&self) -> &'static str {
        match self {
            Self::AgeOutOfRange => "age out of range",
            Self::WeightTooLow => "weight too low",
            Self::IntervalNotMet => "interdonation interval not met",
            Self::MedicalCondition => "medical condition may affect eligibility",
            Self::Eligible => "eligible to donate",
        }
    }
}

impl fmt::Display for EligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Result of evaluating a donor snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    /// Whether the donor may donate now.
    pub eligible: bool,
    /// The deciding reason.
    pub reason: EligibilityReason,
}

impl EligibilityVerdict {
    /// A passing verdict.
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            reason: EligibilityReason::Eligible,
        }
    }

    /// A failing verdict with the given reason.
    pub fn ineligible(reason: EligibilityReason) -> Self {
        Self {
            eligible: false,
            reason,
        }
    }

    /// The human-readable reason.
    pub fn message(&self) -> &'static str {
        self.reason.message()
    }
}
