//! Donor eligibility screening.

use chrono::{DateTime, Utc};

use bloodlink_core::config::EligibilityConfig;
use bloodlink_entity::donor::{Donor, EligibilityReason, EligibilityVerdict};

/// Screening thresholds. Checks run in a fixed order and the first failure
/// decides the verdict.
#[derive(Debug, Clone)]
pub struct EligibilityPolicy {
    /// Minimum age, inclusive.
    min_age: u32,
    /// Maximum age, inclusive.
    max_age: u32,
    /// Minimum weight in kilograms, inclusive.
    min_weight_kg: f64,
    /// Minimum whole days since the last donation.
    min_days_between_donations: i64,
    /// Lowercased disqualifying terms.
    disqualifying_terms: Vec<String>,
}

impl EligibilityPolicy {
    /// Build a policy from configuration.
    pub fn from_config(config: &EligibilityConfig) -> Self {
        Self {
            min_age: config.min_age,
            max_age: config.max_age,
            min_weight_kg: f64::from(config.min_weight_kg),
            min_days_between_donations: config.min_days_between_donations,
            disqualifying_terms: config
                .disqualifying_terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Evaluate a donor snapshot at `now`.
    pub fn evaluate(&self, donor: &Donor, now: DateTime<Utc>) -> EligibilityVerdict {
        if donor.age < self.min_age || donor.age > self.max_age {
            return EligibilityVerdict::ineligible(EligibilityReason::AgeOutOfRange);
        }
        if donor.weight_kg < self.min_weight_kg {
            return EligibilityVerdict::ineligible(EligibilityReason::WeightTooLow);
        }
        if donor.days_since_last_donation(now) < self.min_days_between_donations {
            return EligibilityVerdict::ineligible(EligibilityReason::IntervalNotMet);
        }
        if self.has_disqualifying_condition(&donor.medical_conditions) {
            return EligibilityVerdict::ineligible(EligibilityReason::MedicalCondition);
        }
        EligibilityVerdict::eligible()
    }

    /// Case-insensitive substring match against the term list.
    pub fn has_disqualifying_condition(&self, conditions: &str) -> bool {
        let text = conditions.to_lowercase();
        self.disqualifying_terms
            .iter()
            .any(|term| text.contains(term.as_str()))
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::from_config(&EligibilityConfig::default())
    }
}

/// Evaluate with the default thresholds.
pub fn evaluate(donor: &Donor, now: DateTime<Utc>) -> EligibilityVerdict {
    EligibilityPolicy::default().evaluate(donor, now)
}
