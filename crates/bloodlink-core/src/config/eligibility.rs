//! Donor screening configuration.

use serde::{Deserialize, Serialize};

/// Thresholds and free-text terms used by donor eligibility screening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Minimum donor age in years (inclusive).
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    /// Maximum donor age in years (inclusive).
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    /// Minimum donor weight in kilograms (inclusive).
    #[serde(default = "default_min_weight")]
    pub min_weight_kg: u32,
    /// Minimum whole days since the last donation.
    #[serde(default = "default_min_days")]
    pub min_days_between_donations: i64,
    /// Terms that disqualify a donor when found in the medical-conditions text.
    #[serde(default = "default_terms")]
    pub disqualifying_terms: Vec<String>,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
            max_age: default_max_age(),
            min_weight_kg: default_min_weight(),
            min_days_between_donations: default_min_days(),
            disqualifying_terms: default_terms(),
        }
    }
}

fn default_min_age() -> u32 {
    18
}

fn default_max_age() -> u32 {
    65
}

fn default_min_weight() -> u32 {
    50
}

fn default_min_days() -> i64 {
    90
}

fn default_terms() -> Vec<String> {
    vec![
        "diabetes".to_string(),
        "hypertension".to_string(),
        "heart".to_string(),
    ]
}
