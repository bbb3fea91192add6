//! Triage configuration.

use serde::{Deserialize, Serialize};

/// Triage escalation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Units needed at or above which a request escalates one tier.
    #[serde(default = "default_mass_transfusion_units")]
    pub mass_transfusion_units: u32,
    /// Remaining minutes assigned when neither the draft nor its time
    /// window provides one.
    #[serde(default = "default_window_minutes")]
    pub default_window_minutes: u32,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            mass_transfusion_units: default_mass_transfusion_units(),
            default_window_minutes: default_window_minutes(),
        }
    }
}

fn default_mass_transfusion_units() -> u32 {
    4
}

fn default_window_minutes() -> u32 {
    120
}
