//! Donor domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to donor registration and availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DonorEvent {
    /// A donor registered.
    Registered {
        /// The donor ID.
        donor_id: Uuid,
        /// Canonical blood type.
        blood_type: String,
        /// Whether the donor was eligible at registration time.
        eligible: bool,
        /// The eligibility reason reported at registration.
        reason: String,
    },
    /// A donor toggled their availability flag.
    AvailabilityChanged {
        /// The donor ID.
        donor_id: Uuid,
        /// The new availability.
        available: bool,
    },
}

impl DonorEvent {
    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Registered { .. } => "donor.registered",
            Self::AvailabilityChanged { .. } => "donor.availability_changed",
        }
    }
}
