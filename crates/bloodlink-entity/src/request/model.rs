//! Blood request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bloodlink_core::types::id::RequestId;

use super::criticality::Criticality;
use super::kind::RequestKind;
use super::status::RequestStatus;
use crate::blood_type::BloodType;

/// An open request for blood on behalf of a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequest {
    /// Unique request identifier.
    pub id: RequestId,
    /// Patient name.
    pub patient_name: String,
    /// Blood type needed.
    pub blood_type: BloodType,
    /// Units needed, always at least one.
    pub units_needed: u32,
    /// Hospital name.
    pub hospital_name: String,
    /// Hospital street address.
    pub hospital_address: String,
    /// Postal code (optional).
    pub pincode: Option<String>,
    /// Contact phone number.
    pub contact_number: String,
    /// Free-text notes from the requester.
    pub notes: Option<String>,
    /// Standard or emergency submission details.
    pub kind: RequestKind,
    /// Triage tier, fixed at creation unless explicitly escalated.
    pub criticality: Criticality,
    /// When the request was posted.
    pub posted_at: DateTime<Utc>,
    /// Minutes left before the request expires. Never increases.
    pub remaining_minutes: u32,
    /// Static distance from the viewer in kilometres.
    pub distance_km: f64,
    /// Fulfilment status.
    pub status: RequestStatus,
}

impl BloodRequest {
    /// Check whether the countdown has run out.
    pub fn is_expired(&self) -> bool {
        self.remaining_minutes == 0
    }

    /// Check whether the request is in the critical tier.
    pub fn is_critical(&self) -> bool {
        self.criticality.is_critical()
    }

    /// Age the request by one minute, flooring at zero.
    pub fn tick(&mut self) {
        self.remaining_minutes = self.remaining_minutes.saturating_sub(1);
    }
}
