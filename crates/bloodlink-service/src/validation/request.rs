//! Blood request drafts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use bloodlink_core::error::AppError;
use bloodlink_entity::request::{Criticality, EmergencyType, RequestKind, TimeWindow, Urgency};
use bloodlink_entity::BloodType;

use super::not_blank;

/// Message used when an emergency-mode draft is missing fields.
pub const MISSING_EMERGENCY_FIELDS: &str = "Please fill in all required emergency fields";

/// A patient's request as submitted from a standard or emergency form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RequestDraft {
    /// Patient name (required).
    #[validate(custom(function = "not_blank", message = "Please fill in all required fields"))]
    pub patient_name: String,
    /// ABO group, e.g. `"AB"` (required).
    #[validate(
        required(message = "Please fill in all required fields"),
        custom(function = "not_blank", message = "Please fill in all required fields")
    )]
    pub blood_group: Option<String>,
    /// Rh factor, `"positive"` or `"negative"` (required).
    #[validate(
        required(message = "Please fill in all required fields"),
        custom(function = "not_blank", message = "Please fill in all required fields")
    )]
    pub rh_factor: Option<String>,
    /// Units needed (required, at least one).
    #[validate(
        required(message = "Please fill in all required fields"),
        range(min = 1, message = "Please fill in all required fields")
    )]
    pub units_needed: Option<u32>,
    /// Hospital name.
    pub hospital_name: String,
    /// Hospital street address.
    pub hospital_address: String,
    /// Postal code.
    pub pincode: Option<String>,
    /// Contact phone number.
    pub contact_number: String,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Submitted in emergency mode.
    pub emergency: bool,
    /// Standard-form urgency.
    pub urgency: Option<Urgency>,
    /// Emergency cause.
    pub emergency_type: Option<EmergencyType>,
    /// Emergency time window.
    pub time_window: Option<TimeWindow>,
    /// Tier picked explicitly.
    pub criticality: Option<Criticality>,
    /// Countdown length picked explicitly, in minutes.
    pub remaining_minutes: Option<u32>,
    /// Static distance in kilometres.
    pub distance_km: Option<f64>,
}

impl RequestDraft {
    /// Parse the blood type from the form parts.
    pub fn blood_type(&self) -> Result<BloodType, AppError> {
        BloodType::from_parts(
            self.blood_group.as_deref().unwrap_or_default(),
            self.rh_factor.as_deref().unwrap_or_default(),
        )
    }

    /// Standard or emergency details of the draft.
    pub fn kind(&self) -> RequestKind {
        if self.emergency {
            RequestKind::Emergency {
                emergency_type: self.emergency_type,
                window: self.time_window,
            }
        } else {
            RequestKind::Standard {
                urgency: self.urgency,
            }
        }
    }

    /// Validate the draft, using the emergency wording in emergency mode.
    pub fn check(&self) -> Result<(), AppError> {
        super::check(self).map_err(|e| {
            if self.emergency {
                AppError::validation(MISSING_EMERGENCY_FIELDS)
            } else {
                e
            }
        })
    }
}
