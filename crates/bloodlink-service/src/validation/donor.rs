//! Donor registration drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use bloodlink_core::error::AppError;
use bloodlink_entity::BloodType;

use super::not_blank;

/// A donor registration form.
///
/// Age and weight are optional on the form; a missing value is screened as
/// zero and therefore fails eligibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DonorDraft {
    /// Full name (required).
    #[validate(custom(function = "not_blank", message = "Please fill in all required fields"))]
    pub name: String,
    /// ABO group (required).
    #[validate(
        required(message = "Please fill in all required fields"),
        custom(function = "not_blank", message = "Please fill in all required fields")
    )]
    pub blood_group: Option<String>,
    /// Rh factor (required).
    #[validate(
        required(message = "Please fill in all required fields"),
        custom(function = "not_blank", message = "Please fill in all required fields")
    )]
    pub rh_factor: Option<String>,
    /// Phone number (required).
    #[validate(custom(function = "not_blank", message = "Please fill in all required fields"))]
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Postal code.
    pub pincode: Option<String>,
    /// Age in years.
    pub age: Option<u32>,
    /// Weight in kilograms.
    pub weight_kg: Option<f64>,
    /// Date of the last donation.
    pub last_donation: Option<DateTime<Utc>>,
    /// Free-text medical conditions.
    pub medical_conditions: String,
    /// Initial availability.
    pub available: bool,
}

impl DonorDraft {
    /// Parse the blood type from the form parts.
    pub fn blood_type(&self) -> Result<BloodType, AppError> {
        BloodType::from_parts(
            self.blood_group.as_deref().unwrap_or_default(),
            self.rh_factor.as_deref().unwrap_or_default(),
        )
    }
}
