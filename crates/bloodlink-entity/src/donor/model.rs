//! Donor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bloodlink_core::types::id::DonorId;

use crate::blood_type::BloodType;

/// Days-since value used when a donor has never donated.
pub const NO_PRIOR_DONATION_DAYS: i64 = 999;

/// A registered blood donor.
///
/// Eligibility is never stored here; it is evaluated on demand from a
/// snapshot of this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donor {
    /// Unique donor identifier.
    pub id: DonorId,
    /// Full name.
    pub name: String,
    /// Donor blood type.
    pub blood_type: BloodType,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Postal code (optional).
    pub pincode: Option<String>,
    /// Date of the most recent donation, if any.
    pub last_donation: Option<DateTime<Utc>>,
    /// Availability toggled by the donor.
    pub available: bool,
    /// Age in whole years.
    pub age: u32,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Free-text medical conditions.
    pub medical_conditions: String,
    /// When the donor registered.
    pub registered_at: DateTime<Utc>,
}

impl Donor {
    /// Whole days elapsed since the last donation, or
    /// [`NO_PRIOR_DONATION_DAYS`] when there was none.
    pub fn days_since_last_donation(&self, now: DateTime<Utc>) -> i64 {
        match self.last_donation {
            Some(last) => (now - last).num_days(),
            None => NO_PRIOR_DONATION_DAYS,
        }
    }
}
