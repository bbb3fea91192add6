//! Blood bank registration drafts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

/// A blood bank's identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BankDraft {
    /// Bank name (required).
    #[validate(custom(function = "not_blank", message = "Please fill in all required fields"))]
    pub name: String,
    /// Street address.
    pub address: String,
    /// Postal code.
    pub pincode: Option<String>,
    /// Contact phone number.
    pub contact_number: String,
    /// Opening hours.
    pub operating_hours: String,
    /// Certification number.
    pub certification_number: String,
}
