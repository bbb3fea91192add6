//! Inventory addition drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use bloodlink_core::error::AppError;
use bloodlink_entity::BloodType;

use super::not_blank;

/// Units to add to a bank's stock.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct InventoryDraft {
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
    /// Units to add (required, at least one).
    #[validate(
        required(message = "Please fill in all required fields"),
        range(min = 1, message = "Please fill in all required fields")
    )]
    pub units: Option<u32>,
    /// Expiry date for a new entry.
    pub expiry_date: Option<DateTime<Utc>>,
}

impl InventoryDraft {
    /// Draft for a known blood type.
    pub fn for_type(blood_type: BloodType, units: u32) -> Self {
        Self {
            blood_group: Some(blood_type.group.to_string()),
            rh_factor: Some(blood_type.rh.to_string()),
            units: Some(units),
            expiry_date: None,
        }
    }

    /// Parse the blood type from the form parts.
    pub fn blood_type(&self) -> Result<BloodType, AppError> {
        BloodType::from_parts(
            self.blood_group.as_deref().unwrap_or_default(),
            self.rh_factor.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check;

    #[test]
    fn test_for_type_round_trips_parts() {
        let draft = InventoryDraft::for_type(BloodType::AB_POSITIVE, 5);
        assert!(check(&draft).is_ok());
        assert_eq!(draft.blood_type().ok(), Some(BloodType::AB_POSITIVE));
    }

    #[test]
    fn test_zero_units_rejected() {
        let draft = InventoryDraft {
            units: Some(0),
            ..InventoryDraft::for_type(BloodType::O_NEGATIVE, 1)
        };
        let err = check(&draft).unwrap_err();
        assert_eq!(err.message, "Please fill in all required fields");
    }
}
