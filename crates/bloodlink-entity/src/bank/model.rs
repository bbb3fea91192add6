//! Blood bank entity model.

use serde::{Deserialize, Serialize};

use bloodlink_core::types::id::BankId;

use super::inventory::InventoryEntry;
use crate::blood_type::BloodType;

/// A certified blood bank and its stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodBank {
    /// Unique bank identifier.
    pub id: BankId,
    /// Bank name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Postal code (optional).
    pub pincode: Option<String>,
    /// Contact phone number.
    pub contact_number: String,
    /// Opening hours, e.g. `"24/7"`.
    pub operating_hours: String,
    /// Certification number.
    pub certification_number: String,
    /// Stock, at most one entry per blood type.
    pub inventory: Vec<InventoryEntry>,
}

impl BloodBank {
    /// Find the inventory entry for a blood type.
    pub fn entry(&self, blood_type: BloodType) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|e| e.blood_type == blood_type)
    }

    /// Mutable access to the inventory entry for a blood type.
    pub fn entry_mut(&mut self, blood_type: BloodType) -> Option<&mut InventoryEntry> {
        self.inventory.iter_mut().find(|e| e.blood_type == blood_type)
    }

    /// Total units across all blood types.
    pub fn total_units(&self) -> u64 {
        self.inventory
            .iter()
            .map(|e| u64::from(e.units_available))
            .sum()
    }
}
