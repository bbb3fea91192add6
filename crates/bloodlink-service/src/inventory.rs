//! Blood bank stock keeping.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use bloodlink_core::config::InventoryConfig;
use bloodlink_entity::bank::{BloodBank, ExpiryStatus, InventoryEntry};
use bloodlink_entity::BloodType;

/// Expiry horizons and shelf life.
#[derive(Debug, Clone)]
pub struct InventoryPolicy {
    /// Days at or below which stock is urgent.
    urgent_days: i64,
    /// Days at or below which stock is a warning.
    warning_days: i64,
    /// Shelf life assumed when a new entry has no expiry date.
    shelf_life: Duration,
}

/// An inventory entry with its expiry classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLine {
    /// The stock entry.
    pub entry: InventoryEntry,
    /// Whole days until expiry.
    pub days_until_expiry: i64,
    /// Expiry classification.
    pub status: ExpiryStatus,
}

impl InventoryPolicy {
    /// Build a policy from configuration.
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self {
            urgent_days: config.expiry_urgent_days,
            warning_days: config.expiry_warning_days,
            shelf_life: Duration::days(config.default_shelf_life_days),
        }
    }

    /// Add units to a bank.
    ///
    /// An existing entry for the type grows and keeps its expiry date; a new
    /// type is appended with `expiry_date` or `now` plus the shelf life.
    pub fn add_units(
        &self,
        bank: &mut BloodBank,
        blood_type: BloodType,
        units: u32,
        expiry_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> InventoryEntry {
        if let Some(entry) = bank.entry_mut(blood_type) {
            entry.units_available = entry.units_available.saturating_add(units);
            return entry.clone();
        }
        let entry = InventoryEntry {
            blood_type,
            units_available: units,
            expiry_date: expiry_date.unwrap_or(now + self.shelf_life),
        };
        bank.inventory.push(entry.clone());
        entry
    }

    /// Classify an entry.
    pub fn expiry_status(&self, entry: &InventoryEntry, now: DateTime<Utc>) -> ExpiryStatus {
        entry.expiry_status(now, self.urgent_days, self.warning_days)
    }

    /// Every entry of a bank with its classification.
    pub fn report(&self, bank: &BloodBank, now: DateTime<Utc>) -> Vec<InventoryLine> {
        bank.inventory
            .iter()
            .map(|entry| InventoryLine {
                entry: entry.clone(),
                days_until_expiry: entry.days_until_expiry(now),
                status: self.expiry_status(entry, now),
            })
            .collect()
    }
}

impl Default for InventoryPolicy {
    fn default() -> Self {
        Self::from_config(&InventoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use bloodlink_core::types::id::BankId;

    use super::*;

    fn bank() -> BloodBank {
        BloodBank {
            id: BankId::new(),
            name: "Red Cross Blood Bank".to_string(),
            address: "Red Cross Bhawan, Parliament Street".to_string(),
            pincode: Some("110001".to_string()),
            contact_number: "+91-11-23711551".to_string(),
            operating_hours: "24/7".to_string(),
            certification_number: "RC-BB-001".to_string(),
            inventory: Vec::new(),
        }
    }

    #[test]
    fn test_existing_entry_grows_and_keeps_expiry() {
        let policy = InventoryPolicy::default();
        let now = Utc::now();
        let mut bank = bank();
        let expiry = now + Duration::days(25);
        policy.add_units(&mut bank, BloodType::O_NEGATIVE, 8, Some(expiry), now);
        let entry = policy.add_units(
            &mut bank,
            BloodType::O_NEGATIVE,
            5,
            Some(now + Duration::days(3)),
            now,
        );
        assert_eq!(entry.units_available, 13);
        assert_eq!(entry.expiry_date, expiry);
        assert_eq!(bank.inventory.len(), 1);
    }

    #[test]
    fn test_new_entry_defaults_shelf_life() {
        let policy = InventoryPolicy::default();
        let now = Utc::now();
        let mut bank = bank();
        let entry = policy.add_units(&mut bank, BloodType::AB_POSITIVE, 2, None, now);
        assert_eq!(entry.expiry_date, now + Duration::days(30));
        assert_eq!(bank.total_units(), 2);
    }

    #[test]
    fn test_report_classifies_entries() {
        let policy = InventoryPolicy::default();
        let now = Utc::now();
        let mut bank = bank();
        let soon = now + Duration::days(5) + Duration::hours(1);
        policy.add_units(&mut bank, BloodType::O_NEGATIVE, 1, Some(soon), now);
        let report = policy.report(&bank, now);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].status, ExpiryStatus::Urgent);
        assert_eq!(report[0].days_until_expiry, 5);
    }
}
