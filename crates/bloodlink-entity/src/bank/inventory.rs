//! Inventory line items.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blood_type::BloodType;

/// How close an inventory entry is to expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// More than the warning horizon left.
    Normal,
    /// Within the warning horizon.
    Warning,
    /// Within the urgent horizon (or already past).
    Urgent,
}

impl ExpiryStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Units of one blood type held by a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Blood type stocked.
    pub blood_type: BloodType,
    /// Units on hand.
    pub units_available: u32,
    /// Expiry date of the stock.
    pub expiry_date: DateTime<Utc>,
}

impl InventoryEntry {
    /// Whole days until expiry, negative once expired.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.expiry_date - now).num_days()
    }

    /// Classify the entry against urgent and warning horizons in days.
    pub fn expiry_status(
        &self,
        now: DateTime<Utc>,
        urgent_days: i64,
        warning_days: i64,
    ) -> ExpiryStatus {
        let days = self.days_until_expiry(now);
        if days <= urgent_days {
            ExpiryStatus::Urgent
        } else if days <= warning_days {
            ExpiryStatus::Warning
        } else {
            ExpiryStatus::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn entry_expiring_in(days: i64, now: DateTime<Utc>) -> InventoryEntry {
        InventoryEntry {
            blood_type: BloodType::O_NEGATIVE,
            units_available: 8,
            expiry_date: now + Duration::days(days) + Duration::hours(1),
        }
    }

    #[test]
    fn test_expiry_status_boundaries() {
        let now = Utc::now();
        assert_eq!(entry_expiring_in(7, now).expiry_status(now, 7, 14), ExpiryStatus::Urgent);
        assert_eq!(entry_expiring_in(8, now).expiry_status(now, 7, 14), ExpiryStatus::Warning);
        assert_eq!(entry_expiring_in(14, now).expiry_status(now, 7, 14), ExpiryStatus::Warning);
        assert_eq!(entry_expiring_in(15, now).expiry_status(now, 7, 14), ExpiryStatus::Normal);
    }
}
