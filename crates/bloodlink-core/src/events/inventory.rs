//! Blood-bank inventory domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to blood-bank stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InventoryEvent {
    /// Units were added to a bank's inventory.
    UnitsAdded {
        /// The bank ID.
        bank_id: Uuid,
        /// Canonical blood type.
        blood_type: String,
        /// Units added by this operation.
        units_added: u32,
        /// Units on hand after the addition.
        units_available: u32,
        /// Expiry date of the entry.
        expiry_date: DateTime<Utc>,
    },
}
