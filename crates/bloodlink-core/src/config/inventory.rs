//! Blood bank inventory configuration.

use serde::{Deserialize, Serialize};

/// Expiry banding and shelf-life defaults for inventory entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Entries expiring within this many days are flagged urgent.
    #[serde(default = "default_urgent_days")]
    pub expiry_urgent_days: i64,
    /// Entries expiring within this many days are flagged with a warning.
    #[serde(default = "default_warning_days")]
    pub expiry_warning_days: i64,
    /// Shelf life applied to new entries added without an expiry date.
    #[serde(default = "default_shelf_life")]
    pub default_shelf_life_days: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            expiry_urgent_days: default_urgent_days(),
            expiry_warning_days: default_warning_days(),
            default_shelf_life_days: default_shelf_life(),
        }
    }
}

fn default_urgent_days() -> i64 {
    7
}

fn default_warning_days() -> i64 {
    14
}

fn default_shelf_life() -> i64 {
    30
}
