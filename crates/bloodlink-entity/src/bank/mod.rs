//! Blood bank and inventory entities.

pub mod inventory;
pub mod model;

pub use inventory::{ExpiryStatus, InventoryEntry};
pub use model::BloodBank;
