//! # bloodlink-entity
//!
//! Domain entity models for BloodLink. Every struct in this crate is a
//! transient in-memory record or a domain value object; all of them derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod bank;
pub mod blood_type;
pub mod donor;
pub mod notification;
pub mod request;

pub use blood_type::{AboGroup, BloodType, RhFactor};
