//! # bloodlink-core
//!
//! Core crate for BloodLink. Contains configuration schemas, typed
//! identifiers, domain events, the event sink trait, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other BloodLink crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
