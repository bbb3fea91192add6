//! Injected in-memory state and the reducers that update it.

pub mod reducer;
pub mod state;

pub use state::{BloodLinkState, StateSnapshot, StateStore};
