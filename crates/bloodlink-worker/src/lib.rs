//! Countdown scheduling for BloodLink.
//!
//! This crate provides:
//! - A tick runner that drives a [`TickHandler`] on a fixed period
//! - A scheduler that owns the runner task and stops it cleanly

pub mod runner;
pub mod scheduler;

pub use runner::{TickHandler, TickRunner};
pub use scheduler::CountdownScheduler;
