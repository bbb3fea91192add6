//! Core type definitions used across the BloodLink workspace.

pub mod id;

pub use id::*;
