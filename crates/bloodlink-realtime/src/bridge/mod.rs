//! Bridges from the domain to event consumers.

pub mod event_bus;
