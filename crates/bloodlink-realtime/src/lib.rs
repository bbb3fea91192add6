//! # bloodlink-realtime
//!
//! Alerting layer for BloodLink. Provides:
//!
//! - The emergency notification center with critical prompt surfacing
//! - Tracking of already-surfaced alerts and the critical-request set
//! - Notification and acknowledgment formatting
//! - An in-memory broadcast event bus for rendering collaborators

pub mod bridge;
pub mod notification;

pub use bridge::event_bus::EventBus;
pub use notification::center::{CriticalPrompt, NotificationCenter};
pub use notification::formatter::{Acknowledgement, NotificationFormatter};
