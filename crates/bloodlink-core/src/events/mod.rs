//! Domain events emitted by BloodLink intents and the countdown.
//!
//! Events are published through an [`EventSink`](crate::traits::EventSink)
//! and consumed by the rendering collaborator (prompts, toasts, banners)
//! and by the audit log.

pub mod donor;
pub mod inventory;
pub mod notification;
pub mod request;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use donor::DonorEvent;
pub use inventory::InventoryEvent;
pub use notification::NotificationEvent;
pub use request::RequestEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A blood-request event.
    Request(RequestEvent),
    /// A donor event.
    Donor(DonorEvent),
    /// A blood-bank inventory event.
    Inventory(InventoryEvent),
    /// An emergency-notification event.
    Notification(NotificationEvent),
}

impl DomainEvent {
    /// Create a new domain event stamped with the current time.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match &self.payload {
            EventPayload::Request(e) => e.label(),
            EventPayload::Donor(e) => e.label(),
            EventPayload::Inventory(_) => "inventory.units_added",
            EventPayload::Notification(e) => e.label(),
        }
    }
}

impl From<RequestEvent> for DomainEvent {
    fn from(event: RequestEvent) -> Self {
        Self::new(EventPayload::Request(event))
    }
}

impl From<DonorEvent> for DomainEvent {
    fn from(event: DonorEvent) -> Self {
        Self::new(EventPayload::Donor(event))
    }
}

impl From<InventoryEvent> for DomainEvent {
    fn from(event: InventoryEvent) -> Self {
        Self::new(EventPayload::Inventory(event))
    }
}

impl From<NotificationEvent> for DomainEvent {
    fn from(event: NotificationEvent) -> Self {
        Self::new(EventPayload::Notification(event))
    }
}
