//! Event sink trait for delivering domain events to collaborators.

use async_trait::async_trait;

use crate::events::DomainEvent;
use crate::result::AppResult;

/// Destination for domain events.
///
/// The coordinating service publishes every state change through this
/// trait after its state lock has been released. Implementations must not
/// block; a sink with no listeners should drop events silently.
#[async_trait]
pub trait EventSink: Send + Sync + 'static {
    /// Publish a single event.
    async fn publish(&self, event: DomainEvent) -> AppResult<()>;

    /// Publish a batch of events in order.
    async fn publish_all(&self, events: Vec<DomainEvent>) -> AppResult<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

#[async_trait]
impl EventSink for NullEventSink {
    async fn publish(&self, event: DomainEvent) -> AppResult<()> {
        tracing::trace!(event = event.label(), "Event discarded");
        Ok(())
    }
}
