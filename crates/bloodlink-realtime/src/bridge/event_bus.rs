//! In-memory broadcast bus for domain events.

use async_trait::async_trait;
use tokio::sync::broadcast;

use bloodlink_core::events::DomainEvent;
use bloodlink_core::result::AppResult;
use bloodlink_core::traits::EventSink;

/// Single-process pub/sub for [`DomainEvent`]s.
///
/// Publishing never blocks and never fails; events published while no
/// subscriber is attached are dropped.
#[derive(Debug, Clone)]
pub struct EventBus {
    /// Broadcast sender shared by all publishers.
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus that buffers up to `buffer_size` events per subscriber.
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size.max(1));
        Self { sender }
    }

    /// Subscribe to every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl EventSink for EventBus {
    async fn publish(&self, event: DomainEvent) -> AppResult<()> {
        let label = event.label();
        match self.sender.send(event) {
            Ok(receivers) => tracing::trace!(event = label, receivers, "Event published"),
            Err(_) => tracing::trace!(event = label, "Event dropped, no subscribers"),
        }
        Ok(())
    }
}
