//! Tick runner: the loop that advances the countdown once per period.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing;

use bloodlink_service::BloodLinkService;

/// Something that advances by one step per tick.
#[async_trait]
pub trait TickHandler: Send + Sync + 'static {
    /// Apply a single tick.
    async fn on_tick(&self);
}

#[async_trait]
impl TickHandler for BloodLinkService {
    async fn on_tick(&self) {
        let outcome = self.tick().await;
        if !outcome.expired.is_empty() {
            tracing::info!(
                tick = outcome.tick,
                expired = outcome.expired.len(),
                active = outcome.active,
                "Countdown removed expired requests"
            );
        }
    }
}

/// Drives a [`TickHandler`] on a fixed period until cancelled.
pub struct TickRunner {
    /// Handler invoked on every tick
    handler: Arc<dyn TickHandler>,
    /// Real-time period between ticks
    period: Duration,
}

impl std::fmt::Debug for TickRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickRunner")
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}

impl TickRunner {
    /// Create a new runner
    pub fn new(handler: Arc<dyn TickHandler>, period: Duration) -> Self {
        Self { handler, period }
    }

    /// The tick period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run until the cancel signal is received.
    ///
    /// The first tick fires one full period after the call. A tick that has
    /// started always finishes before the loop observes cancellation.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(period_ms = self.period.as_millis() as u64, "Countdown runner started");

        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks: u64 = 0;

        loop {
            tokio::select! {
                biased;
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        tracing::info!(ticks, "Countdown runner received shutdown signal");
                        break;
                    }
                }
                _ = interval.tick() => {
                    ticks += 1;
                    tracing::trace!(ticks, "Countdown tick");
                    self.handler.on_tick().await;
                }
            }
        }

        tracing::info!(ticks, "Countdown runner shut down complete");
    }
}
