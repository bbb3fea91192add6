//! Countdown scheduler: owns the runner task and its shutdown channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing;

use bloodlink_core::config::SchedulerConfig;
use bloodlink_core::error::AppError;
use bloodlink_core::result::AppResult;

use crate::runner::{TickHandler, TickRunner};

/// A started runner task.
struct Running {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Starts and stops the countdown on a fixed real-time period.
pub struct CountdownScheduler {
    /// Runner shared with the spawned task
    runner: Arc<TickRunner>,
    /// Present while the runner task is alive
    running: Option<Running>,
}

impl std::fmt::Debug for CountdownScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownScheduler")
            .field("period", &self.runner.period())
            .field("running", &self.is_running())
            .finish()
    }
}

impl CountdownScheduler {
    /// Create a stopped scheduler.
    pub fn new(handler: Arc<dyn TickHandler>, period: Duration) -> Self {
        Self {
            runner: Arc::new(TickRunner::new(handler, period)),
            running: None,
        }
    }

    /// Create a stopped scheduler using the configured period.
    pub fn from_config(handler: Arc<dyn TickHandler>, config: &SchedulerConfig) -> Self {
        Self::new(handler, config.tick_interval())
    }

    /// Spawn the runner task.
    pub fn start(&mut self) -> AppResult<()> {
        if self.is_running() {
            return Err(AppError::conflict("Countdown scheduler is already running"));
        }
        if self.runner.period().is_zero() {
            return Err(AppError::configuration("Countdown period must be greater than zero"));
        }

        let (shutdown, rx) = watch::channel(false);
        let runner = Arc::clone(&self.runner);
        let handle = tokio::spawn(async move { runner.run(rx).await });
        self.running = Some(Running { shutdown, handle });

        tracing::info!(
            period_ms = self.runner.period().as_millis() as u64,
            "Countdown scheduler started"
        );
        Ok(())
    }

    /// Signal the runner and wait for it to exit.
    ///
    /// No tick is applied after this returns. Stopping a stopped scheduler
    /// is a no-op.
    pub async fn stop(&mut self) -> AppResult<()> {
        let Some(Running { shutdown, handle }) = self.running.take() else {
            return Ok(());
        };
        let _ = shutdown.send(true);
        handle
            .await
            .map_err(|e| AppError::internal(format!("Countdown runner task failed: {e}")))?;

        tracing::info!("Countdown scheduler shut down");
        Ok(())
    }

    /// Whether the runner task is alive.
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|r| !r.handle.is_finished())
    }
}

impl Drop for CountdownScheduler {
    fn drop(&mut self) {
        if let Some(Running { shutdown, handle }) = self.running.take() {
            let _ = shutdown.send(true);
            handle.abort();
        }
    }
}
