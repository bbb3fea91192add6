//! Countdown scheduler configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Countdown timer configuration. One tick is one simulated minute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Whether the countdown timer runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Real-time period between ticks in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl SchedulerConfig {
    /// The tick period as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_ms: default_tick_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_interval() -> u64 {
    60_000
}
