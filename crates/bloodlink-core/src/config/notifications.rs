//! Notification delivery configuration.

use serde::{Deserialize, Serialize};

/// Settings for the in-memory event bus that feeds the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Capacity of the broadcast buffer; slow subscribers lag past this.
    #[serde(default = "default_buffer_size")]
    pub event_buffer_size: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: default_buffer_size(),
        }
    }
}

fn default_buffer_size() -> usize {
    256
}
