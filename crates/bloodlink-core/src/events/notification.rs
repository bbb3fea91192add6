//! Emergency-notification domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events emitted by the notification center and the countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NotificationEvent {
    /// A notification was appended to the center.
    Added {
        /// The notification ID.
        notification_id: Uuid,
        /// Severity (`critical`, `urgent`, `info`).
        severity: String,
        /// Notification title.
        title: String,
    },
    /// A notification was removed by the user.
    Dismissed {
        /// The notification ID.
        notification_id: Uuid,
    },
    /// The user acknowledged a notification.
    Responded {
        /// The notification ID.
        notification_id: Uuid,
    },
    /// The interrupting response prompt must be shown.
    ///
    /// Raised once per distinct critical notification id; the prompt always
    /// targets the oldest critical entry.
    CriticalPromptRaised {
        /// The critical notification whose insertion triggered the prompt.
        triggered_by: Uuid,
        /// The notification the prompt displays.
        target: Uuid,
        /// Title to display.
        title: String,
        /// Message to display.
        message: String,
    },
    /// The set of active critical requests changed and is non-empty.
    CriticalRequestsPresent {
        /// Number of critical requests still active.
        count: usize,
        /// IDs of the critical requests.
        request_ids: Vec<Uuid>,
        /// Banner text.
        message: String,
    },
}

impl NotificationEvent {
    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Added { .. } => "notification.added",
            Self::Dismissed { .. } => "notification.dismissed",
            Self::Responded { .. } => "notification.responded",
            Self::CriticalPromptRaised { .. } => "notification.critical_prompt",
            Self::CriticalRequestsPresent { .. } => "notification.critical_present",
        }
    }
}
