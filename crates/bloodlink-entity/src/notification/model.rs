//! Emergency notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bloodlink_core::types::id::{NotificationId, RequestId};

use super::severity::NotificationSeverity;
use crate::blood_type::BloodType;

/// Patient details attached to an emergency notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    /// Blood type needed.
    pub blood_type: BloodType,
    /// Hospital name.
    pub hospital: String,
    /// Contact phone number.
    pub contact: String,
}

/// An entry in the notification center.
///
/// Removed only by explicit dismissal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyNotification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Severity.
    pub severity: NotificationSeverity,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the notification was created.
    pub timestamp: DateTime<Utc>,
    /// Whether the reader is expected to act.
    pub action_required: bool,
    /// Patient details, if any.
    pub patient: Option<PatientInfo>,
    /// The request this notification is about, if any.
    pub request_id: Option<RequestId>,
}

impl EmergencyNotification {
    /// Check whether this notification is critical.
    pub fn is_critical(&self) -> bool {
        self.severity == NotificationSeverity::Critical
    }
}
