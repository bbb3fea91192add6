//! Fluent construction of emergency notifications.

use chrono::Utc;

use bloodlink_core::types::id::{NotificationId, RequestId};
use bloodlink_entity::notification::{EmergencyNotification, NotificationSeverity, PatientInfo};

use super::priority;

/// Builder for [`EmergencyNotification`].
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    /// Notification being built.
    notification: EmergencyNotification,
}

impl NotificationBuilder {
    /// Start a notification with a severity and title.
    pub fn new(severity: NotificationSeverity, title: &str) -> Self {
        Self {
            notification: EmergencyNotification {
                id: NotificationId::new(),
                severity,
                title: title.to_string(),
                message: String::new(),
                timestamp: Utc::now(),
                action_required: priority::requires_action(severity),
                patient: None,
                request_id: None,
            },
        }
    }

    /// Set the body text.
    pub fn message(mut self, message: &str) -> Self {
        self.notification.message = message.to_string();
        self
    }

    /// Attach patient details.
    pub fn patient(mut self, patient: PatientInfo) -> Self {
        self.notification.patient = Some(patient);
        self
    }

    /// Link the notification to a request.
    pub fn request(mut self, request_id: RequestId) -> Self {
        self.notification.request_id = Some(request_id);
        self
    }

    /// Override the action-required flag.
    pub fn action_required(mut self, required: bool) -> Self {
        self.notification.action_required = required;
        self
    }

    /// Finish the notification.
    pub fn build(self) -> EmergencyNotification {
        self.notification
    }
}
