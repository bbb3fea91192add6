//! Severity mapping and display ordering.

use bloodlink_entity::notification::{EmergencyNotification, NotificationSeverity};
use bloodlink_entity::request::Criticality;

/// Display rank of a severity (higher = more important).
pub fn rank(severity: NotificationSeverity) -> u8 {
    match severity {
        NotificationSeverity::Critical => 3,
        NotificationSeverity::Urgent => 2,
        NotificationSeverity::Info => 1,
    }
}

/// Notification severity for a request tier.
pub fn severity_for(criticality: Criticality) -> NotificationSeverity {
    match criticality {
        Criticality::Critical => NotificationSeverity::Critical,
        Criticality::Severe | Criticality::Urgent => NotificationSeverity::Urgent,
    }
}

/// Whether a severity interrupts the user with a prompt.
pub fn interrupts(severity: NotificationSeverity) -> bool {
    matches!(severity, NotificationSeverity::Critical)
}

/// Whether notifications of this severity expect the reader to act.
pub fn requires_action(severity: NotificationSeverity) -> bool {
    !matches!(severity, NotificationSeverity::Info)
}

/// Sort for display: most severe first, newest first within a severity.
pub fn sort_for_display(notifications: &mut [EmergencyNotification]) {
    notifications.sort_by(|a, b| {
        rank(b.severity)
            .cmp(&rank(a.severity))
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
}
