//! Notification and acknowledgment text.

use serde::{Deserialize, Serialize};

use bloodlink_core::error::AppError;
use bloodlink_entity::donor::EligibilityVerdict;
use bloodlink_entity::notification::{EmergencyNotification, NotificationSeverity, PatientInfo};
use bloodlink_entity::request::{BloodRequest, Criticality};
use bloodlink_entity::BloodType;

use super::builder::NotificationBuilder;
use super::priority;

/// Title used for every critical emergency notification and alert.
pub const CRITICAL_TITLE: &str = "🚨 CRITICAL BLOOD EMERGENCY";

/// A toast-style acknowledgment of an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// `false` when the intent was rejected.
    pub success: bool,
}

impl Acknowledgement {
    fn ok(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            success: true,
        }
    }

    /// Acknowledge a rejected intent.
    pub fn rejected(err: &AppError) -> Self {
        let title = if err.is_validation() {
            "Missing Information"
        } else {
            "Request Failed"
        };
        Self {
            title: title.to_string(),
            message: err.message.clone(),
            success: false,
        }
    }
}

/// Formats notifications and acknowledgments for common events.
pub struct NotificationFormatter;

impl NotificationFormatter {
    /// Patient details for a request.
    pub fn patient_info(request: &BloodRequest) -> PatientInfo {
        PatientInfo {
            blood_type: request.blood_type,
            hospital: request.hospital_name.clone(),
            contact: request.contact_number.clone(),
        }
    }

    /// Critical emergency notification for a request.
    pub fn critical_emergency(request: &BloodRequest) -> EmergencyNotification {
        NotificationBuilder::new(NotificationSeverity::Critical, CRITICAL_TITLE)
            .message(&format!(
                "{} blood urgently needed at {}. Patient in critical condition.",
                request.blood_type, request.hospital_name
            ))
            .patient(Self::patient_info(request))
            .request(request.id)
            .build()
    }

    /// Urgent notification for a non-critical request.
    pub fn urgent_request(request: &BloodRequest) -> EmergencyNotification {
        NotificationBuilder::new(NotificationSeverity::Urgent, "Urgent Blood Request")
            .message(&format!(
                "{} blood needed at {} within {}.",
                request.blood_type,
                request.hospital_name,
                format_window(request.remaining_minutes)
            ))
            .patient(Self::patient_info(request))
            .request(request.id)
            .build()
    }

    /// Notification matching the request's tier.
    pub fn for_request(request: &BloodRequest) -> EmergencyNotification {
        match priority::severity_for(request.criticality) {
            NotificationSeverity::Critical => Self::critical_emergency(request),
            _ => Self::urgent_request(request),
        }
    }

    /// Informational notification.
    pub fn info(title: &str, message: &str) -> EmergencyNotification {
        NotificationBuilder::new(NotificationSeverity::Info, title)
            .message(message)
            .build()
    }

    /// Banner text for the countdown's critical-present alert.
    pub fn critical_present_message(count: usize) -> String {
        format!("{count} critical patient(s) need immediate blood donation")
    }

    /// Acknowledge a submitted request.
    pub fn request_submitted(emergency: bool) -> Acknowledgement {
        if emergency {
            Acknowledgement::ok(
                "🚨 EMERGENCY REQUEST SENT",
                "All nearby donors and blood banks have been alerted immediately",
            )
        } else {
            Acknowledgement::ok(
                "Blood Request Submitted",
                "Your request has been sent to nearby donors and blood banks",
            )
        }
    }

    /// Acknowledge a request that had no time left when it arrived.
    pub fn request_not_admitted() -> Acknowledgement {
        Acknowledgement {
            title: "Request Not Posted".to_string(),
            message: "The request had no time remaining".to_string(),
            success: false,
        }
    }

    /// Acknowledge a response to a notification.
    pub fn notification_response(notification: &EmergencyNotification) -> Acknowledgement {
        match notification.patient {
            Some(_) => Acknowledgement::ok(
                "Emergency Response Initiated",
                "Hospital has been notified of your availability",
            ),
            None => Acknowledgement::ok("Response Noted", "Thank you for your response"),
        }
    }

    /// Acknowledge a donor offering to help with a request.
    pub fn response_sent(phone: &str) -> Acknowledgement {
        Acknowledgement::ok(
            "Emergency Response Sent!",
            format!("Hospital will contact you immediately at {phone}"),
        )
    }

    /// Acknowledge a dismissal.
    pub fn notification_dismissed() -> Acknowledgement {
        Acknowledgement::ok("Notification Dismissed", "The notification has been removed")
    }

    /// Acknowledge an inventory addition.
    pub fn inventory_updated(units: u32, blood_type: BloodType) -> Acknowledgement {
        Acknowledgement::ok(
            "Inventory Updated",
            format!("Added {units} units of {blood_type} blood"),
        )
    }

    /// Acknowledge a completed request.
    pub fn request_completed() -> Acknowledgement {
        Acknowledgement::ok(
            "Request Completed",
            "Blood request has been marked as fulfilled",
        )
    }

    /// Acknowledge an escalation.
    pub fn request_escalated(to: Criticality) -> Acknowledgement {
        Acknowledgement::ok(
            "Request Escalated",
            format!("Request is now marked as {to}"),
        )
    }

    /// Acknowledge a donor registration with its eligibility verdict.
    pub fn registration(verdict: &EligibilityVerdict) -> Acknowledgement {
        let title = if verdict.eligible {
            "Registration Successful"
        } else {
            "Registration Noted"
        };
        Acknowledgement::ok(title, verdict.message())
    }

    /// Acknowledge an availability toggle.
    pub fn availability_updated(available: bool) -> Acknowledgement {
        let message = if available {
            "You are now marked as available to donate"
        } else {
            "You are now marked as unavailable"
        };
        Acknowledgement::ok("Availability Updated", message)
    }
}

/// Human form of a countdown, e.g. `"2 hours"` or `"45 minutes"`.
pub fn format_window(minutes: u32) -> String {
    match minutes {
        60 => "1 hour".to_string(),
        m if m > 60 && m % 60 == 0 => format!("{} hours", m / 60),
        1 => "1 minute".to_string(),
        m => format!("{m} minutes"),
    }
}
