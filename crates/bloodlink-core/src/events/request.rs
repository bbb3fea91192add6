//! Blood-request domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events in the lifecycle of a blood request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestEvent {
    /// A request passed validation and joined the active set.
    Submitted {
        /// The request ID.
        request_id: Uuid,
        /// Canonical blood type needed (e.g. `"O-"`).
        blood_type: String,
        /// Units needed.
        units_needed: u32,
        /// Assigned criticality tier.
        criticality: String,
        /// Minutes left on the countdown.
        remaining_minutes: u32,
    },
    /// A request's tier was raised.
    Escalated {
        /// The request ID.
        request_id: Uuid,
        /// Tier before escalation.
        from: String,
        /// Tier after escalation.
        to: String,
    },
    /// The countdown reached zero and the request left the active set.
    Expired {
        /// The request ID.
        request_id: Uuid,
        /// The patient name, for the expiry notice.
        patient_name: String,
    },
    /// A request was marked fulfilled.
    Fulfilled {
        /// The request ID.
        request_id: Uuid,
    },
    /// A donor offered to help with a request.
    ResponseOffered {
        /// The request ID.
        request_id: Uuid,
        /// Responder's name.
        responder_name: String,
        /// Responder's phone number.
        responder_phone: String,
        /// Whether the responder can come right now.
        available_now: bool,
    },
}

impl RequestEvent {
    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submitted { .. } => "request.submitted",
            Self::Escalated { .. } => "request.escalated",
            Self::Expired { .. } => "request.expired",
            Self::Fulfilled { .. } => "request.fulfilled",
            Self::ResponseOffered { .. } => "request.response_offered",
        }
    }
}
