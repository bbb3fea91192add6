//! Results returned by coordinator intents.

use serde::{Deserialize, Serialize};

use bloodlink_entity::donor::{Donor, EligibilityVerdict};
use bloodlink_entity::request::BloodRequest;
use bloodlink_realtime::{Acknowledgement, CriticalPrompt};

/// Result of submitting a blood request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSubmission {
    /// The request as created.
    pub request: BloodRequest,
    /// `false` when the request had no time left and was not posted.
    pub admitted: bool,
    /// Toast for the submitter.
    pub acknowledgement: Acknowledgement,
    /// Interrupting prompt raised by the submission, if any.
    pub prompt: Option<CriticalPrompt>,
}

/// Result of registering a donor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorRegistration {
    /// The registered donor.
    pub donor: Donor,
    /// Eligibility at registration time. Not stored on the donor.
    pub verdict: EligibilityVerdict,
    /// Toast for the donor.
    pub acknowledgement: Acknowledgement,
}
