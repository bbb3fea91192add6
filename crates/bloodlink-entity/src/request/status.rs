//! Request lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fulfilment status of a blood request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Waiting for donors.
    #[default]
    Pending,
    /// At least one donor or bank has been matched.
    Matched,
    /// Blood has been delivered.
    Fulfilled,
}

impl RequestStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Matched => "matched",
            Self::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
