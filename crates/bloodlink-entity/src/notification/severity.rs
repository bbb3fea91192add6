//! Notification severity enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of an emergency notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    /// Life-threatening; raises an interrupting prompt.
    Critical,
    /// Needs attention soon.
    Urgent,
    /// Informational.
    Info,
}

impl NotificationSeverity {
    /// Return the severity as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for NotificationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
