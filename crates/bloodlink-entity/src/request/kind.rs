//! Standard and emergency request classifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bloodlink_core::error::AppError;

/// Urgency picked on a standard (non-emergency) request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Needed right away.
    Immediate,
    /// Needed today.
    Urgent,
    /// Planned transfusion.
    Scheduled,
}

impl Urgency {
    /// Countdown length in minutes when the draft does not give one.
    pub fn default_minutes(&self) -> u32 {
        match self {
            Self::Immediate => 60,
            Self::Urgent => 120,
            Self::Scheduled => 240,
        }
    }

    /// Return the urgency as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Urgent => "urgent",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "urgent" => Ok(Self::Urgent),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(AppError::validation(format!("Unknown urgency '{other}'"))),
        }
    }
}

/// Cause of an emergency request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyType {
    /// Road or workplace accident.
    Accident,
    /// Emergency surgery.
    Surgery,
    /// Severe bleeding.
    Hemorrhage,
    /// Complications during delivery.
    Delivery,
    /// Anything else.
    Other,
}

impl EmergencyType {
    /// Trauma emergencies escalate triage by one tier.
    pub fn is_trauma(&self) -> bool {
        matches!(self, Self::Accident | Self::Hemorrhage)
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accident => "accident",
            Self::Surgery => "surgery",
            Self::Hemorrhage => "hemorrhage",
            Self::Delivery => "delivery",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmergencyType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accident" => Ok(Self::Accident),
            "surgery" => Ok(Self::Surgery),
            "hemorrhage" => Ok(Self::Hemorrhage),
            "delivery" => Ok(Self::Delivery),
            "other" => Ok(Self::Other),
            other => Err(AppError::validation(format!(
                "Unknown emergency type '{other}'"
            ))),
        }
    }
}

/// Critical time window of an emergency request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    /// Within 15 minutes.
    #[serde(rename = "immediate")]
    Immediate,
    /// Within 30 minutes.
    #[serde(rename = "30min")]
    ThirtyMinutes,
    /// Within one hour.
    #[serde(rename = "1hour")]
    OneHour,
    /// Within two hours.
    #[serde(rename = "2hours")]
    TwoHours,
}

impl TimeWindow {
    /// Length of the window in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            Self::Immediate => 15,
            Self::ThirtyMinutes => 30,
            Self::OneHour => 60,
            Self::TwoHours => 120,
        }
    }

    /// Return the window as its form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::ThirtyMinutes => "30min",
            Self::OneHour => "1hour",
            Self::TwoHours => "2hours",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "30min" => Ok(Self::ThirtyMinutes),
            "1hour" => Ok(Self::OneHour),
            "2hours" => Ok(Self::TwoHours),
            other => Err(AppError::validation(format!(
                "Unknown time window '{other}'"
            ))),
        }
    }
}

/// How a request was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RequestKind {
    /// Regular patient request.
    Standard {
        /// Urgency picked on the form, if any.
        urgency: Option<Urgency>,
    },
    /// Emergency-mode request.
    Emergency {
        /// Cause of the emergency, if given.
        emergency_type: Option<EmergencyType>,
        /// Critical time window, if given.
        window: Option<TimeWindow>,
    },
}

impl RequestKind {
    /// Check whether this was submitted in emergency mode.
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::Emergency { .. })
    }
}

impl Default for RequestKind {
    fn default() -> Self {
        Self::Standard { urgency: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_minutes() {
        assert_eq!(TimeWindow::Immediate.minutes(), 15);
        assert_eq!(TimeWindow::ThirtyMinutes.minutes(), 30);
        assert_eq!(TimeWindow::OneHour.minutes(), 60);
        assert_eq!(TimeWindow::TwoHours.minutes(), 120);
    }

    #[test]
    fn test_time_window_form_values() {
        assert_eq!("30min".parse::<TimeWindow>().ok(), Some(TimeWindow::ThirtyMinutes));
        assert_eq!("2HOURS".parse::<TimeWindow>().ok(), Some(TimeWindow::TwoHours));
        let json = serde_json::to_string(&TimeWindow::OneHour).expect("serialize");
        assert_eq!(json, "\"1hour\"");
    }

    #[test]
    fn test_trauma_types() {
        assert!(EmergencyType::Accident.is_trauma());
        assert!(EmergencyType::Hemorrhage.is_trauma());
        assert!(!EmergencyType::Surgery.is_trauma());
        assert!(!EmergencyType::Delivery.is_trauma());
    }

    #[test]
    fn test_request_kind_tagging() {
        let kind = RequestKind::Emergency {
            emergency_type: Some(EmergencyType::Accident),
            window: None,
        };
        let value = serde_json::to_value(kind).expect("serialize");
        assert_eq!(value["mode"], "emergency");
        assert_eq!(value["emergency_type"], "accident");
        assert!(kind.is_emergency());
        assert!(!RequestKind::default().is_emergency());
    }
}
