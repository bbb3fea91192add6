//! Triage: assigning a criticality tier and countdown length to a request.
//!
//! The tier is decided once, at creation. The countdown never recomputes it;
//! [`time_urgency_band`] is a display aid only.

use std::cmp::Reverse;

use bloodlink_core::config::TriageConfig;
use bloodlink_entity::request::{BloodRequest, Criticality, RequestKind, TimeWindow, Urgency};

/// What the classifier looks at.
#[derive(Debug, Clone, Copy)]
pub struct TriageInput {
    /// Tier picked explicitly by the submitter, if any.
    pub explicit: Option<Criticality>,
    /// Standard or emergency details.
    pub kind: RequestKind,
    /// Units needed.
    pub units_needed: u32,
}

/// Triage thresholds.
#[derive(Debug, Clone)]
pub struct TriagePolicy {
    /// Units at or above which a request counts as a mass transfusion.
    mass_transfusion_units: u32,
    /// Countdown length when nothing else determines one.
    default_window_minutes: u32,
}

impl TriagePolicy {
    /// Build a policy from configuration.
    pub fn from_config(config: &TriageConfig) -> Self {
        Self {
            mass_transfusion_units: config.mass_transfusion_units,
            default_window_minutes: config.default_window_minutes,
        }
    }

    /// Assign a tier.
    ///
    /// An explicit tier is used as given. Otherwise the base tier comes from
    /// the emergency window or standard urgency, then trauma emergencies and
    /// mass transfusions each raise it by one step.
    pub fn classify(&self, input: &TriageInput) -> Criticality {
        if let Some(tier) = input.explicit {
            return tier;
        }
        let mut tier = base_tier(&input.kind);
        if let RequestKind::Emergency {
            emergency_type: Some(kind),
            ..
        } = input.kind
        {
            if kind.is_trauma() {
                tier = tier.escalated();
            }
        }
        if input.units_needed >= self.mass_transfusion_units {
            tier = tier.escalated();
        }
        tier
    }

    /// Countdown length for a new request.
    pub fn initial_minutes(&self, kind: &RequestKind, requested: Option<u32>) -> u32 {
        if let Some(minutes) = requested {
            return minutes;
        }
        match kind {
            RequestKind::Emergency {
                window: Some(window),
                ..
            } => window.minutes(),
            RequestKind::Standard {
                urgency: Some(urgency),
            } => urgency.default_minutes(),
            _ => self.default_window_minutes,
        }
    }
}

impl Default for TriagePolicy {
    fn default() -> Self {
        Self::from_config(&TriageConfig::default())
    }
}

fn base_tier(kind: &RequestKind) -> Criticality {
    match kind {
        RequestKind::Emergency { window, .. } => match window {
            None | Some(TimeWindow::Immediate) | Some(TimeWindow::ThirtyMinutes) => {
                Criticality::Critical
            }
            Some(TimeWindow::OneHour) => Criticality::Severe,
            Some(TimeWindow::TwoHours) => Criticality::Urgent,
        },
        RequestKind::Standard { urgency } => match urgency {
            Some(Urgency::Immediate) => Criticality::Critical,
            Some(Urgency::Urgent) => Criticality::Severe,
            Some(Urgency::Scheduled) | None => Criticality::Urgent,
        },
    }
}

/// Classify with the default thresholds.
pub fn classify(input: &TriageInput) -> Criticality {
    TriagePolicy::default().classify(input)
}

/// Display band for a remaining time: `<= 30` critical, `<= 60` severe,
/// otherwise urgent. Never written back to a request.
pub fn time_urgency_band(remaining_minutes: u32) -> Criticality {
    match remaining_minutes {
        0..=30 => Criticality::Critical,
        31..=60 => Criticality::Severe,
        _ => Criticality::Urgent,
    }
}

/// Sort requests most critical first, then by least time remaining.
pub fn sort_by_priority(requests: &mut [BloodRequest]) {
    requests.sort_by_key(|r| (Reverse(r.criticality), r.remaining_minutes));
}

#[cfg(test)]
mod tests {
    use bloodlink_entity::request::EmergencyType;

    use super::*;

    fn emergency(kind: Option<EmergencyType>, window: Option<TimeWindow>, units: u32) -> TriageInput {
        TriageInput {
            explicit: None,
            kind: RequestKind::Emergency {
                emergency_type: kind,
                window,
            },
            units_needed: units,
        }
    }

    fn standard(urgency: Option<Urgency>, units: u32) -> TriageInput {
        TriageInput {
            explicit: None,
            kind: RequestKind::Standard { urgency },
            units_needed: units,
        }
    }

    #[test]
    fn test_explicit_tier_wins() {
        let input = TriageInput {
            explicit: Some(Criticality::Urgent),
            ..emergency(Some(EmergencyType::Accident), Some(TimeWindow::Immediate), 10)
        };
        assert_eq!(classify(&input), Criticality::Urgent);
    }

    #[test]
    fn test_emergency_windows() {
        let surgery = Some(EmergencyType::Surgery);
        assert_eq!(classify(&emergency(surgery, Some(TimeWindow::Immediate), 1)), Criticality::Critical);
        assert_eq!(classify(&emergency(surgery, Some(TimeWindow::ThirtyMinutes), 1)), Criticality::Critical);
        assert_eq!(classify(&emergency(surgery, Some(TimeWindow::OneHour), 1)), Criticality::Severe);
        assert_eq!(classify(&emergency(surgery, Some(TimeWindow::TwoHours), 1)), Criticality::Urgent);
        assert_eq!(classify(&emergency(surgery, None, 1)), Criticality::Critical);
    }

    #[test]
    fn test_standard_urgencies() {
        assert_eq!(classify(&standard(Some(Urgency::Immediate), 1)), Criticality::Critical);
        assert_eq!(classify(&standard(Some(Urgency::Urgent), 1)), Criticality::Severe);
        assert_eq!(classify(&standard(Some(Urgency::Scheduled), 1)), Criticality::Urgent);
        assert_eq!(classify(&standard(None, 1)), Criticality::Urgent);
    }

    #[test]
    fn test_trauma_and_volume_escalate() {
        let hemorrhage = Some(EmergencyType::Hemorrhage);
        assert_eq!(classify(&emergency(hemorrhage, Some(TimeWindow::TwoHours), 1)), Criticality::Severe);
        assert_eq!(classify(&emergency(hemorrhage, Some(TimeWindow::TwoHours), 4)), Criticality::Critical);
        assert_eq!(classify(&standard(Some(Urgency::Scheduled), 4)), Criticality::Severe);
        assert_eq!(classify(&standard(Some(Urgency::Immediate), 6)), Criticality::Critical);
    }

    #[test]
    fn test_initial_minutes() {
        let policy = TriagePolicy::default();
        let window = RequestKind::Emergency {
            emergency_type: None,
            window: Some(TimeWindow::Immediate),
        };
        assert_eq!(policy.initial_minutes(&window, None), 15);
        assert_eq!(policy.initial_minutes(&window, Some(45)), 45);
        let scheduled = RequestKind::Standard {
            urgency: Some(Urgency::Scheduled),
        };
        assert_eq!(policy.initial_minutes(&scheduled, None), 240);
        assert_eq!(policy.initial_minutes(&RequestKind::default(), None), 120);
    }

    #[test]
    fn test_time_urgency_band() {
        assert_eq!(time_urgency_band(30), Criticality::Critical);
        assert_eq!(time_urgency_band(31), Criticality::Severe);
        assert_eq!(time_urgency_band(60), Criticality::Severe);
        assert_eq!(time_urgency_band(61), Criticality::Urgent);
    }
}
