//! Scenario seeding.
//!
//! A scenario is a JSON document of drafts. Applying it replays every entry
//! through the normal intents, so seeded data passes the same validation,
//! triage, and eligibility rules as live input.

use std::path::Path;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use bloodlink_core::result::AppResult;
use bloodlink_entity::notification::NotificationSeverity;
use bloodlink_entity::request::{Criticality, EmergencyType, TimeWindow, Urgency};
use bloodlink_realtime::notification::builder::NotificationBuilder;

use crate::coordinator::BloodLinkService;
use crate::validation::{BankDraft, DonorDraft, InventoryDraft, RequestDraft};

/// A bank and its opening stock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankSeed {
    /// Bank identity.
    #[serde(flatten)]
    pub bank: BankDraft,
    /// Opening stock.
    #[serde(default)]
    pub inventory: Vec<InventoryDraft>,
}

/// A free-standing notification, e.g. a donation camp announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSeed {
    /// Severity.
    pub severity: NotificationSeverity,
    /// Title.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub message: String,
}

/// Counts of what a scenario created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    /// Banks registered.
    pub banks: usize,
    /// Inventory additions applied.
    pub inventory_entries: usize,
    /// Donors registered.
    pub donors: usize,
    /// Requests admitted.
    pub requests: usize,
    /// Notifications posted.
    pub notifications: usize,
}

/// Drafts to load into a fresh service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Blood banks with stock.
    pub banks: Vec<BankSeed>,
    /// Donor registrations.
    pub donors: Vec<DonorDraft>,
    /// Blood requests.
    pub requests: Vec<RequestDraft>,
    /// Standalone notifications.
    pub notifications: Vec<NotificationSeed>,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Replay every entry through the service's intents.
    ///
    /// Stops at the first rejected entry.
    pub async fn apply(&self, service: &BloodLinkService) -> AppResult<SeedSummary> {
        let mut summary = SeedSummary::default();

        for seed in &self.banks {
            let bank = service.register_bank(seed.bank.clone()).await?;
            summary.banks += 1;
            for draft in &seed.inventory {
                service.add_inventory(bank.id, draft.clone()).await?;
                summary.inventory_entries += 1;
            }
        }
        for draft in &self.donors {
            service.submit_donor(draft.clone()).await?;
            summary.donors += 1;
        }
        for draft in &self.requests {
            if service.submit_request(draft.clone()).await?.admitted {
                summary.requests += 1;
            }
        }
        for seed in &self.notifications {
            let notification = NotificationBuilder::new(seed.severity, &seed.title)
                .message(&seed.message)
                .build();
            service.post_notification(notification).await;
            summary.notifications += 1;
        }

        info!(
            banks = summary.banks,
            donors = summary.donors,
            requests = summary.requests,
            notifications = summary.notifications,
            "Scenario applied"
        );
        Ok(summary)
    }

    /// A small Delhi scenario: one bank, three donors, standard and
    /// emergency requests, and a donation camp announcement.
    pub fn demo() -> Self {
        let now = Utc::now();
        let stock = |group: &str, rh: &str, units: u32, days: i64| InventoryDraft {
            blood_group: Some(group.to_string()),
            rh_factor: Some(rh.to_string()),
            units: Some(units),
            expiry_date: Some(now + Duration::days(days)),
        };
        let donor = |name: &str, group: &str, rh: &str, age: u32, weight: f64, days_ago: i64, available: bool| {
            DonorDraft {
                name: name.to_string(),
                blood_group: Some(group.to_string()),
                rh_factor: Some(rh.to_string()),
                phone: "+91-9876543213".to_string(),
                address: "Central Delhi".to_string(),
                pincode: Some("110001".to_string()),
                age: Some(age),
                weight_kg: Some(weight),
                last_donation: Some(now - Duration::days(days_ago)),
                medical_conditions: String::new(),
                available,
            }
        };

        Self {
            banks: vec![BankSeed {
                bank: BankDraft {
                    name: "Red Cross Blood Bank".to_string(),
                    address: "Red Cross Bhawan, Parliament Street".to_string(),
                    pincode: Some("110001".to_string()),
                    contact_number: "+91-11-23711551".to_string(),
                    operating_hours: "24/7".to_string(),
                    certification_number: "RC-BB-001".to_string(),
                },
                inventory: vec![
                    stock("O", "positive", 25, 30),
                    stock("O", "negative", 8, 25),
                    stock("A", "positive", 15, 20),
                    stock("A", "negative", 5, 28),
                    stock("B", "positive", 12, 6),
                    stock("AB", "positive", 4, 12),
                ],
            }],
            donors: vec![
                donor("Arjun Singh", "O", "negative", 28, 70.0, 95, true),
                donor("Sneha Gupta", "AB", "positive", 32, 55.0, 120, true),
                donor("Rohit Mehta", "B", "positive", 26, 68.0, 45, false),
            ],
            requests: vec![
                RequestDraft {
                    patient_name: "Rajesh Kumar".to_string(),
                    blood_group: Some("O".to_string()),
                    rh_factor: Some("negative".to_string()),
                    units_needed: Some(3),
                    hospital_name: "AIIMS Emergency".to_string(),
                    hospital_address: "AIIMS, Ansari Nagar, New Delhi".to_string(),
                    contact_number: "+91-11-26588663".to_string(),
                    emergency: true,
                    emergency_type: Some(EmergencyType::Accident),
                    criticality: Some(Criticality::Critical),
                    remaining_minutes: Some(45),
                    distance_km: Some(2.3),
                    ..RequestDraft::default()
                },
                RequestDraft {
                    patient_name: "Priya Sharma".to_string(),
                    blood_group: Some("AB".to_string()),
                    rh_factor: Some("positive".to_string()),
                    units_needed: Some(2),
                    hospital_name: "Max Hospital Emergency".to_string(),
                    hospital_address: "Max Healthcare, Saket, New Delhi".to_string(),
                    contact_number: "+91-11-26925801".to_string(),
                    emergency: true,
                    emergency_type: Some(EmergencyType::Surgery),
                    time_window: Some(TimeWindow::TwoHours),
                    criticality: Some(Criticality::Severe),
                    remaining_minutes: Some(90),
                    distance_km: Some(4.7),
                    ..RequestDraft::default()
                },
                RequestDraft {
                    patient_name: "Amit Patel".to_string(),
                    blood_group: Some("B".to_string()),
                    rh_factor: Some("positive".to_string()),
                    units_needed: Some(3),
                    hospital_name: "Max Healthcare".to_string(),
                    hospital_address: "789 Nehru Place, East Delhi".to_string(),
                    pincode: Some("110019".to_string()),
                    contact_number: "+91-9876543212".to_string(),
                    urgency: Some(Urgency::Scheduled),
                    distance_km: Some(6.1),
                    ..RequestDraft::default()
                },
            ],
            notifications: vec![NotificationSeed {
                severity: NotificationSeverity::Info,
                title: "Blood Donation Camp".to_string(),
                message: "Voluntary blood donation camp tomorrow at Red Cross Blood Bank, 9 AM to 5 PM."
                    .to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bloodlink_core::config::AppConfig;
    use bloodlink_core::traits::NullEventSink;

    use super::*;

    fn service() -> BloodLinkService {
        BloodLinkService::new(&AppConfig::default(), Arc::new(NullEventSink))
    }

    #[tokio::test]
    async fn test_demo_scenario_applies() {
        let service = service();
        let summary = Scenario::demo().apply(&service).await.expect("apply");
        assert_eq!(summary.banks, 1);
        assert_eq!(summary.inventory_entries, 6);
        assert_eq!(summary.donors, 3);
        assert_eq!(summary.requests, 3);
        assert_eq!(summary.notifications, 1);

        let notifications = service.list_notifications().await;
        assert_eq!(notifications.len(), 3);
        assert!(notifications[0].is_critical());
    }

    #[tokio::test]
    async fn test_scenario_from_json() {
        let scenario = Scenario::from_json(
            r#"{
                "banks": [{
                    "name": "Lifeline Bank",
                    "inventory": [{"blood_group": "O", "rh_factor": "negative", "units": 4}]
                }],
                "donors": [{
                    "name": "Arjun", "blood_group": "O", "rh_factor": "negative",
                    "phone": "+91-1", "age": 30, "weight_kg": 60
                }]
            }"#,
        )
        .expect("parse");
        let service = service();
        let summary = scenario.apply(&service).await.expect("apply");
        assert_eq!(summary.banks, 1);
        assert_eq!(summary.inventory_entries, 1);
        assert_eq!(summary.donors, 1);
        assert_eq!(service.list_banks().await[0].total_units(), 4);
    }

    #[tokio::test]
    async fn test_invalid_entry_stops_seeding() {
        let scenario = Scenario {
            donors: vec![DonorDraft::default()],
            ..Scenario::default()
        };
        let err = scenario.apply(&service()).await.unwrap_err();
        assert!(err.is_validation());
    }
}
