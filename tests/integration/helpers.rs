//! Shared test helpers for integration tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::broadcast;

use bloodlink_core::config::AppConfig;
use bloodlink_core::events::DomainEvent;
use bloodlink_realtime::EventBus;
use bloodlink_service::validation::{DonorDraft, RequestDraft};
use bloodlink_service::BloodLinkService;

/// Test application context
pub struct TestApp {
    /// Service under test
    pub service: BloodLinkService,
    /// Bus the service publishes to
    pub bus: EventBus,
}

impl TestApp {
    /// Create a service with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a service with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let bus = EventBus::new(config.notifications.event_buffer_size);
        let service = BloodLinkService::new(&config, Arc::new(bus.clone()));
        Self { service, bus }
    }

    /// Subscribe to published events
    pub fn events(&self) -> broadcast::Receiver<DomainEvent> {
        self.bus.subscribe()
    }
}

/// Drain every event currently buffered on a receiver
pub fn drain(rx: &mut broadcast::Receiver<DomainEvent>) -> Vec<&'static str> {
    let mut labels = Vec::new();
    while let Ok(event) = rx.try_recv() {
        labels.push(event.label());
    }
    labels
}

/// A complete standard request
pub fn standard_request(patient: &str, group: &str, rh: &str, units: u32) -> RequestDraft {
    RequestDraft {
        patient_name: patient.to_string(),
        blood_group: Some(group.to_string()),
        rh_factor: Some(rh.to_string()),
        units_needed: Some(units),
        hospital_name: "City Hospital".to_string(),
        hospital_address: "123 Main St, Central Delhi".to_string(),
        contact_number: "+91-9876543210".to_string(),
        ..RequestDraft::default()
    }
}

/// A complete donor registration
pub fn donor(name: &str, group: &str, rh: &str, last_donation_days: Option<i64>) -> DonorDraft {
    DonorDraft {
        name: name.to_string(),
        blood_group: Some(group.to_string()),
        rh_factor: Some(rh.to_string()),
        phone: "+91-9876543213".to_string(),
        address: "Central Delhi".to_string(),
        age: Some(30),
        weight_kg: Some(60.0),
        last_donation: last_donation_days.map(|d| Utc::now() - Duration::days(d)),
        available: true,
        ..DonorDraft::default()
    }
}
