//! Intent handling and queries over the shared state.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;
use bloodlink_core::events::{
    DomainEvent, DonorEvent, InventoryEvent, NotificationEvent, RequestEvent,
};
use bloodlink_core::result::AppResult;
use bloodlink_core::traits::EventSink;
use bloodlink_core::types::id::{BankId, DonorId, NotificationId, RequestId};
use bloodlink_entity::bank::BloodBank;
use bloodlink_entity::donor::{Donor, EligibilityVerdict};
use bloodlink_entity::notification::EmergencyNotification;
use bloodlink_entity::request::{BloodRequest, Criticality, RequestStatus};
use bloodlink_entity::BloodType;
use bloodlink_realtime::notification::priority;
use bloodlink_realtime::{Acknowledgement, CriticalPrompt, NotificationFormatter};

use super::outcome::{DonorRegistration, RequestSubmission};
use crate::compatibility;
use crate::countdown::{self, TickOutcome};
use crate::eligibility::EligibilityPolicy;
use crate::inventory::{InventoryLine, InventoryPolicy};
use crate::matching::{self, MatchReport};
use crate::store::reducer;
use crate::store::{StateSnapshot, StateStore};
use crate::triage::{self, TriageInput, TriagePolicy};
use crate::validation::{
    self, optional_text, BankDraft, DonorDraft, InventoryDraft, RequestDraft, ResponderDraft,
    MISSING_FIELDS,
};

/// Coordinates requests, donors, banks, and notifications.
///
/// All state lives in the injected [`StateStore`]. Every intent validates
/// its draft first, applies a reducer under the write lock, then publishes
/// the resulting events after the lock is released.
#[derive(Clone)]
pub struct BloodLinkService {
    /// Shared state.
    store: StateStore,
    /// Event destination.
    events: Arc<dyn EventSink>,
    /// Donor screening.
    eligibility: EligibilityPolicy,
    /// Request triage.
    triage: TriagePolicy,
    /// Stock keeping.
    inventory: InventoryPolicy,
}

impl fmt::Debug for BloodLinkService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloodLinkService")
            .field("store", &self.store)
            .field("eligibility", &self.eligibility)
            .field("triage", &self.triage)
            .field("inventory", &self.inventory)
            .finish_non_exhaustive()
    }
}

impl BloodLinkService {
    /// Create a service over an empty store.
    pub fn new(config: &AppConfig, events: Arc<dyn EventSink>) -> Self {
        Self::with_store(config, StateStore::default(), events)
    }

    /// Create a service over an existing store.
    pub fn with_store(config: &AppConfig, store: StateStore, events: Arc<dyn EventSink>) -> Self {
        Self {
            store,
            events,
            eligibility: EligibilityPolicy::from_config(&config.eligibility),
            triage: TriagePolicy::from_config(&config.triage),
            inventory: InventoryPolicy::from_config(&config.inventory),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    async fn emit(&self, events: Vec<DomainEvent>) {
        if events.is_empty() {
            return;
        }
        if let Err(e) = self.events.publish_all(events).await {
            warn!(error = %e, "Failed to publish domain events");
        }
    }

    fn reject(intent: &str, err: AppError) -> AppError {
        warn!(intent, error = %err, "Intent rejected");
        err
    }

    // ── Requests ─────────────────────────────────────────────────

    /// Submit a standard or emergency blood request.
    pub async fn submit_request(&self, draft: RequestDraft) -> AppResult<RequestSubmission> {
        draft.check().map_err(|e| Self::reject("submit_request", e))?;
        let blood_type = draft
            .blood_type()
            .map_err(|e| Self::reject("submit_request", e))?;
        let units_needed = draft
            .units_needed
            .ok_or_else(|| Self::reject("submit_request", AppError::validation(MISSING_FIELDS)))?;

        let kind = draft.kind();
        let criticality = self.triage.classify(&TriageInput {
            explicit: draft.criticality,
            kind,
            units_needed,
        });
        let remaining_minutes = self.triage.initial_minutes(&kind, draft.remaining_minutes);

        let request = BloodRequest {
            id: RequestId::new(),
            patient_name: draft.patient_name.trim().to_string(),
            blood_type,
            units_needed,
            hospital_name: draft.hospital_name.trim().to_string(),
            hospital_address: draft.hospital_address.trim().to_string(),
            pincode: optional_text(&draft.pincode),
            contact_number: draft.contact_number.trim().to_string(),
            notes: optional_text(&draft.notes),
            kind,
            criticality,
            posted_at: Utc::now(),
            remaining_minutes,
            distance_km: draft.distance_km.unwrap_or(0.0),
            status: RequestStatus::Pending,
        };

        let mut events = Vec::new();
        let mut prompt = None;
        let admitted = {
            let mut state = self.store.write().await;
            let admitted = reducer::admit_request(&mut state, request.clone());
            if admitted && (kind.is_emergency() || criticality.is_critical()) {
                let notification = NotificationFormatter::for_request(&request);
                events.push(added_event(&notification));
                prompt = reducer::apply_notify(&mut state, notification);
            }
            admitted
        };

        if !admitted {
            warn!(request_id = %request.id, "Request arrived with no time remaining, not posted");
            return Ok(RequestSubmission {
                request,
                admitted,
                acknowledgement: NotificationFormatter::request_not_admitted(),
                prompt: None,
            });
        }

        info!(
            request_id = %request.id,
            blood_type = %blood_type,
            units_needed,
            criticality = %criticality,
            remaining_minutes,
            emergency = kind.is_emergency(),
            "Blood request submitted"
        );

        events.insert(
            0,
            RequestEvent::Submitted {
                request_id: request.id.into_uuid(),
                blood_type: blood_type.canonical(),
                units_needed,
                criticality: criticality.to_string(),
                remaining_minutes,
            }
            .into(),
        );
        if let Some(p) = &prompt {
            events.push(prompt_event(p));
        }
        self.emit(events).await;

        Ok(RequestSubmission {
            request,
            admitted,
            acknowledgement: NotificationFormatter::request_submitted(kind.is_emergency()),
            prompt,
        })
    }

    /// Raise a request's tier. Promotion to critical posts a critical
    /// notification linked to the request.
    pub async fn escalate_request(
        &self,
        request_id: RequestId,
        to: Criticality,
    ) -> AppResult<Acknowledgement> {
        let mut events = Vec::new();
        let escalation = {
            let mut state = self.store.write().await;
            let escalation = reducer::apply_escalate(&mut state, request_id, to)
                .map_err(|e| Self::reject("escalate_request", e))?;
            if escalation.promoted_to_critical() {
                let notification = NotificationFormatter::critical_emergency(&escalation.request);
                events.push(added_event(&notification));
                if let Some(p) = reducer::apply_notify(&mut state, notification) {
                    events.push(prompt_event(&p));
                }
            }
            escalation
        };

        if escalation.changed() {
            info!(
                request_id = %request_id,
                from = %escalation.from,
                to = %escalation.to,
                "Request escalated"
            );
            events.insert(
                0,
                RequestEvent::Escalated {
                    request_id: request_id.into_uuid(),
                    from: escalation.from.to_string(),
                    to: escalation.to.to_string(),
                }
                .into(),
            );
        }
        self.emit(events).await;
        Ok(NotificationFormatter::request_escalated(escalation.to))
    }

    /// Offer to donate for a request. Acknowledgment only.
    pub async fn respond_to_request(
        &self,
        request_id: RequestId,
        responder: ResponderDraft,
    ) -> AppResult<Acknowledgement> {
        validation::check(&responder).map_err(|e| Self::reject("respond_to_request", e))?;
        if self.store.read().await.request(request_id).is_none() {
            return Err(Self::reject(
                "respond_to_request",
                AppError::not_found(format!("Request {request_id} not found")),
            ));
        }

        let phone = responder.phone.trim().to_string();
        info!(request_id = %request_id, available_now = responder.available_now, "Emergency response offered");
        self.emit(vec![
            RequestEvent::ResponseOffered {
                request_id: request_id.into_uuid(),
                responder_name: responder.name.trim().to_string(),
                responder_phone: phone.clone(),
                available_now: responder.available_now,
            }
            .into(),
        ])
        .await;
        Ok(NotificationFormatter::response_sent(&phone))
    }

    /// Mark a request fulfilled and remove it from the active set.
    pub async fn complete_request(&self, request_id: RequestId) -> AppResult<Acknowledgement> {
        let request = {
            let mut state = self.store.write().await;
            reducer::apply_complete(&mut state, request_id)
                .map_err(|e| Self::reject("complete_request", e))?
        };
        info!(request_id = %request.id, patient = %request.patient_name, "Request fulfilled");
        self.emit(vec![
            RequestEvent::Fulfilled {
                request_id: request.id.into_uuid(),
            }
            .into(),
        ])
        .await;
        Ok(NotificationFormatter::request_completed())
    }

    // ── Donors ───────────────────────────────────────────────────

    /// Register a donor and report their current eligibility.
    pub async fn submit_donor(&self, draft: DonorDraft) -> AppResult<DonorRegistration> {
        validation::check(&draft).map_err(|e| Self::reject("submit_donor", e))?;
        let blood_type = draft
            .blood_type()
            .map_err(|e| Self::reject("submit_donor", e))?;

        let now = Utc::now();
        let donor = Donor {
            id: DonorId::new(),
            name: draft.name.trim().to_string(),
            blood_type,
            phone: draft.phone.trim().to_string(),
            address: draft.address.trim().to_string(),
            pincode: optional_text(&draft.pincode),
            last_donation: draft.last_donation,
            available: draft.available,
            age: draft.age.unwrap_or(0),
            weight_kg: draft.weight_kg.unwrap_or(0.0),
            medical_conditions: draft.medical_conditions.trim().to_string(),
            registered_at: now,
        };
        let verdict = self.eligibility.evaluate(&donor, now);

        reducer::apply_register_donor(&mut *self.store.write().await, donor.clone());

        info!(
            donor_id = %donor.id,
            blood_type = %blood_type,
            eligible = verdict.eligible,
            reason = verdict.message(),
            "Donor registered"
        );
        self.emit(vec![
            DonorEvent::Registered {
                donor_id: donor.id.into_uuid(),
                blood_type: blood_type.canonical(),
                eligible: verdict.eligible,
                reason: verdict.message().to_string(),
            }
            .into(),
        ])
        .await;

        Ok(DonorRegistration {
            donor,
            verdict,
            acknowledgement: NotificationFormatter::registration(&verdict),
        })
    }

    /// Set a donor's availability flag.
    pub async fn toggle_availability(
        &self,
        donor_id: DonorId,
        available: bool,
    ) -> AppResult<Acknowledgement> {
        let changed = reducer::apply_toggle_availability(
            &mut *self.store.write().await,
            donor_id,
            available,
        )
        .map_err(|e| Self::reject("toggle_availability", e))?;

        if changed {
            info!(donor_id = %donor_id, available, "Donor availability changed");
            self.emit(vec![
                DonorEvent::AvailabilityChanged {
                    donor_id: donor_id.into_uuid(),
                    available,
                }
                .into(),
            ])
            .await;
        }
        Ok(NotificationFormatter::availability_updated(available))
    }

    /// Evaluate a donor snapshot now. Never cached.
    pub fn evaluate_eligibility(&self, donor: &Donor) -> EligibilityVerdict {
        self.eligibility.evaluate(donor, Utc::now())
    }

    /// Evaluate a registered donor now.
    pub async fn donor_eligibility(&self, donor_id: DonorId) -> AppResult<EligibilityVerdict> {
        let state = self.store.read().await;
        let donor = state
            .donor(donor_id)
            .ok_or_else(|| AppError::not_found(format!("Donor {donor_id} not found")))?;
        Ok(self.evaluate_eligibility(donor))
    }

    // ── Banks ────────────────────────────────────────────────────

    /// Register a blood bank with empty stock.
    pub async fn register_bank(&self, draft: BankDraft) -> AppResult<BloodBank> {
        validation::check(&draft).map_err(|e| Self::reject("register_bank", e))?;
        let bank = BloodBank {
            id: BankId::new(),
            name: draft.name.trim().to_string(),
            address: draft.address.trim().to_string(),
            pincode: optional_text(&draft.pincode),
            contact_number: draft.contact_number.trim().to_string(),
            operating_hours: draft.operating_hours.trim().to_string(),
            certification_number: draft.certification_number.trim().to_string(),
            inventory: Vec::new(),
        };
        reducer::apply_register_bank(&mut *self.store.write().await, bank.clone());
        info!(bank_id = %bank.id, name = %bank.name, "Blood bank registered");
        Ok(bank)
    }

    /// Add units of one blood type to a bank's stock.
    pub async fn add_inventory(
        &self,
        bank_id: BankId,
        draft: InventoryDraft,
    ) -> AppResult<Acknowledgement> {
        validation::check(&draft).map_err(|e| Self::reject("add_inventory", e))?;
        let blood_type = draft
            .blood_type()
            .map_err(|e| Self::reject("add_inventory", e))?;
        let units = draft
            .units
            .ok_or_else(|| Self::reject("add_inventory", AppError::validation(MISSING_FIELDS)))?;

        let entry = {
            let mut state = self.store.write().await;
            let bank = state.bank_mut(bank_id).ok_or_else(|| {
                Self::reject(
                    "add_inventory",
                    AppError::not_found(format!("Blood bank {bank_id} not found")),
                )
            })?;
            self.inventory
                .add_units(bank, blood_type, units, draft.expiry_date, Utc::now())
        };

        info!(
            bank_id = %bank_id,
            blood_type = %blood_type,
            units_added = units,
            units_available = entry.units_available,
            "Inventory updated"
        );
        self.emit(vec![
            InventoryEvent::UnitsAdded {
                bank_id: bank_id.into_uuid(),
                blood_type: blood_type.canonical(),
                units_added: units,
                units_available: entry.units_available,
                expiry_date: entry.expiry_date,
            }
            .into(),
        ])
        .await;
        Ok(NotificationFormatter::inventory_updated(units, blood_type))
    }

    /// A bank's stock with expiry classification.
    pub async fn inventory_report(&self, bank_id: BankId) -> AppResult<Vec<InventoryLine>> {
        let state = self.store.read().await;
        let bank = state
            .bank(bank_id)
            .ok_or_else(|| AppError::not_found(format!("Blood bank {bank_id} not found")))?;
        Ok(self.inventory.report(bank, Utc::now()))
    }

    // ── Notifications ────────────────────────────────────────────

    /// Post a notification directly, e.g. a donation camp announcement.
    pub async fn post_notification(
        &self,
        notification: EmergencyNotification,
    ) -> Option<CriticalPrompt> {
        let mut events = vec![added_event(&notification)];
        let prompt = reducer::apply_notify(&mut *self.store.write().await, notification);
        if let Some(p) = &prompt {
            events.push(prompt_event(p));
        }
        self.emit(events).await;
        prompt
    }

    /// Remove a notification. Dismissing an absent id is a no-op.
    pub async fn dismiss_notification(&self, id: NotificationId) -> Acknowledgement {
        let removed = reducer::apply_dismiss(&mut *self.store.write().await, id);
        match removed {
            Some(_) => {
                info!(notification_id = %id, "Notification dismissed");
                self.emit(vec![
                    NotificationEvent::Dismissed {
                        notification_id: id.into_uuid(),
                    }
                    .into(),
                ])
                .await;
            }
            None => debug!(notification_id = %id, "Dismiss of absent notification ignored"),
        }
        NotificationFormatter::notification_dismissed()
    }

    /// Respond to a notification. Acknowledgment only; nothing changes.
    pub async fn respond_to_notification(&self, id: NotificationId) -> AppResult<Acknowledgement> {
        let ack = self
            .store
            .read()
            .await
            .notifications
            .respond(id)
            .map_err(|e| Self::reject("respond_to_notification", e))?;
        info!(notification_id = %id, "Notification responded to");
        self.emit(vec![
            NotificationEvent::Responded {
                notification_id: id.into_uuid(),
            }
            .into(),
        ])
        .await;
        Ok(ack)
    }

    // ── Countdown ────────────────────────────────────────────────

    /// Apply one countdown tick and publish what it changed.
    pub async fn tick(&self) -> TickOutcome {
        let outcome = countdown::apply_tick(&mut *self.store.write().await);

        let mut events: Vec<DomainEvent> = Vec::new();
        for request in &outcome.expired {
            warn!(request_id = %request.id, patient = %request.patient_name, "Request expired");
            events.push(
                RequestEvent::Expired {
                    request_id: request.id.into_uuid(),
                    patient_name: request.patient_name.clone(),
                }
                .into(),
            );
        }
        if let Some(alert) = &outcome.critical_alert {
            warn!(count = alert.request_ids.len(), "{}", alert.message);
            events.push(
                NotificationEvent::CriticalRequestsPresent {
                    count: alert.request_ids.len(),
                    request_ids: alert.request_ids.iter().map(|id| id.into_uuid()).collect(),
                    message: alert.message.clone(),
                }
                .into(),
            );
        }
        debug!(tick = outcome.tick, active = outcome.active, "Countdown tick applied");
        self.emit(events).await;
        outcome
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Active requests, most critical first, then least time remaining.
    pub async fn list_active_requests(&self) -> Vec<BloodRequest> {
        let mut requests = self.store.read().await.requests.clone();
        triage::sort_by_priority(&mut requests);
        requests
    }

    /// Look up an active request.
    pub async fn get_request(&self, request_id: RequestId) -> AppResult<BloodRequest> {
        self.store
            .read()
            .await
            .request(request_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Request {request_id} not found")))
    }

    /// Notifications in insertion order.
    pub async fn list_notifications(&self) -> Vec<EmergencyNotification> {
        self.store.read().await.notifications.list().to_vec()
    }

    /// Notifications for display: most severe first, newest first within
    /// a severity.
    pub async fn list_notifications_by_priority(&self) -> Vec<EmergencyNotification> {
        let mut notifications = self.list_notifications().await;
        priority::sort_for_display(&mut notifications);
        notifications
    }

    /// Registered donors.
    pub async fn list_donors(&self) -> Vec<Donor> {
        self.store.read().await.donors.clone()
    }

    /// Registered banks.
    pub async fn list_banks(&self) -> Vec<BloodBank> {
        self.store.read().await.banks.clone()
    }

    /// Donor types that may supply `recipient`.
    pub fn compatible_donor_types(&self, recipient: BloodType) -> BTreeSet<BloodType> {
        compatibility::compatible_donor_types(recipient)
    }

    /// Donors and stock that can serve a request now.
    pub async fn match_request(&self, request_id: RequestId) -> AppResult<MatchReport> {
        let state = self.store.read().await;
        let request = state
            .request(request_id)
            .ok_or_else(|| AppError::not_found(format!("Request {request_id} not found")))?;
        let now = Utc::now();
        Ok(MatchReport {
            request_id,
            blood_type: request.blood_type,
            donors: matching::matching_donors(
                request.blood_type,
                &state.donors,
                &self.eligibility,
                now,
            ),
            stock: matching::matching_stock(request.blood_type, &state.banks),
        })
    }

    /// Banner text when critical requests are active.
    pub async fn critical_summary(&self) -> Option<String> {
        let count = self.store.read().await.critical_request_ids().len();
        (count > 0).then(|| NotificationFormatter::critical_present_message(count))
    }

    /// Serializable copy of all state.
    pub async fn snapshot(&self) -> StateSnapshot {
        self.store.snapshot().await
    }
}

fn added_event(notification: &EmergencyNotification) -> DomainEvent {
    NotificationEvent::Added {
        notification_id: notification.id.into_uuid(),
        severity: notification.severity.to_string(),
        title: notification.title.clone(),
    }
    .into()
}

fn prompt_event(prompt: &CriticalPrompt) -> DomainEvent {
    warn!(
        target_id = %prompt.target.id,
        triggered_by = %prompt.triggered_by,
        "Critical prompt raised"
    );
    NotificationEvent::CriticalPromptRaised {
        triggered_by: prompt.triggered_by.into_uuid(),
        target: prompt.target.id.into_uuid(),
        title: prompt.target.title.clone(),
        message: prompt.target.message.clone(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use bloodlink_core::error::ErrorKind;
    use bloodlink_core::events::EventPayload;
    use bloodlink_entity::request::{EmergencyType, TimeWindow};
    use bloodlink_realtime::EventBus;

    use super::*;

    fn service_with_bus() -> (BloodLinkService, EventBus) {
        let bus = EventBus::new(64);
        let service = BloodLinkService::new(&AppConfig::default(), Arc::new(bus.clone()));
        (service, bus)
    }

    fn emergency_draft(name: &str, window: TimeWindow) -> RequestDraft {
        RequestDraft {
            patient_name: name.to_string(),
            blood_group: Some("O".to_string()),
            rh_factor: Some("negative".to_string()),
            units_needed: Some(2),
            hospital_name: "AIIMS Emergency".to_string(),
            contact_number: "+91-11-26588663".to_string(),
            emergency: true,
            emergency_type: Some(EmergencyType::Surgery),
            time_window: Some(window),
            ..RequestDraft::default()
        }
    }

    fn donor_draft() -> DonorDraft {
        DonorDraft {
            name: "Arjun Singh".to_string(),
            blood_group: Some("O".to_string()),
            rh_factor: Some("negative".to_string()),
            phone: "+91-9876543213".to_string(),
            age: Some(30),
            weight_kg: Some(60.0),
            available: true,
            ..DonorDraft::default()
        }
    }

    #[tokio::test]
    async fn test_missing_fields_leave_state_unchanged() {
        let (service, _bus) = service_with_bus();
        let err = service
            .submit_request(RequestDraft::default())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message, "Please fill in all required fields");
        assert!(service.list_active_requests().await.is_empty());
        assert!(service.list_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn test_critical_emergency_raises_prompt() {
        let (service, bus) = service_with_bus();
        let mut rx = bus.subscribe();

        let submission = service
            .submit_request(emergency_draft("Rajesh Kumar", TimeWindow::ThirtyMinutes))
            .await
            .expect("submit");
        assert!(submission.admitted);
        assert_eq!(submission.request.criticality, Criticality::Critical);
        assert_eq!(submission.request.remaining_minutes, 30);
        assert_eq!(submission.acknowledgement.title, "🚨 EMERGENCY REQUEST SENT");
        let prompt = submission.prompt.expect("prompt");
        assert_eq!(prompt.target.request_id, Some(submission.request.id));

        let labels: Vec<&str> = [
            rx.recv().await.expect("event"),
            rx.recv().await.expect("event"),
            rx.recv().await.expect("event"),
        ]
        .iter()
        .map(DomainEvent::label)
        .collect();
        assert_eq!(
            labels,
            vec!["request.submitted", "notification.added", "notification.critical_prompt"]
        );
    }

    #[tokio::test]
    async fn test_second_critical_prompt_targets_first() {
        let (service, _bus) = service_with_bus();
        let first = service
            .submit_request(emergency_draft("first", TimeWindow::Immediate))
            .await
            .expect("submit");
        let second = service
            .submit_request(emergency_draft("second", TimeWindow::Immediate))
            .await
            .expect("submit");
        let first_target = first.prompt.expect("prompt").target.id;
        let second_prompt = second.prompt.expect("prompt");
        assert_eq!(second_prompt.target.id, first_target);
    }

    #[tokio::test]
    async fn test_non_critical_emergency_posts_urgent_notification() {
        let (service, _bus) = service_with_bus();
        let submission = service
            .submit_request(emergency_draft("Priya", TimeWindow::TwoHours))
            .await
            .expect("submit");
        assert_eq!(submission.request.criticality, Criticality::Urgent);
        assert!(submission.prompt.is_none());
        let notifications = service.list_notifications().await;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Urgent Blood Request");
    }

    #[tokio::test]
    async fn test_zero_minute_request_not_admitted() {
        let (service, _bus) = service_with_bus();
        let draft = RequestDraft {
            remaining_minutes: Some(0),
            ..emergency_draft("late", TimeWindow::Immediate)
        };
        let submission = service.submit_request(draft).await.expect("submit");
        assert!(!submission.admitted);
        assert!(service.list_active_requests().await.is_empty());
        assert!(service.list_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn test_escalation_to_critical_posts_notification() {
        let (service, _bus) = service_with_bus();
        let submission = service
            .submit_request(RequestDraft {
                emergency: false,
                ..emergency_draft("Amit", TimeWindow::TwoHours)
            })
            .await
            .expect("submit");
        assert!(service.list_notifications().await.is_empty());

        let ack = service
            .escalate_request(submission.request.id, Criticality::Critical)
            .await
            .expect("escalate");
        assert_eq!(ack.message, "Request is now marked as critical");
        let notifications = service.list_notifications().await;
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].is_critical());
    }

    #[tokio::test]
    async fn test_respond_to_request_requires_contact() {
        let (service, _bus) = service_with_bus();
        let submission = service
            .submit_request(emergency_draft("Rajesh", TimeWindow::Immediate))
            .await
            .expect("submit");

        let err = service
            .respond_to_request(submission.request.id, ResponderDraft::default())
            .await
            .unwrap_err();
        assert_eq!(err.message, "Please provide your name and phone number");

        let ack = service
            .respond_to_request(
                submission.request.id,
                ResponderDraft {
                    name: "Arjun".to_string(),
                    phone: "+91-9876543213".to_string(),
                    available_now: true,
                    can_reach_in: None,
                },
            )
            .await
            .expect("respond");
        assert_eq!(ack.message, "Hospital will contact you immediately at +91-9876543213");
    }

    #[tokio::test]
    async fn test_complete_leaves_inventory_alone() {
        let (service, _bus) = service_with_bus();
        let bank = service
            .register_bank(BankDraft {
                name: "Red Cross Blood Bank".to_string(),
                ..BankDraft::default()
            })
            .await
            .expect("bank");
        service
            .add_inventory(bank.id, InventoryDraft::for_type(BloodType::O_NEGATIVE, 8))
            .await
            .expect("stock");
        let submission = service
            .submit_request(emergency_draft("Rajesh", TimeWindow::Immediate))
            .await
            .expect("submit");

        let ack = service
            .complete_request(submission.request.id)
            .await
            .expect("complete");
        assert_eq!(ack.title, "Request Completed");
        assert!(service.list_active_requests().await.is_empty());
        assert_eq!(service.list_banks().await[0].total_units(), 8);
        assert_eq!(service.snapshot().await.fulfilled.len(), 1);
    }

    #[tokio::test]
    async fn test_add_inventory_merges_and_checks_bank() {
        let (service, _bus) = service_with_bus();
        let bank = service
            .register_bank(BankDraft {
                name: "Lifeline".to_string(),
                ..BankDraft::default()
            })
            .await
            .expect("bank");
        service
            .add_inventory(bank.id, InventoryDraft::for_type(BloodType::AB_POSITIVE, 3))
            .await
            .expect("stock");
        let ack = service
            .add_inventory(bank.id, InventoryDraft::for_type(BloodType::AB_POSITIVE, 2))
            .await
            .expect("stock");
        assert_eq!(ack.message, "Added 2 units of AB+ blood");

        let report = service.inventory_report(bank.id).await.expect("report");
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].entry.units_available, 5);

        let err = service
            .add_inventory(BankId::new(), InventoryDraft::for_type(BloodType::AB_POSITIVE, 1))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_donor_registration_and_matching() {
        let (service, _bus) = service_with_bus();
        let registration = service.submit_donor(donor_draft()).await.expect("donor");
        assert!(registration.verdict.eligible);
        assert_eq!(registration.acknowledgement.title, "Registration Successful");

        let submission = service
            .submit_request(emergency_draft("Rajesh", TimeWindow::Immediate))
            .await
            .expect("submit");
        let report = service
            .match_request(submission.request.id)
            .await
            .expect("match");
        assert_eq!(report.donors.len(), 1);

        service
            .toggle_availability(registration.donor.id, false)
            .await
            .expect("toggle");
        let report = service
            .match_request(submission.request.id)
            .await
            .expect("match");
        assert!(report.donors.is_empty());
    }

    #[tokio::test]
    async fn test_tick_publishes_expiry_and_alert() {
        let (service, bus) = service_with_bus();
        service
            .submit_request(RequestDraft {
                remaining_minutes: Some(2),
                ..emergency_draft("Rajesh", TimeWindow::Immediate)
            })
            .await
            .expect("submit");
        let mut rx = bus.subscribe();

        let first = service.tick().await;
        assert!(first.critical_alert.is_some());
        let event = rx.recv().await.expect("event");
        match event.payload {
            EventPayload::Notification(NotificationEvent::CriticalRequestsPresent {
                count,
                message,
                ..
            }) => {
                assert_eq!(count, 1);
                assert_eq!(message, "1 critical patient(s) need immediate blood donation");
            }
            other => panic!("unexpected payload: {other:?}"),
        }

        let second = service.tick().await;
        assert_eq!(second.expired.len(), 1);
        assert!(second.critical_alert.is_none());
        assert_eq!(rx.recv().await.expect("event").label(), "request.expired");
        assert!(service.critical_summary().await.is_none());
    }

    #[tokio::test]
    async fn test_dismiss_and_respond_notifications() {
        let (service, _bus) = service_with_bus();
        service
            .submit_request(emergency_draft("Rajesh", TimeWindow::Immediate))
            .await
            .expect("submit");
        let id = service.list_notifications().await[0].id;

        let ack = service.respond_to_notification(id).await.expect("respond");
        assert_eq!(ack.title, "Emergency Response Initiated");
        assert_eq!(service.list_notifications().await.len(), 1);

        service.dismiss_notification(id).await;
        service.dismiss_notification(id).await;
        assert!(service.list_notifications().await.is_empty());
        assert!(service.respond_to_notification(id).await.is_err());
    }

    #[tokio::test]
    async fn test_display_listing_puts_critical_first() {
        let (service, _bus) = service_with_bus();
        service
            .post_notification(NotificationFormatter::info("Blood Donation Camp", "Tomorrow, 9 AM"))
            .await;
        service
            .submit_request(emergency_draft("Priya", TimeWindow::TwoHours))
            .await
            .expect("submit");
        service
            .submit_request(emergency_draft("Rajesh", TimeWindow::Immediate))
            .await
            .expect("submit");

        let inserted: Vec<String> = service
            .list_notifications()
            .await
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(inserted[0], "Blood Donation Camp");

        let displayed = service.list_notifications_by_priority().await;
        assert_eq!(displayed.len(), 3);
        assert!(displayed[0].is_critical());
        assert_eq!(displayed[1].title, "Urgent Blood Request");
        assert_eq!(displayed[2].title, "Blood Donation Camp");
    }
}
