//! Reducer-style state updates.
//!
//! Each function applies one intent to a `&mut BloodLinkState` and returns
//! what changed. They do no I/O and publish nothing; the coordinator turns
//! the returned outcomes into events.

use bloodlink_core::error::AppError;
use bloodlink_core::types::id::{DonorId, NotificationId, RequestId};
use bloodlink_entity::bank::BloodBank;
use bloodlink_entity::donor::Donor;
use bloodlink_entity::notification::EmergencyNotification;
use bloodlink_entity::request::{BloodRequest, Criticality, RequestStatus};
use bloodlink_realtime::CriticalPrompt;

use super::state::BloodLinkState;

/// Result of raising a request's tier.
#[derive(Debug, Clone)]
pub struct Escalation {
    /// Tier before the change.
    pub from: Criticality,
    /// Tier after the change.
    pub to: Criticality,
    /// The request after the change.
    pub request: BloodRequest,
}

impl Escalation {
    /// Whether the tier actually changed.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// Whether this escalation promoted the request to critical.
    pub fn promoted_to_critical(&self) -> bool {
        self.changed() && self.to.is_critical()
    }
}

/// Add a request to the active set.
///
/// A request with no time remaining is not admitted; returns whether it was.
pub fn admit_request(state: &mut BloodLinkState, request: BloodRequest) -> bool {
    if request.is_expired() {
        return false;
    }
    state.requests.push(request);
    true
}

/// Append a notification, returning a prompt if one is raised.
pub fn apply_notify(
    state: &mut BloodLinkState,
    notification: EmergencyNotification,
) -> Option<CriticalPrompt> {
    if notification.is_critical() {
        state.notifications.add_critical(notification)
    } else {
        state.notifications.add(notification)
    }
}

/// Remove a notification. Absent ids are a no-op.
pub fn apply_dismiss(
    state: &mut BloodLinkState,
    id: NotificationId,
) -> Option<EmergencyNotification> {
    state.notifications.dismiss(id)
}

/// Register a donor.
pub fn apply_register_donor(state: &mut BloodLinkState, donor: Donor) {
    state.donors.push(donor);
}

/// Register a bank.
pub fn apply_register_bank(state: &mut BloodLinkState, bank: BloodBank) {
    state.banks.push(bank);
}

/// Set a donor's availability flag. Returns whether it changed.
pub fn apply_toggle_availability(
    state: &mut BloodLinkState,
    id: DonorId,
    available: bool,
) -> Result<bool, AppError> {
    let donor = state
        .donor_mut(id)
        .ok_or_else(|| AppError::not_found(format!("Donor {id} not found")))?;
    let changed = donor.available != available;
    donor.available = available;
    Ok(changed)
}

/// Raise a request's tier. Lowering is rejected; the same tier is a no-op.
pub fn apply_escalate(
    state: &mut BloodLinkState,
    id: RequestId,
    to: Criticality,
) -> Result<Escalation, AppError> {
    let request = state
        .request_mut(id)
        .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))?;
    let from = request.criticality;
    if to < from {
        return Err(AppError::conflict(format!(
            "Request is already {from}; tiers are never lowered"
        )));
    }
    request.criticality = to;
    Ok(Escalation {
        from,
        to,
        request: request.clone(),
    })
}

/// Mark a request fulfilled and move it out of the active set.
///
/// Bank inventory is left untouched.
pub fn apply_complete(state: &mut BloodLinkState, id: RequestId) -> Result<BloodRequest, AppError> {
    let idx = state
        .requests
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))?;
    let mut request = state.requests.remove(idx);
    request.status = RequestStatus::Fulfilled;
    state.fulfilled.push(request.clone());
    Ok(request)
}
