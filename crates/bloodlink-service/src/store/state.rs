//! The transient state owned by one coordinator.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bloodlink_core::types::id::{BankId, DonorId, RequestId};
use bloodlink_entity::bank::BloodBank;
use bloodlink_entity::donor::Donor;
use bloodlink_entity::notification::EmergencyNotification;
use bloodlink_entity::request::BloodRequest;
use bloodlink_realtime::notification::dedup::CriticalSetTracker;
use bloodlink_realtime::NotificationCenter;

/// Everything the coordinator knows. Nothing here is persisted.
#[derive(Debug, Default, Clone)]
pub struct BloodLinkState {
    /// Active requests, in submission order. None has zero minutes left.
    pub requests: Vec<BloodRequest>,
    /// Requests completed by a bank, most recent last.
    pub fulfilled: Vec<BloodRequest>,
    /// Registered donors.
    pub donors: Vec<Donor>,
    /// Registered blood banks.
    pub banks: Vec<BloodBank>,
    /// Emergency notifications.
    pub notifications: NotificationCenter,
    /// Membership of the last raised critical-present alert.
    pub critical_alert: CriticalSetTracker,
    /// Ticks applied so far.
    pub ticks: u64,
}

impl BloodLinkState {
    /// Look up an active request.
    pub fn request(&self, id: RequestId) -> Option<&BloodRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Mutable access to an active request.
    pub fn request_mut(&mut self, id: RequestId) -> Option<&mut BloodRequest> {
        self.requests.iter_mut().find(|r| r.id == id)
    }

    /// Look up a donor.
    pub fn donor(&self, id: DonorId) -> Option<&Donor> {
        self.donors.iter().find(|d| d.id == id)
    }

    /// Mutable access to a donor.
    pub fn donor_mut(&mut self, id: DonorId) -> Option<&mut Donor> {
        self.donors.iter_mut().find(|d| d.id == id)
    }

    /// Look up a bank.
    pub fn bank(&self, id: BankId) -> Option<&BloodBank> {
        self.banks.iter().find(|b| b.id == id)
    }

    /// Mutable access to a bank.
    pub fn bank_mut(&mut self, id: BankId) -> Option<&mut BloodBank> {
        self.banks.iter_mut().find(|b| b.id == id)
    }

    /// Ids of active requests in the critical tier.
    pub fn critical_request_ids(&self) -> BTreeSet<RequestId> {
        self.requests
            .iter()
            .filter(|r| r.is_critical())
            .map(|r| r.id)
            .collect()
    }

    /// Copy out a serializable view.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            requests: self.requests.clone(),
            fulfilled: self.fulfilled.clone(),
            donors: self.donors.clone(),
            banks: self.banks.clone(),
            notifications: self.notifications.list().to_vec(),
            ticks: self.ticks,
        }
    }
}

/// Read-only copy of the state handed to collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Active requests in submission order.
    pub requests: Vec<BloodRequest>,
    /// Fulfilled requests.
    pub fulfilled: Vec<BloodRequest>,
    /// Registered donors.
    pub donors: Vec<Donor>,
    /// Registered banks.
    pub banks: Vec<BloodBank>,
    /// Notifications in insertion order.
    pub notifications: Vec<EmergencyNotification>,
    /// Ticks applied so far.
    pub ticks: u64,
}

/// Shared handle to the state. Writers are serialized by the lock.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    /// The guarded state.
    inner: Arc<RwLock<BloodLinkState>>,
}

impl StateStore {
    /// Create a store holding `state`.
    pub fn new(state: BloodLinkState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Acquire shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, BloodLinkState> {
        self.inner.read().await
    }

    /// Acquire exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, BloodLinkState> {
        self.inner.write().await
    }

    /// Copy out a serializable view.
    pub async fn snapshot(&self) -> StateSnapshot {
        self.inner.read().await.snapshot()
    }
}
