//! The countdown tick reducer.
//!
//! One tick is one simulated minute. A tick ages every active request,
//! drops those that reach zero, then recomputes the critical-present alert
//! from the survivors. Tiers are never recomputed here.

use serde::{Deserialize, Serialize};

use bloodlink_core::types::id::RequestId;
use bloodlink_entity::request::BloodRequest;
use bloodlink_realtime::NotificationFormatter;

use crate::store::BloodLinkState;

/// Raised when the set of critical requests changes to a non-empty set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalAlert {
    /// Critical requests present after the tick.
    pub request_ids: Vec<RequestId>,
    /// Banner text.
    pub message: String,
}

/// What one tick changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickOutcome {
    /// Sequence number of this tick, starting at 1.
    pub tick: u64,
    /// Requests that expired on this tick.
    pub expired: Vec<BloodRequest>,
    /// Active requests remaining after the tick.
    pub active: usize,
    /// Alert raised by this tick, if any.
    pub critical_alert: Option<CriticalAlert>,
}

/// Apply one tick.
pub fn apply_tick(state: &mut BloodLinkState) -> TickOutcome {
    state.ticks += 1;

    let mut expired = Vec::new();
    let mut survivors = Vec::with_capacity(state.requests.len());
    for mut request in state.requests.drain(..) {
        request.tick();
        if request.is_expired() {
            expired.push(request);
        } else {
            survivors.push(request);
        }
    }
    state.requests = survivors;

    let critical = state.critical_request_ids();
    let count = critical.len();
    let critical_alert = if state.critical_alert.observe(critical.clone()) {
        Some(CriticalAlert {
            request_ids: critical.into_iter().collect(),
            message: NotificationFormatter::critical_present_message(count),
        })
    } else {
        None
    };

    TickOutcome {
        tick: state.ticks,
        expired,
        active: state.requests.len(),
        critical_alert,
    }
}
