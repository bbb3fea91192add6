//! Once-only surfacing of critical alerts.

use std::collections::{BTreeSet, HashSet};

use bloodlink_core::types::id::{NotificationId, RequestId};

/// Remembers which critical notifications have already interrupted the user.
///
/// Ids are never forgotten, so a surfaced id cannot trigger again even after
/// the notification is dismissed.
#[derive(Debug, Default, Clone)]
pub struct SurfacedAlerts {
    /// Every id that has raised a prompt.
    surfaced: HashSet<NotificationId>,
}

impl SurfacedAlerts {
    /// Mark an id as surfaced.
    ///
    /// Returns `true` if the id was not surfaced before.
    pub fn mark(&mut self, id: NotificationId) -> bool {
        self.surfaced.insert(id)
    }
}

/// Tracks the set of critical requests seen by the last countdown pass.
///
/// The "critical present" alert is keyed on set membership: it is raised
/// when the non-empty set differs from the last raised set, and re-armed
/// once the set drains to empty.
#[derive(Debug, Default, Clone)]
pub struct CriticalSetTracker {
    /// The set the alert was last raised for.
    last_raised: Option<BTreeSet<RequestId>>,
}

impl CriticalSetTracker {
    /// Record the current critical set.
    ///
    /// Returns `true` if the alert should be raised for this set.
    pub fn observe(&mut self, current: BTreeSet<RequestId>) -> bool {
        if current.is_empty() {
            self.last_raised = None;
            return false;
        }
        if self.last_raised.as_ref() == Some(&current) {
            return false;
        }
        self.last_raised = Some(current);
        true
    }
}
