//! The emergency notification center.
//!
//! Holds notifications in insertion order. Every insertion re-checks the
//! critical entries; the first time a critical id is seen it surfaces an
//! interrupting prompt aimed at the oldest critical entry still present.

use serde::{Deserialize, Serialize};

use bloodlink_core::error::AppError;
use bloodlink_core::result::AppResult;
use bloodlink_core::types::id::NotificationId;
use bloodlink_entity::notification::{EmergencyNotification, NotificationSeverity};

use super::dedup::SurfacedAlerts;
use super::formatter::{Acknowledgement, NotificationFormatter};
use super::priority;

/// An interrupting prompt raised by a new critical notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalPrompt {
    /// The notification whose insertion raised the prompt.
    pub triggered_by: NotificationId,
    /// The notification the prompt opens on.
    pub target: EmergencyNotification,
}

/// Ordered collection of emergency notifications.
#[derive(Debug, Default, Clone)]
pub struct NotificationCenter {
    /// Notifications, oldest first.
    entries: Vec<EmergencyNotification>,
    /// Critical ids that have already raised a prompt.
    surfaced: SurfacedAlerts,
}

impl NotificationCenter {
    /// Create an empty center.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification of any severity.
    ///
    /// Returns a prompt if the insertion surfaced a critical id for the
    /// first time.
    pub fn add(&mut self, notification: EmergencyNotification) -> Option<CriticalPrompt> {
        let triggered_by = notification.id;
        self.entries.push(notification);
        self.surface(triggered_by)
    }

    /// Append a notification as critical.
    pub fn add_critical(
        &mut self,
        mut notification: EmergencyNotification,
    ) -> Option<CriticalPrompt> {
        notification.severity = NotificationSeverity::Critical;
        notification.action_required = true;
        self.add(notification)
    }

    fn surface(&mut self, triggered_by: NotificationId) -> Option<CriticalPrompt> {
        let mut newly_surfaced = false;
        for entry in self
            .entries
            .iter()
            .filter(|n| priority::interrupts(n.severity))
        {
            if self.surfaced.mark(entry.id) {
                newly_surfaced = true;
            }
        }
        if !newly_surfaced {
            return None;
        }
        self.first_critical().cloned().map(|target| CriticalPrompt {
            triggered_by,
            target,
        })
    }

    /// Remove a notification. Absent ids are a no-op and return `None`.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<EmergencyNotification> {
        let idx = self.entries.iter().position(|n| n.id == id)?;
        Some(self.entries.remove(idx))
    }

    /// Acknowledge a response to a notification without changing state.
    pub fn respond(&self, id: NotificationId) -> AppResult<Acknowledgement> {
        let notification = self
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))?;
        Ok(NotificationFormatter::notification_response(notification))
    }

    /// Look up a notification.
    pub fn get(&self, id: NotificationId) -> Option<&EmergencyNotification> {
        self.entries.iter().find(|n| n.id == id)
    }

    /// The oldest critical notification.
    pub fn first_critical(&self) -> Option<&EmergencyNotification> {
        self.entries.iter().find(|n| n.is_critical())
    }

    /// Number of critical notifications.
    pub fn critical_count(&self) -> usize {
        self.entries.iter().filter(|n| n.is_critical()).count()
    }

    /// Notifications in insertion order.
    pub fn list(&self) -> &[EmergencyNotification] {
        &self.entries
    }

    /// Number of notifications held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the center is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
