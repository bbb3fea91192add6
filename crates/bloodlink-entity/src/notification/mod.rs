//! Emergency notification entities.

pub mod model;
pub mod severity;

pub use model::{EmergencyNotification, PatientInfo};
pub use severity::NotificationSeverity;
