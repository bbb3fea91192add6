//! Blood request domain entities.

pub mod criticality;
pub mod kind;
pub mod model;
pub mod status;

pub use criticality::Criticality;
pub use kind::{EmergencyType, RequestKind, TimeWindow, Urgency};
pub use model::BloodRequest;
pub use status::RequestStatus;
