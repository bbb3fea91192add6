//! # bloodlink-service
//!
//! Domain logic for BloodLink. The pure functions (compatibility,
//! eligibility, triage, matching) are synchronous and total over well-typed
//! input. The [`BloodLinkService`] coordinator owns an injected state store,
//! validates intents at the boundary, and publishes domain events.

pub mod compatibility;
pub mod coordinator;
pub mod countdown;
pub mod eligibility;
pub mod inventory;
pub mod matching;
pub mod seed;
pub mod store;
pub mod triage;
pub mod validation;

pub use compatibility::compatible_donor_types;
pub use coordinator::{BloodLinkService, DonorRegistration, RequestSubmission};
pub use countdown::{CriticalAlert, TickOutcome};
pub use eligibility::EligibilityPolicy;
pub use seed::Scenario;
pub use store::{BloodLinkState, StateSnapshot, StateStore};
pub use triage::TriagePolicy;
