//! Donor domain entities.

pub mod eligibility;
pub mod model;

pub use eligibility::{EligibilityReason, EligibilityVerdict};
pub use model::{Donor, NO_PRIOR_DONATION_DAYS};
