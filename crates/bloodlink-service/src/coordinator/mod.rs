//! The coordinating service: intents in, events out.

pub mod outcome;
pub mod service;

pub use outcome::{DonorRegistration, RequestSubmission};
pub use service::BloodLinkService;
