//! Required-field validation at the intent boundary.
//!
//! Drafts are what collaborators submit. They derive [`Validate`]; a failed
//! check becomes an [`AppError`] carrying the first field message, and the
//! intent is rejected before any state changes.

pub mod bank;
pub mod donor;
pub mod inventory;
pub mod request;
pub mod responder;

use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use bloodlink_core::error::AppError;

pub use bank::BankDraft;
pub use donor::DonorDraft;
pub use inventory::InventoryDraft;
pub use request::RequestDraft;
pub use responder::ResponderDraft;

/// Generic message for a missing required field.
pub const MISSING_FIELDS: &str = "Please fill in all required fields";

/// Validate a draft, mapping failures to a validation [`AppError`].
pub fn check<T: Validate>(draft: &T) -> Result<(), AppError> {
    draft.validate().map_err(into_app_error)
}

/// Convert validator output into a single human-readable error.
///
/// Fields are visited in name order so the reported message is stable.
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    let fields: BTreeMap<_, _> = errors.field_errors().into_iter().collect();
    let message = fields
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| MISSING_FIELDS.to_string());
    AppError::validation(message)
}

/// Reject empty or whitespace-only text.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Trim optional text, mapping blank to `None`.
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
