//! Emergency responder drafts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

/// Message used when a responder leaves out contact details.
pub const MISSING_RESPONDER: &str = "Please provide your name and phone number";

/// A donor answering an emergency request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ResponderDraft {
    /// Responder name (required).
    #[validate(custom(function = "not_blank", message = "Please provide your name and phone number"))]
    pub name: String,
    /// Responder phone (required).
    #[validate(custom(function = "not_blank", message = "Please provide your name and phone number"))]
    pub phone: String,
    /// Whether the responder can leave now.
    pub available_now: bool,
    /// How soon they can reach the hospital, free text.
    pub can_reach_in: Option<String>,
}
