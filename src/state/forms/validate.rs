//! Pre-submission validation policies

use super::form_state::FormInstance;

/// Verdict of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub accepted: bool,
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            accepted: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validation policy: pure over the current form state, never mutates it
pub type ValidatorFn = fn(&FormInstance) -> ValidationResult;

/// A claim needs either a description or an attached image.
pub fn validate_claim(form: &FormInstance) -> ValidationResult {
    if form.text("claim_description").is_empty() && form.attachment("claim_image").is_none() {
        ValidationResult::reject("Please enter claim details or upload an image.")
    } else {
        ValidationResult::accept()
    }
}

/// Registration requires the contact fields; vehicle, claim type and
/// uploads are optional.
pub fn validate_registration(form: &FormInstance) -> ValidationResult {
    const REQUIRED: [&str; 3] = ["name", "address", "email"];
    if REQUIRED.iter().any(|name| form.text(name).is_empty()) {
        ValidationResult::reject("Name, address and email are required.")
    } else {
        ValidationResult::accept()
    }
}
