//! Form domain layer
//!
//! The generic schema-driven engine shared by both intake workflows: field
//! schemas, per-instance state, validation policies and the submission
//! lifecycle, parameterized per use site by a [`FormDefinition`].

mod attachment;
mod definitions;
mod field;
mod form_state;
mod schema;
mod session;
mod submission;
mod validate;

pub use attachment::{load_attachment, Attachment, AttachmentError};
pub use definitions::{claim_form, customer_registration_form, FormDefinition};
pub use field::{FieldDescriptor, FieldKind, FieldValue};
pub use form_state::{FormError, FormInstance};
pub use schema::FieldSchema;
pub use session::FormSession;
pub use submission::{
    StatusLine, StatusTone, SubmissionController, SubmissionOutcome, SubmissionStatus,
    SubmitDisposition,
};
pub use validate::{validate_claim, validate_registration, ValidationResult, ValidatorFn};
