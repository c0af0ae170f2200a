//! Request and response types for the submission endpoint

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::state::{FieldValue, FormInstance};

/// One scalar field of a submission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarField {
    pub name: String,
    pub value: String,
}

/// One binary part of a submission request
#[derive(Clone)]
pub struct BinaryPart {
    pub field: String,
    pub file_name: String,
    pub mime_hint: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for BinaryPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryPart")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("mime_hint", &self.mime_hint)
            .field("byte_size", &self.bytes.len())
            .finish()
    }
}

/// Multipart-style submission request: every scalar field value plus
/// zero-or-one binary part per file field.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    pub form: String,
    pub submitted_at: DateTime<Utc>,
    pub scalars: Vec<ScalarField>,
    pub attachments: Vec<BinaryPart>,
}

impl SubmissionPayload {
    /// Snapshot the current form state into a request
    pub fn from_form(form_key: &str, form: &FormInstance) -> Self {
        let mut scalars = Vec::new();
        let mut attachments = Vec::new();
        for (descriptor, value) in form.entries() {
            match value {
                FieldValue::Text(s) => scalars.push(ScalarField {
                    name: descriptor.name.to_string(),
                    value: s.clone(),
                }),
                FieldValue::Attachment(Some(attachment)) => attachments.push(BinaryPart {
                    field: descriptor.name.to_string(),
                    file_name: attachment.display_name.clone(),
                    mime_hint: attachment.mime_hint.clone(),
                    bytes: attachment.content.clone(),
                }),
                FieldValue::Attachment(None) => {}
            }
        }
        Self {
            form: form_key.to_string(),
            submitted_at: Utc::now(),
            scalars,
            attachments,
        }
    }

    /// JSON metadata part of the multipart request (binary content is
    /// referenced by size, carried separately).
    pub fn metadata_json(&self) -> serde_json::Value {
        serde_json::json!({
            "form": self.form,
            "submitted_at": self.submitted_at,
            "fields": self.scalars,
            "attachments": self
                .attachments
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "field": a.field,
                        "file_name": a.file_name,
                        "mime_hint": a.mime_hint,
                        "byte_size": a.bytes.len(),
                    })
                })
                .collect::<Vec<_>>(),
        })
    }
}

/// Field-level rejection returned by a real backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRejection {
    pub field: String,
    pub reason: String,
}

/// Failures delivering a submission
#[derive(Debug, Error)]
pub enum TransportError {
    /// Field-level rejections from a real backend; the simulation never
    /// produces these.
    #[allow(dead_code)]
    #[error("submission rejected: {}", format_rejections(.0))]
    Rejected(Vec<FieldRejection>),
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

fn format_rejections(rejections: &[FieldRejection]) -> String {
    rejections
        .iter()
        .map(|r| format!("{}: {}", r.field, r.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Acknowledgment for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAck {
    pub receipt_id: Uuid,
    pub received_at: DateTime<Utc>,
}
