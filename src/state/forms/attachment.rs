//! Binary attachments for file-kind fields

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// A single binary resource held by one file field.
///
/// The content buffer is owned exclusively by the form entry holding the
/// attachment; replacing or clearing the selection drops it.
#[derive(Clone)]
pub struct Attachment {
    pub display_name: String,
    pub byte_size: u64,
    pub mime_hint: String,
    pub content: Vec<u8>,
}

impl Attachment {
    /// Display text shown next to the field once a file is selected
    pub fn selected_label(&self) -> String {
        format!("Selected: {}", self.display_name)
    }
}

// Manual impl so logs never dump the content buffer
impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("display_name", &self.display_name)
            .field("byte_size", &self.byte_size)
            .field("mime_hint", &self.mime_hint)
            .finish()
    }
}

/// Errors reading a selected file into an attachment
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("no file name in path: {0}")]
    NoFileName(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read the file at `path` into an [`Attachment`].
///
/// Runs synchronously on the event thread: selection feedback must appear
/// immediately, never gated by the submission lifecycle.
pub fn load_attachment(path: &str) -> Result<Attachment, AttachmentError> {
    let trimmed = path.trim();
    let display_name = Path::new(trimmed)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| AttachmentError::NoFileName(trimmed.to_string()))?;

    let content = std::fs::read(trimmed).map_err(|source| AttachmentError::Read {
        path: trimmed.to_string(),
        source,
    })?;

    let byte_size = content.len() as u64;
    let mime_hint = mime_hint_for(&display_name).to_string();
    tracing::debug!(name = %display_name, byte_size, %mime_hint, "attachment loaded");

    Ok(Attachment {
        display_name,
        byte_size,
        mime_hint,
        content,
    })
}

/// Best-effort mime hint from the file extension
fn mime_hint_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
