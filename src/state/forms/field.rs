//! Form field descriptors and value objects

use super::attachment::Attachment;

/// Input kind of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultilineText,
    File,
}

/// Immutable description of one form field.
///
/// Ordering within a [`super::FieldSchema`] defines render and tab order;
/// labels are stored here rather than re-derived from the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a single-line text field descriptor
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    /// Create a multi-line text field descriptor
    pub const fn multiline(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::MultilineText,
        }
    }

    /// Create a file attachment field descriptor
    pub const fn file(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::File,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Attachment(Option<Attachment>),
}

impl FieldValue {
    /// Empty default for a field of the given kind
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::MultilineText => FieldValue::Text(String::new()),
            FieldKind::File => FieldValue::Attachment(None),
        }
    }

    /// Get the text value (returns empty string for attachment fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Attachment(_) => "",
        }
    }

    /// Get the held attachment, if any
    pub fn attachment(&self) -> Option<&Attachment> {
        match self {
            FieldValue::Attachment(a) => a.as_ref(),
            FieldValue::Text(_) => None,
        }
    }

    /// True when the value is at its empty default
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Attachment(a) => a.is_none(),
        }
    }

    /// Whether this value shape is storable under the given descriptor kind
    pub fn matches_kind(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Text | FieldKind::MultilineText)
                | (FieldValue::Attachment(_), FieldKind::File)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_default_for_text_kinds() {
        assert_eq!(FieldValue::empty(FieldKind::Text).as_text(), "");
        assert_eq!(FieldValue::empty(FieldKind::MultilineText).as_text(), "");
    }

    #[test]
    fn test_empty_default_for_file_kind() {
        let value = FieldValue::empty(FieldKind::File);
        assert!(value.attachment().is_none());
        assert!(value.is_empty());
    }

    #[test]
    fn test_as_text_on_attachment_is_empty() {
        let value = FieldValue::Attachment(None);
        assert_eq!(value.as_text(), "");
    }

    #[test]
    fn test_matches_kind() {
        let text = FieldValue::Text("x".to_string());
        assert!(text.matches_kind(FieldKind::Text));
        assert!(text.matches_kind(FieldKind::MultilineText));
        assert!(!text.matches_kind(FieldKind::File));

        let attachment = FieldValue::Attachment(None);
        assert!(attachment.matches_kind(FieldKind::File));
        assert!(!attachment.matches_kind(FieldKind::Text));
    }

    #[test]
    fn test_descriptor_constructors() {
        let d = FieldDescriptor::text("age", "Age");
        assert_eq!(d.kind, FieldKind::Text);
        let d = FieldDescriptor::multiline("claim_description", "Claim Description");
        assert_eq!(d.kind, FieldKind::MultilineText);
        let d = FieldDescriptor::file("claim_image", "Upload Image");
        assert_eq!(d.kind, FieldKind::File);
        assert_eq!(d.name, "claim_image");
        assert_eq!(d.label, "Upload Image");
    }
}
