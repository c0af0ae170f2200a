//! Per-instance form state store

use thiserror::Error;

use super::attachment::Attachment;
use super::field::{FieldDescriptor, FieldKind, FieldValue};
use super::schema::FieldSchema;

/// Schema/state mismatches. These indicate a construction bug, not a user
/// error; the form instance that produced one is not trusted afterwards.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field: {name}")]
    UnknownField { name: String },
    #[error("value shape does not match field {name} ({kind:?})")]
    KindMismatch { name: String, kind: FieldKind },
}

/// Mutable field values for one live form instance.
///
/// Holds exactly one value per descriptor of the owning schema, in schema
/// order, from creation until the instance is dropped. `reset` returns every
/// field to its kind-appropriate empty default and releases any attachment
/// buffers with the replaced values.
#[derive(Debug, Clone)]
pub struct FormInstance {
    schema: FieldSchema,
    values: Vec<FieldValue>,
}

impl FormInstance {
    /// Create an instance with every field at its empty default
    pub fn new(schema: FieldSchema) -> Self {
        let values = schema
            .descriptors()
            .iter()
            .map(|d| FieldValue::empty(d.kind))
            .collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Current value of the named field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.schema.index_of(name).map(|i| &self.values[i])
    }

    /// Current value at the given schema position
    pub fn value_at(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }

    /// Text content of the named field; empty for file fields
    pub fn text(&self, name: &str) -> &str {
        self.value(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Attachment held by the named field, if any
    pub fn attachment(&self, name: &str) -> Option<&Attachment> {
        self.value(name).and_then(FieldValue::attachment)
    }

    /// Descriptor/value pairs in schema order
    pub fn entries(&self) -> impl Iterator<Item = (&FieldDescriptor, &FieldValue)> {
        self.schema.descriptors().iter().zip(self.values.iter())
    }

    /// Replace the value for `name`. The single replacement entry point: a
    /// held attachment is dropped with the value it replaces.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let index = self
            .schema
            .index_of(name)
            .ok_or_else(|| FormError::UnknownField {
                name: name.to_string(),
            })?;
        let kind = self.schema.descriptors()[index].kind;
        if !value.matches_kind(kind) {
            return Err(FormError::KindMismatch {
                name: name.to_string(),
                kind,
            });
        }
        self.values[index] = value;
        Ok(())
    }

    /// Append a character to the text field at `index`; no-op on file fields
    /// and out-of-range indices.
    pub fn input_char(&mut self, index: usize, c: char) {
        if let Some(FieldValue::Text(s)) = self.values.get_mut(index) {
            s.push(c);
        }
    }

    /// Remove the last character from the text field at `index`
    pub fn backspace(&mut self, index: usize) {
        if let Some(FieldValue::Text(s)) = self.values.get_mut(index) {
            s.pop();
        }
    }

    /// Re-initialize every field to its empty default
    pub fn reset(&mut self) {
        for (value, descriptor) in self.values.iter_mut().zip(self.schema.descriptors()) {
            *value = FieldValue::empty(descriptor.kind);
        }
    }

    /// True when every field is at its empty default
    pub fn is_pristine(&self) -> bool {
        self.values.iter().all(FieldValue::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> FieldSchema {
        FieldSchema::new(vec![
            FieldDescriptor::text("name", "Full Name"),
            FieldDescriptor::multiline("notes", "Notes"),
            FieldDescriptor::file("photo", "Upload Photo"),
        ])
    }

    fn sample_attachment() -> Attachment {
        Attachment {
            display_name: "photo.jpg".to_string(),
            byte_size: 4,
            mime_hint: "image/jpeg".to_string(),
            content: vec![0xde, 0xad, 0xbe, 0xef],
        }
    }

    #[test]
    fn test_new_has_one_default_per_descriptor() {
        let form = FormInstance::new(sample_schema());
        let entries: Vec<_> = form.entries().collect();
        assert_eq!(entries.len(), 3);
        for (descriptor, value) in entries {
            assert!(value.is_empty(), "field {} not empty", descriptor.name);
            assert!(value.matches_kind(descriptor.kind));
        }
        assert!(form.is_pristine());
    }

    #[test]
    fn test_set_replaces_value() {
        let mut form = FormInstance::new(sample_schema());
        form.set("name", FieldValue::Text("Jane Doe".to_string()))
            .unwrap();
        assert_eq!(form.text("name"), "Jane Doe");
    }

    #[test]
    fn test_set_unknown_field_fails() {
        let mut form = FormInstance::new(sample_schema());
        let err = form
            .set("nope", FieldValue::Text(String::new()))
            .unwrap_err();
        assert!(matches!(err, FormError::UnknownField { .. }));
        assert!(form.is_pristine());
    }

    #[test]
    fn test_set_kind_mismatch_fails() {
        let mut form = FormInstance::new(sample_schema());
        let err = form
            .set("photo", FieldValue::Text("oops".to_string()))
            .unwrap_err();
        assert!(matches!(err, FormError::KindMismatch { .. }));
        let err = form
            .set("name", FieldValue::Attachment(None))
            .unwrap_err();
        assert!(matches!(err, FormError::KindMismatch { .. }));
        assert!(form.is_pristine());
    }

    #[test]
    fn test_replacing_attachment_drops_previous() {
        let mut form = FormInstance::new(sample_schema());
        form.set("photo", FieldValue::Attachment(Some(sample_attachment())))
            .unwrap();
        let replacement = Attachment {
            display_name: "other.png".to_string(),
            byte_size: 1,
            mime_hint: "image/png".to_string(),
            content: vec![1],
        };
        form.set("photo", FieldValue::Attachment(Some(replacement)))
            .unwrap();
        assert_eq!(form.attachment("photo").unwrap().display_name, "other.png");
    }

    #[test]
    fn test_clearing_attachment() {
        let mut form = FormInstance::new(sample_schema());
        form.set("photo", FieldValue::Attachment(Some(sample_attachment())))
            .unwrap();
        form.set("photo", FieldValue::Attachment(None)).unwrap();
        assert!(form.attachment("photo").is_none());
    }

    #[test]
    fn test_input_char_and_backspace() {
        let mut form = FormInstance::new(sample_schema());
        form.input_char(0, 'h');
        form.input_char(0, 'i');
        assert_eq!(form.text("name"), "hi");
        form.backspace(0);
        assert_eq!(form.text("name"), "h");
        // no-ops: file field and out-of-range index
        form.input_char(2, 'x');
        assert!(form.attachment("photo").is_none());
        form.input_char(99, 'x');
    }

    #[test]
    fn test_reset_restores_initial_shape() {
        let mut form = FormInstance::new(sample_schema());
        form.set("name", FieldValue::Text("Jane".to_string())).unwrap();
        form.set("notes", FieldValue::Text("line1\nline2".to_string()))
            .unwrap();
        form.set("photo", FieldValue::Attachment(Some(sample_attachment())))
            .unwrap();
        form.reset();
        assert!(form.is_pristine());
        assert_eq!(form.text("name"), "");
        assert!(form.attachment("photo").is_none());
    }
}
