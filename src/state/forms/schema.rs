//! Ordered field schemas

use super::field::FieldDescriptor;

/// An ordered, immutable list of field descriptors.
///
/// Field names are unique within a schema; a duplicate is a construction
/// bug, so `new` panics rather than producing a half-valid schema.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    descriptors: Vec<FieldDescriptor>,
}

impl FieldSchema {
    pub fn new(descriptors: Vec<FieldDescriptor>) -> Self {
        for (i, d) in descriptors.iter().enumerate() {
            assert!(
                !descriptors[..i].iter().any(|prior| prior.name == d.name),
                "duplicate field name in schema: {}",
                d.name
            );
        }
        Self { descriptors }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, index: usize) -> Option<&FieldDescriptor> {
        self.descriptors.get(index)
    }

    /// Position of the named field in schema order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.name == name)
    }

    /// Descriptor of the named field
    #[allow(dead_code)]
    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }
}
