use serde::Serialize;

use crate::data::field::Field;

/// Identifier of a section, unique within one schema.
pub type SectionId = u32;

/// A named grouping of fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(id: SectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Position used to name the next appended field.
    pub fn next_position(&self) -> usize {
        free_position(&self.fields)
    }
}

/// First 1-based position from `len + 1` on whose default names are unused.
pub fn free_position(fields: &[Field]) -> usize {
    let taken = |n: usize| {
        fields.iter().any(|f| {
            f.name == format!("field{n}")
                || f.name == format!("field-{n}")
                || f.name == format!("child-{n}")
        })
    };
    (fields.len() + 1..)
        .find(|&n| !taken(n))
        .unwrap_or(fields.len() + 1)
}
