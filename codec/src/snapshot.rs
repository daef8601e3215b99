//! Record snapshots: full field-value states of a record at a point in time.

use schema::RecordSchema;

use crate::error::{CodecError, CodecResult};
use crate::types::RecordId;
use crate::value::FieldValue;

/// A full snapshot of a record: identity plus one value per data field, in
/// schema field order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSnapshot {
    identity: RecordId,
    fields: Vec<FieldValue>,
}

impl RecordSnapshot {
    /// Creates a snapshot without schema validation.
    ///
    /// `fields` must follow the schema's field order; use
    /// [`validate`](Self::validate) or the diff/encode entry points to check
    /// shape against a schema.
    #[must_use]
    pub fn new(identity: RecordId, fields: Vec<FieldValue>) -> Self {
        Self { identity, fields }
    }

    /// Returns the record identity.
    #[must_use]
    pub const fn identity(&self) -> RecordId {
        self.identity
    }

    /// Returns the field values in schema order.
    #[must_use]
    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Returns the value at a field index, if in range.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index)
    }

    /// Returns the number of field values.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Consumes the snapshot, returning identity and field values.
    #[must_use]
    pub fn into_parts(self) -> (RecordId, Vec<FieldValue>) {
        (self.identity, self.fields)
    }

    /// Checks that the snapshot's shape matches the schema: same field
    /// count, and every value's variant matching its field's category.
    pub fn validate(&self, schema: &RecordSchema) -> CodecResult<()> {
        if self.fields.len() != schema.field_count() {
            return Err(CodecError::FieldCountMismatch {
                expected: schema.field_count(),
                actual: self.fields.len(),
            });
        }
        for (index, (value, field)) in self.fields.iter().zip(&schema.fields).enumerate() {
            if !value.matches_category(&field.category) {
                return Err(CodecError::TypeMismatch {
                    field: index,
                    expected: field.category.name(),
                    found: value.name(),
                });
            }
        }
        Ok(())
    }

    /// Recursively sorts all map entries in all field values by key.
    ///
    /// See [`FieldValue::sort_map_entries`].
    pub fn sort_map_entries(&mut self) {
        for value in &mut self.fields {
            value.sort_map_entries();
        }
    }
}
