//! Directional diffing and delta application.

use schema::RecordSchema;

use crate::error::{CodecError, CodecResult};
use crate::snapshot::RecordSnapshot;
use crate::value::FieldValue;

/// A sparse record delta: one slot per schema field, `Some` carrying the
/// replacement value for fields that differed, `None` for fields that did
/// not.
///
/// Deltas never carry the record identity; routing a delta to its record is
/// the transport's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDelta {
    slots: Vec<Option<FieldValue>>,
}

impl RecordDelta {
    /// Creates a delta from per-field slots in schema order.
    #[must_use]
    pub fn new(slots: Vec<Option<FieldValue>>) -> Self {
        Self { slots }
    }

    /// Creates an empty delta (all fields absent) for a schema.
    #[must_use]
    pub fn empty(schema: &RecordSchema) -> Self {
        Self {
            slots: vec![None; schema.field_count()],
        }
    }

    /// Returns the per-field slots in schema order.
    #[must_use]
    pub fn slots(&self) -> &[Option<FieldValue>] {
        &self.slots
    }

    /// Returns the slot at a field index, if in range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Option<FieldValue>> {
        self.slots.get(index)
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns the number of present fields.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Consumes the delta, returning the slots.
    #[must_use]
    pub fn into_slots(self) -> Vec<Option<FieldValue>> {
        self.slots
    }
}

/// Computes the directional delta that pulls a record's state toward `from`.
///
/// For each schema field, the delta carries `from`'s value when the two
/// snapshots' values are not wire-equal, and is absent otherwise. Applying
/// the result to a snapshot equal to `to` reproduces `from`. Collections
/// compare as whole values; a one-element change re-sends the entire
/// collection.
///
/// Both snapshots must describe the same record; diffing snapshots with
/// different identities is a caller bug and only checked in debug builds.
///
/// # Errors
///
/// Returns [`CodecError::FieldCountMismatch`] or [`CodecError::TypeMismatch`]
/// when either snapshot's shape does not match the schema.
pub fn pull_delta(
    schema: &RecordSchema,
    from: &RecordSnapshot,
    to: &RecordSnapshot,
) -> CodecResult<RecordDelta> {
    debug_assert_eq!(
        from.identity(),
        to.identity(),
        "diffing snapshots of different records"
    );
    from.validate(schema)?;
    to.validate(schema)?;

    let slots = from
        .fields()
        .iter()
        .zip(to.fields())
        .map(|(from_value, to_value)| {
            if from_value.wire_eq(to_value) {
                None
            } else {
                Some(from_value.clone())
            }
        })
        .collect();
    Ok(RecordDelta::new(slots))
}

/// Applies a delta to a base snapshot, returning the updated snapshot.
///
/// Present fields replace the base's values wholesale; absent fields keep
/// the base's values. The base's identity carries through unchanged. The
/// base is not modified.
///
/// # Errors
///
/// Returns [`CodecError::FieldCountMismatch`] when the delta's slot count
/// does not match the base's field count.
pub fn apply_delta(base: &RecordSnapshot, delta: &RecordDelta) -> CodecResult<RecordSnapshot> {
    if delta.slot_count() != base.field_count() {
        return Err(CodecError::FieldCountMismatch {
            expected: base.field_count(),
            actual: delta.slot_count(),
        });
    }
    let fields = base
        .fields()
        .iter()
        .zip(delta.slots())
        .map(|(base_value, slot)| slot.as_ref().unwrap_or(base_value).clone())
        .collect();
    Ok(RecordSnapshot::new(base.identity(), fields))
}
