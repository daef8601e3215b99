//! Reference record type for the recdec codec.
//!
//! `PlayerState` exercises every wire category: scalars of each width,
//! floats, text, raw bytes, lists, and maps with scalar and string keys.
//! It is the record the integration demos and docs diff against.

use std::collections::BTreeMap;

use codec::{CodecError, CodecResult, FieldValue, RecordId, RecordSnapshot};
use schema::{RecordSchema, SchemaResult};

/// A player's full replicated state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    pub id: i64,
    pub round: i16,
    pub score: i32,
    pub lives: i8,
    pub max_hp: u16,
    pub x: f64,
    pub y: f64,
    pub speed: f32,
    pub player_name: String,
    pub is_active: bool,
    pub inventory: Vec<String>,
    pub positions: Vec<f64>,
    pub player_ids: Vec<i64>,
    pub data: Vec<u8>,
    pub player_scores: BTreeMap<String, i16>,
    pub item_counts: BTreeMap<i8, i32>,
    pub metadata: BTreeMap<String, String>,
}

/// Builds the `PlayerState` schema from its declared field types.
pub fn player_schema() -> SchemaResult<RecordSchema> {
    RecordSchema::from_declared(
        "PlayerState",
        "id",
        &[
            ("id", "i64"),
            ("round", "i16"),
            ("score", "i32"),
            ("lives", "i8"),
            ("max_hp", "u16"),
            ("x", "f64"),
            ("y", "f64"),
            ("speed", "f32"),
            ("player_name", "string"),
            ("is_active", "bool"),
            ("inventory", "list<string>"),
            ("positions", "list<f64>"),
            ("player_ids", "list<i64>"),
            ("data", "bytes"),
            ("player_scores", "map<string, i16>"),
            ("item_counts", "map<i8, i32>"),
            ("metadata", "map<string, string>"),
        ],
    )
}

impl PlayerState {
    /// Converts to a snapshot in schema field order.
    ///
    /// Map fields come from `BTreeMap`s, so their wire entries are already
    /// in canonical key order.
    #[must_use]
    pub fn to_snapshot(&self) -> RecordSnapshot {
        RecordSnapshot::new(
            RecordId::new(self.id),
            vec![
                FieldValue::I16(self.round),
                FieldValue::I32(self.score),
                FieldValue::I8(self.lives),
                FieldValue::U16(self.max_hp),
                FieldValue::F64(self.x),
                FieldValue::F64(self.y),
                FieldValue::F32(self.speed),
                FieldValue::Str(self.player_name.clone()),
                FieldValue::Bool(self.is_active),
                FieldValue::List(
                    self.inventory
                        .iter()
                        .map(|item| FieldValue::Str(item.clone()))
                        .collect(),
                ),
                FieldValue::List(self.positions.iter().copied().map(FieldValue::F64).collect()),
                FieldValue::List(
                    self.player_ids.iter().copied().map(FieldValue::I64).collect(),
                ),
                FieldValue::Bytes(self.data.clone()),
                FieldValue::Map(
                    self.player_scores
                        .iter()
                        .map(|(k, v)| (FieldValue::Str(k.clone()), FieldValue::I16(*v)))
                        .collect(),
                ),
                FieldValue::Map(
                    self.item_counts
                        .iter()
                        .map(|(k, v)| (FieldValue::I8(*k), FieldValue::I32(*v)))
                        .collect(),
                ),
                FieldValue::Map(
                    self.metadata
                        .iter()
                        .map(|(k, v)| {
                            (FieldValue::Str(k.clone()), FieldValue::Str(v.clone()))
                        })
                        .collect(),
                ),
            ],
        )
    }

    /// Reconstructs a `PlayerState` from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::FieldCountMismatch`] or
    /// [`CodecError::TypeMismatch`] when the snapshot's shape does not match
    /// the `PlayerState` schema.
    pub fn from_snapshot(snapshot: &RecordSnapshot) -> CodecResult<Self> {
        let fields = snapshot.fields();
        if fields.len() != 16 {
            return Err(CodecError::FieldCountMismatch {
                expected: 16,
                actual: fields.len(),
            });
        }
        let mut next = FieldCursor::new(fields);
        Ok(Self {
            id: snapshot.identity().raw(),
            round: next.i16()?,
            score: next.i32()?,
            lives: next.i8()?,
            max_hp: next.u16()?,
            x: next.f64()?,
            y: next.f64()?,
            speed: next.f32()?,
            player_name: next.string()?,
            is_active: next.bool()?,
            inventory: next.list(|cursor, value| cursor.as_string(value))?,
            positions: next.list(|cursor, value| cursor.as_f64(value))?,
            player_ids: next.list(|cursor, value| cursor.as_i64(value))?,
            data: next.bytes()?,
            player_scores: next
                .map(|c, k| c.as_string(k), |c, v| c.as_i16(v))?,
            item_counts: next.map(|c, k| c.as_i8(k), |c, v| c.as_i32(v))?,
            metadata: next
                .map(|c, k| c.as_string(k), |c, v| c.as_string(v))?,
        })
    }
}

/// Walks a snapshot's fields in order, unpacking each variant and reporting
/// the field index in mismatch errors.
struct FieldCursor<'a> {
    fields: &'a [FieldValue],
    index: usize,
}

macro_rules! cursor_scalar {
    ($take:ident, $as:ident, $variant:ident, $ty:ty, $name:literal) => {
        fn $take(&mut self) -> CodecResult<$ty> {
            let value = self.advance();
            self.$as(value)
        }

        fn $as(&self, value: &FieldValue) -> CodecResult<$ty> {
            match value {
                FieldValue::$variant(v) => Ok(v.clone()),
                other => Err(self.mismatch($name, other)),
            }
        }
    };
}

impl<'a> FieldCursor<'a> {
    fn new(fields: &'a [FieldValue]) -> Self {
        Self { fields, index: 0 }
    }

    fn advance(&mut self) -> &'a FieldValue {
        let value = &self.fields[self.index];
        self.index += 1;
        value
    }

    fn mismatch(&self, expected: &'static str, found: &FieldValue) -> CodecError {
        CodecError::TypeMismatch {
            field: self.index.saturating_sub(1),
            expected,
            found: found.name(),
        }
    }

    cursor_scalar!(i8, as_i8, I8, i8, "i8");
    cursor_scalar!(i16, as_i16, I16, i16, "i16");
    cursor_scalar!(i32, as_i32, I32, i32, "i32");
    cursor_scalar!(u16, as_u16, U16, u16, "u16");
    cursor_scalar!(f32, as_f32, F32, f32, "f32");
    cursor_scalar!(f64, as_f64, F64, f64, "f64");
    cursor_scalar!(string, as_string, Str, String, "string");

    fn bool(&mut self) -> CodecResult<bool> {
        match self.advance() {
            FieldValue::Bool(v) => Ok(*v),
            other => Err(self.mismatch("bool", other)),
        }
    }

    fn as_i64(&self, value: &FieldValue) -> CodecResult<i64> {
        match value {
            FieldValue::I64(v) => Ok(*v),
            other => Err(self.mismatch("i64", other)),
        }
    }

    fn bytes(&mut self) -> CodecResult<Vec<u8>> {
        match self.advance() {
            FieldValue::Bytes(v) => Ok(v.clone()),
            other => Err(self.mismatch("bytes", other)),
        }
    }

    fn list<T>(
        &mut self,
        element: impl Fn(&Self, &FieldValue) -> CodecResult<T>,
    ) -> CodecResult<Vec<T>> {
        match self.advance() {
            FieldValue::List(elems) => elems.iter().map(|elem| element(self, elem)).collect(),
            other => Err(self.mismatch("list", other)),
        }
    }

    fn map<K: Ord, V>(
        &mut self,
        key: impl Fn(&Self, &FieldValue) -> CodecResult<K>,
        value: impl Fn(&Self, &FieldValue) -> CodecResult<V>,
    ) -> CodecResult<BTreeMap<K, V>> {
        match self.advance() {
            FieldValue::Map(entries) => entries
                .iter()
                .map(|(k, v)| Ok((key(self, k)?, value(self, v)?)))
                .collect(),
            other => Err(self.mismatch("map", other)),
        }
    }
}
