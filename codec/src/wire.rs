//! Wire encoding and decoding of record deltas.
//!
//! A delta encodes as one presence-prefixed slot per schema field, in schema
//! field order: a `0x00` byte for an absent field, or a `0x01` byte followed
//! by the field's encoded value. There is no header, record identity,
//! version, or checksum; framing and routing belong to the transport.

use bytestream::{ByteReader, ByteWriter, StreamError};
use schema::{RecordSchema, WireCategory};

use crate::delta::RecordDelta;
use crate::error::{CodecError, CodecResult};
use crate::value::FieldValue;

const MARKER_ABSENT: u8 = 0x00;
const MARKER_PRESENT: u8 = 0x01;

/// Encodes a delta into a writer.
///
/// # Errors
///
/// Returns [`CodecError::FieldCountMismatch`] when the delta's slot count
/// does not match the schema, or [`CodecError::TypeMismatch`] when a present
/// value's shape does not match its field's category.
pub fn encode_delta(
    schema: &RecordSchema,
    delta: &RecordDelta,
    writer: &mut ByteWriter,
) -> CodecResult<()> {
    if delta.slot_count() != schema.field_count() {
        return Err(CodecError::FieldCountMismatch {
            expected: schema.field_count(),
            actual: delta.slot_count(),
        });
    }
    for (index, (slot, field)) in delta.slots().iter().zip(&schema.fields).enumerate() {
        match slot {
            None => writer.write_u8(MARKER_ABSENT),
            Some(value) => {
                if !value.matches_category(&field.category) {
                    return Err(CodecError::TypeMismatch {
                        field: index,
                        expected: field.category.name(),
                        found: value.name(),
                    });
                }
                writer.write_u8(MARKER_PRESENT);
                encode_value(writer, value);
            }
        }
    }
    Ok(())
}

/// Encodes a delta into a fresh byte buffer.
///
/// # Errors
///
/// Same as [`encode_delta`].
pub fn encode_delta_to_vec(schema: &RecordSchema, delta: &RecordDelta) -> CodecResult<Vec<u8>> {
    let mut writer = ByteWriter::new();
    encode_delta(schema, delta, &mut writer)?;
    Ok(writer.finish())
}

/// Decodes a delta from a reader, consuming exactly the delta's bytes.
///
/// Bytes remaining after the last field are left untouched for the caller.
///
/// # Errors
///
/// Returns [`CodecError::Stream`] on truncated input or varint overflow,
/// [`CodecError::UnknownPresenceMarker`] on a presence byte other than
/// `0x00`/`0x01`, and [`CodecError::InvalidUtf8`] on a string field whose
/// bytes are not valid UTF-8.
pub fn decode_delta(schema: &RecordSchema, reader: &mut ByteReader<'_>) -> CodecResult<RecordDelta> {
    let mut slots = Vec::with_capacity(schema.field_count());
    for (index, field) in schema.fields.iter().enumerate() {
        let marker = reader.read_u8()?;
        match marker {
            MARKER_ABSENT => slots.push(None),
            MARKER_PRESENT => slots.push(Some(decode_value(reader, &field.category)?)),
            found => {
                return Err(CodecError::UnknownPresenceMarker {
                    field: index,
                    found,
                })
            }
        }
    }
    Ok(RecordDelta::new(slots))
}

/// Decodes a delta from a byte slice, returning the delta and the number of
/// bytes consumed.
///
/// Trailing bytes past the delta are not an error; the consumed count lets
/// the caller continue framing from there.
///
/// # Errors
///
/// Same as [`decode_delta`].
pub fn decode_delta_from_slice(
    schema: &RecordSchema,
    bytes: &[u8],
) -> CodecResult<(RecordDelta, usize)> {
    let mut reader = ByteReader::new(bytes);
    let delta = decode_delta(schema, &mut reader)?;
    Ok((delta, reader.position()))
}

/// Encodes a single field value. The value's shape is assumed to already
/// match its category.
pub fn encode_value(writer: &mut ByteWriter, value: &FieldValue) {
    match value {
        FieldValue::Bool(v) => writer.write_bool(*v),
        FieldValue::I8(v) => writer.write_i8(*v),
        FieldValue::I16(v) => writer.write_i16(*v),
        FieldValue::I32(v) => writer.write_i32(*v),
        FieldValue::I64(v) => writer.write_i64(*v),
        FieldValue::U8(v) => writer.write_u8(*v),
        FieldValue::U16(v) => writer.write_u16(*v),
        FieldValue::U32(v) => writer.write_u32(*v),
        FieldValue::U64(v) => writer.write_u64(*v),
        FieldValue::F32(v) => writer.write_f32(*v),
        FieldValue::F64(v) => writer.write_f64(*v),
        FieldValue::Str(v) => writer.write_str(v),
        FieldValue::Bytes(v) => writer.write_bytes(v),
        FieldValue::List(elems) => {
            writer.write_varu32(elems.len() as u32);
            for elem in elems {
                encode_value(writer, elem);
            }
        }
        FieldValue::Map(entries) => {
            writer.write_varu32(entries.len() as u32);
            for (key, val) in entries {
                encode_value(writer, key);
                encode_value(writer, val);
            }
        }
    }
}

/// Decodes a single field value of the given category.
///
/// # Errors
///
/// Returns [`CodecError::Stream`] on truncated input or varint overflow, and
/// [`CodecError::InvalidUtf8`] for string payloads that are not valid UTF-8.
pub fn decode_value(
    reader: &mut ByteReader<'_>,
    category: &WireCategory,
) -> CodecResult<FieldValue> {
    let value = match category {
        WireCategory::Bool => FieldValue::Bool(reader.read_bool()?),
        WireCategory::I8 => FieldValue::I8(reader.read_i8()?),
        WireCategory::I16 => FieldValue::I16(reader.read_i16()?),
        WireCategory::I32 => FieldValue::I32(reader.read_i32()?),
        WireCategory::I64 => FieldValue::I64(reader.read_i64()?),
        WireCategory::U8 => FieldValue::U8(reader.read_u8()?),
        WireCategory::U16 => FieldValue::U16(reader.read_u16()?),
        WireCategory::U32 => FieldValue::U32(reader.read_u32()?),
        WireCategory::U64 => FieldValue::U64(reader.read_u64()?),
        WireCategory::F32 => FieldValue::F32(reader.read_f32()?),
        WireCategory::F64 => FieldValue::F64(reader.read_f64()?),
        WireCategory::Str => {
            let offset = reader.position();
            let bytes = reader.read_bytes()?;
            match std::str::from_utf8(bytes) {
                Ok(text) => FieldValue::Str(text.to_owned()),
                Err(_) => return Err(CodecError::InvalidUtf8 { offset }),
            }
        }
        WireCategory::Bytes => FieldValue::Bytes(reader.read_bytes()?.to_vec()),
        WireCategory::List(elem_cat) => {
            let count = read_count(reader)?;
            let mut elems = Vec::with_capacity(count);
            for _ in 0..count {
                elems.push(decode_value(reader, elem_cat)?);
            }
            FieldValue::List(elems)
        }
        WireCategory::Map(key_cat, value_cat) => {
            let count = read_count(reader)?;
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let key = decode_value(reader, key_cat)?;
                let val = decode_value(reader, value_cat)?;
                entries.push((key, val));
            }
            FieldValue::Map(entries)
        }
    };
    Ok(value)
}

/// Reads a collection count and bounds it by the remaining input so a
/// corrupt length prefix cannot drive a huge allocation. Every element
/// occupies at least one byte, so a count past `remaining` is truncation.
fn read_count(reader: &mut ByteReader<'_>) -> CodecResult<usize> {
    let count = reader.read_varu32()? as usize;
    if count > reader.remaining() {
        return Err(CodecError::Stream(StreamError::TruncatedInput {
            requested: count,
            available: reader.remaining(),
        }));
    }
    Ok(count)
}
