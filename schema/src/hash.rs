//! Deterministic schema fingerprinting.
//!
//! The wire format carries no schema version tag, so peers that need an
//! out-of-band mismatch check compare fingerprints before exchanging deltas.

use blake3::Hasher;

use crate::category::WireCategory;
use crate::record::RecordSchema;

/// Computes a deterministic fingerprint for a record schema.
///
/// The hash covers the record name, identity field name, and the ordered
/// (field name, category) list. It is stable across runs and sensitive to
/// field order.
#[must_use]
pub fn schema_hash(schema: &RecordSchema) -> u64 {
    let mut hasher = Hasher::new();
    write_str(&mut hasher, &schema.name);
    write_str(&mut hasher, &schema.identity);
    write_u32(&mut hasher, schema.fields.len() as u32);

    for field in &schema.fields {
        write_str(&mut hasher, &field.name);
        write_category(&mut hasher, &field.category);
    }

    let hash = hasher.finalize();
    let bytes = hash.as_bytes();
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

fn write_category(hasher: &mut Hasher, category: &WireCategory) {
    match category {
        WireCategory::Bool => write_u8(hasher, 0),
        WireCategory::I8 => write_u8(hasher, 1),
        WireCategory::I16 => write_u8(hasher, 2),
        WireCategory::I32 => write_u8(hasher, 3),
        WireCategory::I64 => write_u8(hasher, 4),
        WireCategory::U8 => write_u8(hasher, 5),
        WireCategory::U16 => write_u8(hasher, 6),
        WireCategory::U32 => write_u8(hasher, 7),
        WireCategory::U64 => write_u8(hasher, 8),
        WireCategory::F32 => write_u8(hasher, 9),
        WireCategory::F64 => write_u8(hasher, 10),
        WireCategory::Str => write_u8(hasher, 11),
        WireCategory::Bytes => write_u8(hasher, 12),
        WireCategory::List(elem) => {
            write_u8(hasher, 13);
            write_category(hasher, elem);
        }
        WireCategory::Map(key, value) => {
            write_u8(hasher, 14);
            write_category(hasher, key);
            write_category(hasher, value);
        }
    }
}

fn write_str(hasher: &mut Hasher, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}
