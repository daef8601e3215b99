//! Dynamic field values and category-specific equality.

use std::cmp::Ordering;

use schema::WireCategory;

/// A single field value, one variant per wire category.
///
/// `Map` stores its entries as a vector in producer order; two logically
/// equal maps may therefore hold their entries in different orders. The
/// derived `PartialEq` is order-sensitive (structural equality, what the
/// wire codec round-trips exactly); [`wire_eq`](Self::wire_eq) is the
/// order-insensitive equality the diff engine uses.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Boolean.
    Bool(bool),
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// UTF-8 text.
    Str(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Ordered list of elements.
    List(Vec<FieldValue>),
    /// Map entries in producer order. Keys are assumed unique.
    Map(Vec<(FieldValue, FieldValue)>),
}

impl FieldValue {
    /// Returns the variant's short name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` if the value's shape matches the category, recursing
    /// into collection elements.
    #[must_use]
    pub fn matches_category(&self, category: &WireCategory) -> bool {
        match (self, category) {
            (Self::Bool(_), WireCategory::Bool)
            | (Self::I8(_), WireCategory::I8)
            | (Self::I16(_), WireCategory::I16)
            | (Self::I32(_), WireCategory::I32)
            | (Self::I64(_), WireCategory::I64)
            | (Self::U8(_), WireCategory::U8)
            | (Self::U16(_), WireCategory::U16)
            | (Self::U32(_), WireCategory::U32)
            | (Self::U64(_), WireCategory::U64)
            | (Self::F32(_), WireCategory::F32)
            | (Self::F64(_), WireCategory::F64)
            | (Self::Str(_), WireCategory::Str)
            | (Self::Bytes(_), WireCategory::Bytes) => true,
            (Self::List(elems), WireCategory::List(elem_cat)) => {
                elems.iter().all(|elem| elem.matches_category(elem_cat))
            }
            (Self::Map(entries), WireCategory::Map(key_cat, value_cat)) => {
                entries.iter().all(|(key, value)| {
                    key.matches_category(key_cat) && value.matches_category(value_cat)
                })
            }
            _ => false,
        }
    }

    /// Category-specific value equality, as the diff engine sees it.
    ///
    /// Scalars compare by value (floats with `==`, so NaN is never equal to
    /// itself and is always re-sent); strings and bytes by exact byte
    /// sequence; lists by length and pairwise order; maps by key set and
    /// per-key value, independent of entry order.
    #[must_use]
    pub fn wire_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.wire_eq(y))
            }
            (Self::Map(a), Self::Map(b)) => map_entries_eq(a, b),
            _ => false,
        }
    }

    /// Recursively sorts all map entries by key.
    ///
    /// Two maps that are [`wire_eq`](Self::wire_eq) encode to the same bytes
    /// after canonicalization, which makes serialized deltas reproducible
    /// for checksumming or caching.
    pub fn sort_map_entries(&mut self) {
        match self {
            Self::List(elems) => {
                for elem in elems {
                    elem.sort_map_entries();
                }
            }
            Self::Map(entries) => {
                for (key, value) in entries.iter_mut() {
                    key.sort_map_entries();
                    value.sort_map_entries();
                }
                entries.sort_by(|(a, _), (b, _)| key_order(a, b));
            }
            _ => {}
        }
    }
}

/// Key-set equality with per-key value equality, independent of entry order.
///
/// Assumes neither side carries duplicate keys.
fn map_entries_eq(a: &[(FieldValue, FieldValue)], b: &[(FieldValue, FieldValue)]) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.iter()
                .find(|(other_key, _)| other_key.wire_eq(key))
                .is_some_and(|(_, other_value)| other_value.wire_eq(value))
        })
}

/// Total order over map keys: variant rank first, then value.
///
/// Keys are scalars or strings by schema validation; floats order by their
/// bit patterns so the order stays total.
fn key_order(a: &FieldValue, b: &FieldValue) -> Ordering {
    fn rank(value: &FieldValue) -> u8 {
        match value {
            FieldValue::Bool(_) => 0,
            FieldValue::I8(_) => 1,
            FieldValue::I16(_) => 2,
            FieldValue::I32(_) => 3,
            FieldValue::I64(_) => 4,
            FieldValue::U8(_) => 5,
            FieldValue::U16(_) => 6,
            FieldValue::U32(_) => 7,
            FieldValue::U64(_) => 8,
            FieldValue::F32(_) => 9,
            FieldValue::F64(_) => 10,
            FieldValue::Str(_) => 11,
            FieldValue::Bytes(_) => 12,
            FieldValue::List(_) => 13,
            FieldValue::Map(_) => 14,
        }
    }

    match (a, b) {
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (FieldValue::I8(x), FieldValue::I8(y)) => x.cmp(y),
        (FieldValue::I16(x), FieldValue::I16(y)) => x.cmp(y),
        (FieldValue::I32(x), FieldValue::I32(y)) => x.cmp(y),
        (FieldValue::I64(x), FieldValue::I64(y)) => x.cmp(y),
        (FieldValue::U8(x), FieldValue::U8(y)) => x.cmp(y),
        (FieldValue::U16(x), FieldValue::U16(y)) => x.cmp(y),
        (FieldValue::U32(x), FieldValue::U32(y)) => x.cmp(y),
        (FieldValue::U64(x), FieldValue::U64(y)) => x.cmp(y),
        (FieldValue::F32(x), FieldValue::F32(y)) => x.to_bits().cmp(&y.to_bits()),
        (FieldValue::F64(x), FieldValue::F64(y)) => x.to_bits().cmp(&y.to_bits()),
        (FieldValue::Str(x), FieldValue::Str(y)) => x.cmp(y),
        (FieldValue::Bytes(x), FieldValue::Bytes(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(FieldValue, FieldValue)>) -> FieldValue {
        FieldValue::Map(entries)
    }

    #[test]
    fn scalar_wire_eq() {
        assert!(FieldValue::I32(5).wire_eq(&FieldValue::I32(5)));
        assert!(!FieldValue::I32(5).wire_eq(&FieldValue::I32(6)));
        assert!(!FieldValue::I32(5).wire_eq(&FieldValue::U32(5)));
    }

    #[test]
    fn float_wire_eq_is_value_equality() {
        assert!(FieldValue::F64(0.0).wire_eq(&FieldValue::F64(-0.0)));
        assert!(!FieldValue::F64(f64::NAN).wire_eq(&FieldValue::F64(f64::NAN)));
    }

    #[test]
    fn list_wire_eq_is_ordered() {
        let a = FieldValue::List(vec![FieldValue::U8(1), FieldValue::U8(2)]);
        let b = FieldValue::List(vec![FieldValue::U8(2), FieldValue::U8(1)]);
        let c = FieldValue::List(vec![FieldValue::U8(1), FieldValue::U8(2)]);
        assert!(!a.wire_eq(&b));
        assert!(a.wire_eq(&c));
    }

    #[test]
    fn list_wire_eq_length_mismatch() {
        let a = FieldValue::List(vec![FieldValue::U8(1)]);
        let b = FieldValue::List(vec![FieldValue::U8(1), FieldValue::U8(1)]);
        assert!(!a.wire_eq(&b));
    }

    #[test]
    fn map_wire_eq_ignores_entry_order() {
        let a = map(vec![
            (FieldValue::Str("alice".into()), FieldValue::I16(100)),
            (FieldValue::Str("bob".into()), FieldValue::I16(200)),
        ]);
        let b = map(vec![
            (FieldValue::Str("bob".into()), FieldValue::I16(200)),
            (FieldValue::Str("alice".into()), FieldValue::I16(100)),
        ]);
        assert!(a.wire_eq(&b));
        assert_ne!(a, b, "derived equality stays order-sensitive");
    }

    #[test]
    fn map_wire_eq_detects_value_change() {
        let a = map(vec![(FieldValue::Str("alice".into()), FieldValue::I16(100))]);
        let b = map(vec![(FieldValue::Str("alice".into()), FieldValue::I16(150))]);
        assert!(!a.wire_eq(&b));
    }

    #[test]
    fn map_wire_eq_detects_key_change() {
        let a = map(vec![(FieldValue::I8(1), FieldValue::I32(5))]);
        let b = map(vec![(FieldValue::I8(2), FieldValue::I32(5))]);
        assert!(!a.wire_eq(&b));
    }

    #[test]
    fn matches_category_scalars() {
        assert!(FieldValue::Bool(true).matches_category(&WireCategory::Bool));
        assert!(!FieldValue::Bool(true).matches_category(&WireCategory::U8));
    }

    #[test]
    fn matches_category_recurses_into_lists() {
        let list = FieldValue::List(vec![FieldValue::Str("a".into())]);
        assert!(list.matches_category(&WireCategory::List(Box::new(WireCategory::Str))));
        assert!(!list.matches_category(&WireCategory::List(Box::new(WireCategory::I8))));
    }

    #[test]
    fn matches_category_empty_collection() {
        let list = FieldValue::List(Vec::new());
        assert!(list.matches_category(&WireCategory::List(Box::new(WireCategory::I8))));
    }

    #[test]
    fn matches_category_map_entries() {
        let value = map(vec![(FieldValue::Str("k".into()), FieldValue::U32(1))]);
        let category =
            WireCategory::Map(Box::new(WireCategory::Str), Box::new(WireCategory::U32));
        assert!(value.matches_category(&category));

        let wrong =
            WireCategory::Map(Box::new(WireCategory::Str), Box::new(WireCategory::U64));
        assert!(!value.matches_category(&wrong));
    }

    #[test]
    fn sort_map_entries_canonicalizes() {
        let mut a = map(vec![
            (FieldValue::Str("bob".into()), FieldValue::I16(200)),
            (FieldValue::Str("alice".into()), FieldValue::I16(100)),
        ]);
        a.sort_map_entries();
        assert_eq!(
            a,
            map(vec![
                (FieldValue::Str("alice".into()), FieldValue::I16(100)),
                (FieldValue::Str("bob".into()), FieldValue::I16(200)),
            ])
        );
    }

    #[test]
    fn sort_map_entries_recurses_through_lists() {
        let mut value = FieldValue::List(vec![map(vec![
            (FieldValue::I8(2), FieldValue::Bool(true)),
            (FieldValue::I8(1), FieldValue::Bool(false)),
        ])]);
        value.sort_map_entries();
        assert_eq!(
            value,
            FieldValue::List(vec![map(vec![
                (FieldValue::I8(1), FieldValue::Bool(false)),
                (FieldValue::I8(2), FieldValue::Bool(true)),
            ])])
        );
    }

    #[test]
    fn variant_names() {
        assert_eq!(FieldValue::Str(String::new()).name(), "string");
        assert_eq!(FieldValue::Map(Vec::new()).name(), "map");
    }
}
