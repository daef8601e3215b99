//! End-to-end tests: declared schema, diff, wire encode/decode, apply.

use codec::{
    apply_delta, decode_delta_from_slice, encode_delta_to_vec, pull_delta, CodecError,
    FieldValue, RecordDelta, RecordId, RecordSnapshot,
};
use schema::RecordSchema;

fn player_schema() -> RecordSchema {
    RecordSchema::from_declared(
        "Player",
        "id",
        &[
            ("id", "i64"),
            ("score", "i32"),
            ("name", "string"),
            ("tags", "list<string>"),
        ],
    )
    .unwrap()
}

fn player(id: i64, score: i32, name: &str, tags: &[&str]) -> RecordSnapshot {
    RecordSnapshot::new(
        RecordId::new(id),
        vec![
            FieldValue::I32(score),
            FieldValue::Str(name.into()),
            FieldValue::List(tags.iter().map(|t| FieldValue::Str((*t).into())).collect()),
        ],
    )
}

#[test]
fn changed_fields_encode_to_known_bytes() {
    let schema = player_schema();
    let from = player(1, 50, "Ann", &["a", "b"]);
    let to = player(1, 75, "Ann", &["a", "c"]);

    let delta = pull_delta(&schema, &from, &to).unwrap();
    let bytes = encode_delta_to_vec(&schema, &delta).unwrap();

    let expected = vec![
        0x01, 0x32, 0x00, 0x00, 0x00, // score present: LE 50
        0x00, // name unchanged
        0x01, 0x02, 0x01, b'a', 0x01, b'b', // tags present: ["a", "b"]
    ];
    assert_eq!(bytes, expected);
}

#[test]
fn unchanged_record_encodes_to_one_byte_per_field() {
    let schema = player_schema();
    let snap = player(1, 50, "Ann", &["a"]);
    let delta = pull_delta(&schema, &snap, &snap.clone()).unwrap();
    let bytes = encode_delta_to_vec(&schema, &delta).unwrap();
    assert_eq!(bytes, vec![0x00; schema.field_count()]);
}

#[test]
fn full_cycle_reproduces_source_state() {
    let schema = player_schema();
    let from = player(9, -12, "Bea", &["x", "y", "z"]);
    let to = player(9, 3, "Cara", &[]);

    let delta = pull_delta(&schema, &from, &to).unwrap();
    let bytes = encode_delta_to_vec(&schema, &delta).unwrap();
    let (decoded, consumed) = decode_delta_from_slice(&schema, &bytes).unwrap();
    assert_eq!(consumed, bytes.len());

    let rebuilt = apply_delta(&to, &decoded).unwrap();
    assert_eq!(rebuilt, from);
    assert_eq!(rebuilt.identity(), RecordId::new(9));
}

#[test]
fn identity_never_appears_on_the_wire() {
    let schema = player_schema();
    // Same field values, different identities: the delta is empty even
    // though the identities differ, because identity is not a data field.
    let a = player(1, 5, "Ann", &[]);
    let b = RecordSnapshot::new(RecordId::new(1), a.fields().to_vec());
    let delta = pull_delta(&schema, &a, &b).unwrap();
    assert!(delta.is_empty());
    let bytes = encode_delta_to_vec(&schema, &delta).unwrap();
    assert_eq!(bytes.len(), schema.field_count());
}

#[test]
fn apply_keeps_target_identity() {
    let schema = player_schema();
    let from = player(7, 1, "Ann", &[]);
    let to = player(7, 2, "Ann", &[]);
    let delta = pull_delta(&schema, &from, &to).unwrap();
    let rebuilt = apply_delta(&to, &delta).unwrap();
    assert_eq!(rebuilt.identity(), to.identity());
}

#[test]
fn every_proper_prefix_fails_to_decode() {
    let schema = player_schema();
    let from = player(1, 50, "Ann", &["a", "b"]);
    let to = player(1, 75, "Bea", &["a", "c"]);
    let delta = pull_delta(&schema, &from, &to).unwrap();
    let bytes = encode_delta_to_vec(&schema, &delta).unwrap();

    for cut in 0..bytes.len() {
        let result = decode_delta_from_slice(&schema, &bytes[..cut]);
        assert!(result.is_err(), "prefix of {cut} bytes should fail");
    }
}

#[test]
fn trailing_bytes_are_left_for_the_caller() {
    let schema = player_schema();
    let snap = player(1, 50, "Ann", &[]);
    let delta = pull_delta(&schema, &snap, &snap.clone()).unwrap();
    let mut bytes = encode_delta_to_vec(&schema, &delta).unwrap();
    let delta_len = bytes.len();
    bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    let (decoded, consumed) = decode_delta_from_slice(&schema, &bytes).unwrap();
    assert_eq!(decoded, delta);
    assert_eq!(consumed, delta_len);
}

#[test]
fn two_deltas_decode_back_to_back() {
    let schema = player_schema();
    let a = player(1, 1, "Ann", &[]);
    let b = player(1, 2, "Ann", &[]);
    let c = player(1, 3, "Ann", &["t"]);

    let first = pull_delta(&schema, &a, &b).unwrap();
    let second = pull_delta(&schema, &b, &c).unwrap();

    let mut stream = encode_delta_to_vec(&schema, &first).unwrap();
    stream.extend(encode_delta_to_vec(&schema, &second).unwrap());

    let (decoded_first, consumed) = decode_delta_from_slice(&schema, &stream).unwrap();
    let (decoded_second, rest) = decode_delta_from_slice(&schema, &stream[consumed..]).unwrap();
    assert_eq!(decoded_first, first);
    assert_eq!(decoded_second, second);
    assert_eq!(consumed + rest, stream.len());
}

#[test]
fn corrupt_presence_byte_reports_field_index() {
    let schema = player_schema();
    let mut bytes = vec![0x00; schema.field_count()];
    bytes[2] = 0x42;
    let err = decode_delta_from_slice(&schema, &bytes).unwrap_err();
    assert_eq!(
        err,
        CodecError::UnknownPresenceMarker {
            field: 2,
            found: 0x42
        }
    );
}

#[test]
fn canonicalized_maps_encode_identically() {
    let schema = RecordSchema::from_declared(
        "Scores",
        "id",
        &[("id", "i64"), ("by_name", "map<string, i16>")],
    )
    .unwrap();

    let mut forward = RecordDelta::new(vec![Some(FieldValue::Map(vec![
        (FieldValue::Str("ann".into()), FieldValue::I16(1)),
        (FieldValue::Str("bea".into()), FieldValue::I16(2)),
    ]))])
    .into_slots();
    let mut reversed = RecordDelta::new(vec![Some(FieldValue::Map(vec![
        (FieldValue::Str("bea".into()), FieldValue::I16(2)),
        (FieldValue::Str("ann".into()), FieldValue::I16(1)),
    ]))])
    .into_slots();

    for slot in forward.iter_mut().chain(reversed.iter_mut()).flatten() {
        slot.sort_map_entries();
    }
    let a = encode_delta_to_vec(&schema, &RecordDelta::new(forward)).unwrap();
    let b = encode_delta_to_vec(&schema, &RecordDelta::new(reversed)).unwrap();
    assert_eq!(a, b);
}
