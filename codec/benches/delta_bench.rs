use codec::{
    apply_delta, decode_delta_from_slice, encode_delta_to_vec, pull_delta, FieldValue, RecordId,
    RecordSnapshot,
};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use schema::RecordSchema;

fn bench_schema() -> RecordSchema {
    RecordSchema::from_declared(
        "Player",
        "id",
        &[
            ("id", "i64"),
            ("round", "i16"),
            ("score", "i32"),
            ("x", "f64"),
            ("y", "f64"),
            ("name", "string"),
            ("is_active", "bool"),
            ("inventory", "list<string>"),
            ("scores", "map<string, i16>"),
        ],
    )
    .expect("bench schema is valid")
}

fn snapshot(id: i64, tick: u32) -> RecordSnapshot {
    let t = f64::from(tick);
    RecordSnapshot::new(
        RecordId::new(id),
        vec![
            FieldValue::I16((tick % 10) as i16),
            FieldValue::I32(tick as i32 * 7),
            FieldValue::F64(t * 0.5),
            FieldValue::F64(t * 0.25),
            FieldValue::Str(format!("player-{id}")),
            FieldValue::Bool(tick % 2 == 0),
            FieldValue::List(
                (0..8)
                    .map(|i| FieldValue::Str(format!("item-{i}")))
                    .collect(),
            ),
            FieldValue::Map(
                (0..4)
                    .map(|i| {
                        (
                            FieldValue::Str(format!("opp-{i}")),
                            FieldValue::I16((tick % 100) as i16),
                        )
                    })
                    .collect(),
            ),
        ],
    )
}

fn bench_pull_delta(c: &mut Criterion) {
    let schema = bench_schema();
    let from = snapshot(1, 101);
    let to = snapshot(1, 100);
    c.bench_function("pull_delta/9_fields", |b| {
        b.iter(|| pull_delta(&schema, &from, &to).unwrap());
    });
}

fn bench_encode(c: &mut Criterion) {
    let schema = bench_schema();
    let from = snapshot(1, 101);
    let to = snapshot(1, 100);
    let delta = pull_delta(&schema, &from, &to).unwrap();
    c.bench_function("encode_delta/9_fields", |b| {
        b.iter(|| encode_delta_to_vec(&schema, &delta).unwrap());
    });
}

fn bench_decode(c: &mut Criterion) {
    let schema = bench_schema();
    let from = snapshot(1, 101);
    let to = snapshot(1, 100);
    let delta = pull_delta(&schema, &from, &to).unwrap();
    let bytes = encode_delta_to_vec(&schema, &delta).unwrap();
    c.bench_function("decode_delta/9_fields", |b| {
        b.iter(|| decode_delta_from_slice(&schema, &bytes).unwrap());
    });
}

fn bench_apply(c: &mut Criterion) {
    let schema = bench_schema();
    let from = snapshot(1, 101);
    let to = snapshot(1, 100);
    let delta = pull_delta(&schema, &from, &to).unwrap();
    c.bench_function("apply_delta/9_fields", |b| {
        b.iter_batched(
            || to.clone(),
            |base| apply_delta(&base, &delta).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_pull_delta,
    bench_encode,
    bench_decode,
    bench_apply
);
criterion_main!(benches);
