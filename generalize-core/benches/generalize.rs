use criterion::{criterion_group, criterion_main, Criterion};
use generalize_core::{generalize, generalize_from_strings, GeneralizeConfig};
use serde_json::{json, Value};
use std::hint::black_box;

fn sample_records(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("user-{i}"),
                "active": i % 2 == 0,
                "score": if i % 3 == 0 { Value::Null } else { json!(i as f64 / 7.0) },
                "tags": (0..i % 5).map(|t| format!("t{t}")).collect::<Vec<_>>(),
                "address": {"city": "NYC", "zip": if i % 4 == 0 { json!(10001) } else { json!("10001") }}
            })
        })
        .collect()
}

fn bench_generalize(c: &mut Criterion) {
    let records = sample_records(1_000);
    c.bench_function("generalize_1000_records", |b| {
        b.iter(|| generalize(black_box(&records)))
    });

    let ndjson: String = records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let config = GeneralizeConfig {
        delimiter: Some(b'\n'),
        ..Default::default()
    };
    let inputs = vec![ndjson];
    c.bench_function("generalize_ndjson_1000_records", |b| {
        b.iter(|| generalize_from_strings(black_box(&inputs), config.clone()))
    });
}

criterion_group!(benches, bench_generalize);
criterion_main!(benches);
