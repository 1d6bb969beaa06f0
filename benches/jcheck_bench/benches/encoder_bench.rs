//! Value encoder benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jcheck_core::{to_javascript, JsRegex, Map, Value};

fn nested_object(width: usize) -> Value {
    let mut map = Map::new();
    for i in 0..width {
        map.insert(
            format!("key_{}", i),
            Value::Array(vec![
                Value::Int(i as i64),
                Value::Float(i as f64 / 3.0),
                Value::String(format!("line {}\n\"quoted\" </script>", i)),
                Value::Regex(JsRegex::new("a/b")),
            ]),
        );
    }
    Value::Object(map)
}

/// Benchmark encoding of flat and nested values
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("scalar_string", |b| {
        let value = Value::from("It's a \"quoted\" string with\ttabs");
        b.iter(|| to_javascript(black_box(&value)))
    });

    for width in [4usize, 32, 256] {
        let value = nested_object(width);
        group.bench_with_input(BenchmarkId::new("object", width), &value, |b, value| {
            b.iter(|| to_javascript(black_box(value)))
        });
    }

    group.finish();
}

/// Benchmark conversion from serde_json values
fn bench_from_json(c: &mut Criterion) {
    let json = serde_json::json!({
        "live": true,
        "messages": {"required": "can't be blank", "too_long": "is too long"},
        "classes": ["error", "field_with_errors"],
        "delay": 250
    });

    c.bench_function("from_json", |b| {
        b.iter(|| to_javascript(&Value::from(black_box(json.clone()))))
    });
}

criterion_group!(benches, bench_encode, bench_from_json);
criterion_main!(benches);
