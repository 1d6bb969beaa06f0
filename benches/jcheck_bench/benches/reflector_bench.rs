//! Reflector benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jcheck_bench::BenchModel;
use jcheck_core::{jcheck_for, jcheck_for_attribute, JcheckOptions};

/// Benchmark full script generation by model size
fn bench_jcheck_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("jcheck_for");
    let options = JcheckOptions::new().option("live", true);

    for attributes in [1usize, 10, 100] {
        let model = BenchModel::with_attributes(attributes);
        group.bench_with_input(
            BenchmarkId::from_parameter(attributes),
            &model,
            |b, model| b.iter(|| jcheck_for(black_box(model), black_box(&options))),
        );
    }

    group.finish();
}

/// Benchmark a single attribute's rule object
fn bench_jcheck_for_attribute(c: &mut Criterion) {
    let model = BenchModel::with_attributes(10);

    c.bench_function("jcheck_for_attribute", |b| {
        b.iter(|| jcheck_for_attribute(black_box(&model), black_box("field_5")))
    });
}

/// Benchmark filtered generation
fn bench_filtered(c: &mut Criterion) {
    let model = BenchModel::with_attributes(100);
    let options = JcheckOptions::new()
        .only_attributes((0..50).map(|i| format!("field_{}", i)))
        .exclude_attributes(["field_0", "field_1"])
        .generate_field_names(false);

    c.bench_function("jcheck_for_filtered", |b| {
        b.iter(|| jcheck_for(black_box(&model), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_jcheck_for,
    bench_jcheck_for_attribute,
    bench_filtered
);
criterion_main!(benches);
