use std::collections::BTreeMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use column_fallback::{render_conditional_expression, FallbackRegistry, InMemorySchema, Value};

const CHAIN_LEN: usize = 8;

/// Chain `c7 -> c6 -> ... -> c0` where only `c0` exists.
fn make_registry() -> (FallbackRegistry, InMemorySchema) {
    let mut registry = FallbackRegistry::new();
    registry.register_column("c0", None, false).unwrap();
    for i in 1..CHAIN_LEN {
        let prev = format!("c{}", i - 1);
        registry
            .register_column(&format!("c{i}"), Some(&prev), false)
            .unwrap();
    }
    let schema = InMemorySchema::new().with_table("t", ["c0"]);
    (registry, schema)
}

fn bench_resolve_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));

    group.bench_function("column_cold", |b| {
        b.iter_batched(
            make_registry,
            |(registry, schema)| registry.resolve_column(&schema, "t", "c7").unwrap(),
            criterion::BatchSize::SmallInput,
        );
    });

    let (registry, schema) = make_registry();
    registry.resolve_column(&schema, "t", "c7").unwrap();
    group.bench_function("column_memoized", |b| {
        b.iter(|| registry.resolve_column(black_box(&schema), "t", black_box("c7")).unwrap());
    });

    let mut row = BTreeMap::new();
    row.insert("c0".to_string(), Value::from("payload"));
    row.insert("c7".to_string(), Value::from(""));
    group.bench_function("value", |b| {
        b.iter(|| registry.resolve_value(black_box(&row), black_box("c7")).unwrap().cloned());
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let columns: Vec<String> = (0..CHAIN_LEN).map(|i| format!("c{i}")).collect();
    c.bench_function("render/case_8", |b| {
        b.iter(|| render_conditional_expression(black_box(&columns), Some("products")));
    });
}

criterion_group!(resolve, bench_resolve_column, bench_render);
criterion_main!(resolve);
