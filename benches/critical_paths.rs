//! Criterion benchmarks for timing-fn critical paths
//!
//! Benchmarks the operations a style engine runs per declaration:
//! - Parser: keywords, cubic-bezier() and steps() values
//! - Resolver: valid values and fallbacks to the initial value
//! - Fixtures: loading and running a conformance table

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use timing_fn::fixtures::{load_fixture_str, run_cases};
use timing_fn::{initial_value, parse, resolve};

// =============================================================================
// Test Data Generators
// =============================================================================

const SAMPLE_VALUES: &[&str] = &[
    "ease",
    "ease-in-out",
    "step-end",
    "steps(4)",
    "steps(12, start)",
    "cubic-bezier(0.68, -0.55, 0.265, 1.55)",
    "cubic-bezier(.5, 2e1, 1.0, -3.25)",
    "cubic-bezier(1.1, 0, 0.5, 1)",
    "steps(foobar)",
    "bounce",
];

/// Generate a fixture table with n rows cycling through the sample values
fn make_fixture_table(n: usize) -> String {
    let initial = initial_value();
    (0..n)
        .map(|i| {
            let input = SAMPLE_VALUES[i % SAMPLE_VALUES.len()];
            let expected = resolve(input, &initial).computed_string();
            format!(r#"{{"input": "{}", "expected": "{}"}}"#, input, expected)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Parser Benchmarks
// =============================================================================

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    group.bench_function("keyword", |b| b.iter(|| parse(black_box("ease-in-out"))));

    group.bench_function("cubic_bezier", |b| {
        b.iter(|| parse(black_box("cubic-bezier(0.68, -0.55, 0.265, 1.55)")))
    });

    group.bench_function("steps", |b| b.iter(|| parse(black_box("steps(12, start)"))));

    group.bench_function("rejected", |b| {
        b.iter(|| parse(black_box("cubic-bezier(1.1, 0, 0.5, 1)")))
    });

    group.throughput(Throughput::Elements(SAMPLE_VALUES.len() as u64));
    group.bench_function("mixed_batch", |b| {
        b.iter(|| {
            for value in SAMPLE_VALUES {
                let _ = parse(black_box(value));
            }
        })
    });

    group.finish();
}

// =============================================================================
// Resolver Benchmarks
// =============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let initial = initial_value();

    group.bench_function("valid", |b| {
        b.iter(|| resolve(black_box("steps(3, start)"), black_box(&initial)))
    });

    group.bench_function("fallback", |b| {
        b.iter(|| resolve(black_box("steps(3, top)"), black_box(&initial)))
    });

    group.bench_function("canonical_string", |b| {
        let resolution = resolve("cubic-bezier(0.1, -0.2, 0.3, -0.4)", &initial);
        b.iter(|| black_box(&resolution).computed_string())
    });

    group.finish();
}

// =============================================================================
// Fixture Benchmarks
// =============================================================================

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");
    let initial = initial_value();

    for size in [10, 100, 1000].iter() {
        let table = make_fixture_table(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("load", size), &table, |b, table| {
            b.iter(|| load_fixture_str(black_box(table)))
        });

        let cases = load_fixture_str(&table).expect("generated table should load");
        group.bench_with_input(BenchmarkId::new("run", size), &cases, |b, cases| {
            b.iter(|| run_cases(black_box(cases), black_box(&initial), false))
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_parser, bench_resolve, bench_fixtures);

criterion_main!(benches);
