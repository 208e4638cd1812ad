//! Benchmarks for the query interpreter
//!
//! Measures rule-table evaluation per question shape and the cost of
//! rendering full-detail summaries.
//! Run with: `cargo bench --bench interpreter`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use solar_almanac::{default_catalog, Almanac, Body, Catalog, QueryInterpreter, Satellite};

// =============================================================================
// Benchmark Data
// =============================================================================

const QUESTIONS: &[(&str, &str)] = &[
    ("mass", "How massive is Jupiter?"),
    ("distance", "How far is Neptune from the Sun?"),
    ("moons", "How many moons does Saturn have?"),
    ("summary", "Tell me everything about Uranus"),
    ("membership", "Is Pluto in the list of planets?"),
    ("enumeration", "List all planets"),
    ("fallback", "What is the meaning of life?"),
];

/// Catalog padded with synthetic bodies so subject detection scans further
fn large_catalog(extra: usize) -> Catalog {
    let mut catalog = default_catalog();
    for i in 0..extra {
        catalog.add_body(
            Body::new(format!("Object-{}", i), 0.001 * i as f64, 6000.0 + i as f64)
                .with_satellite(Satellite::named(format!("Moonlet-{}", i))),
        );
    }
    catalog
}

// =============================================================================
// Interpreter Benchmarks
// =============================================================================

fn bench_question_shapes(c: &mut Criterion) {
    let catalog = default_catalog();
    let interpreter = QueryInterpreter::new(&catalog);

    let mut group = c.benchmark_group("answer");
    for (label, question) in QUESTIONS {
        group.bench_with_input(BenchmarkId::new("default", label), question, |b, q| {
            b.iter(|| interpreter.answer(black_box(q)))
        });
    }
    group.finish();
}

fn bench_catalog_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback_scan");

    for extra in [0usize, 100, 1_000] {
        let almanac = Almanac::from_catalog(large_catalog(extra));
        let interpreter = almanac.interpreter();
        group.bench_with_input(
            BenchmarkId::new("bodies", almanac.catalog().len()),
            &interpreter,
            |b, interpreter| b.iter(|| interpreter.interpret(black_box("What time is it?"))),
        );
    }
    group.finish();
}

fn bench_summary_render(c: &mut Criterion) {
    let catalog = default_catalog();

    c.bench_function("render_all_summaries", |b| {
        b.iter(|| {
            catalog
                .iter()
                .map(|body| body.to_string().len())
                .sum::<usize>()
        })
    });
}

criterion_group!(
    interpreter_benchmarks,
    bench_question_shapes,
    bench_catalog_size,
    bench_summary_render,
);

criterion_main!(interpreter_benchmarks);
