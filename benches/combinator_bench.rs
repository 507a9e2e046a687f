//! Benchmark for the container combinator hot path.
//!
//! Measures chained transforms over the synchronous container and the
//! ordered aggregation of many containers.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use yepnah::outcome::combinator::all;
use yepnah::outcome::{Outcome, failure, success};

// =============================================================================
// Chained Transform Benchmarks
// =============================================================================

fn benchmark_transform_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("transform_chain");

    group.bench_function("success_path", |bencher| {
        bencher.iter(|| {
            let result = success::<i32, String>(black_box(5))
                .map(|n| n + 1)
                .flat(|n| if n > 100 { failure("big".to_string()) } else { success(n) })
                .map(|n| n * 2)
                .unwrap_or(0);
            black_box(result)
        });
    });

    group.bench_function("short_circuit_path", |bencher| {
        bencher.iter(|| {
            let result = failure::<i32, String>(black_box("oops".to_string()))
                .map(|n| n + 1)
                .flat(|n: i32| success::<i32, String>(n * 2))
                .unwrap_or(0);
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn benchmark_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("all_aggregation");

    for size in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("all_successes", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let outcomes = (0..size).map(|n| success::<i32, String>(n));
                    black_box(all(outcomes))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("early_failure", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let outcomes = (0..size).map(|n| {
                        if n == 0 {
                            failure("first".to_string())
                        } else {
                            success::<i32, String>(n)
                        }
                    });
                    black_box(all(outcomes))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_transform_chain, benchmark_all);
criterion_main!(benches);
