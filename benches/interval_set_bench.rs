//! IntervalSet membership and insertion benchmark.
//!
//! Compares linear vs binary lookup on both sides of the default threshold, and
//! measures building sets by incremental `insert`.
//!
//! Pre-built sets are reused across iterations; only the probe varies.

use coalescing_set::interval::{IntervalSet, LINEAR_SEARCH_THRESHOLD, SearchStrategy};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const BOUNDARY_COUNTS: [u32; 6] = [8, 32, 63, 64, 256, 4096];

/// Builds a set of `boundary_count / 2` disjoint intervals of width 2, spaced by 4.
fn generate_set(boundary_count: u32) -> IntervalSet<u32> {
    (0..boundary_count / 2)
        .map(|index| (index * 4, index * 4 + 2))
        .collect()
}

fn probes(boundary_count: u32) -> Vec<u32> {
    (0..boundary_count * 2).step_by(3).collect()
}

fn benchmark_contains_strategies(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("interval_set_contains");

    for boundary_count in BOUNDARY_COUNTS {
        let set = generate_set(boundary_count);
        let probe_values = probes(boundary_count);

        for (label, strategy) in [
            ("linear", SearchStrategy::Linear),
            ("binary", SearchStrategy::Binary),
            ("adaptive", SearchStrategy::default()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(label, boundary_count),
                &probe_values,
                |bencher, probe_values| {
                    bencher.iter(|| {
                        for probe in probe_values {
                            black_box(set.contains_with(black_box(probe), strategy));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_threshold_sweep(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("interval_set_threshold_sweep");
    let set = generate_set(256);
    let probe_values = probes(256);

    for threshold in [0, 16, LINEAR_SEARCH_THRESHOLD, 128, 512] {
        group.bench_with_input(
            BenchmarkId::new("adaptive", threshold),
            &threshold,
            |bencher, &threshold| {
                let strategy = SearchStrategy::Adaptive { threshold };
                bencher.iter(|| {
                    for probe in &probe_values {
                        black_box(set.contains_with(black_box(probe), strategy));
                    }
                });
            },
        );
    }

    group.finish();
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("interval_set_insert");

    for boundary_count in [64u32, 1024] {
        let intervals: Vec<(u32, u32)> = (0..boundary_count / 2)
            .map(|index| (index * 4, index * 4 + 2))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("disjoint", boundary_count),
            &intervals,
            |bencher, intervals| {
                bencher.iter_batched(
                    || intervals.clone(),
                    |intervals| black_box(intervals.into_iter().collect::<IntervalSet<u32>>()),
                    BatchSize::SmallInput,
                );
            },
        );

        let base = generate_set(boundary_count);
        group.bench_with_input(
            BenchmarkId::new("bridge_all", boundary_count),
            &base,
            |bencher, base| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut set| {
                        set.insert(black_box(1), black_box(boundary_count * 2));
                        black_box(set)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_contains_strategies,
    benchmark_threshold_sweep,
    benchmark_insert
);
criterion_main!(benches);
