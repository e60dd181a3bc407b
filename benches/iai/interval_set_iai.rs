//! IAI-Callgrind benchmark for IntervalSet lookups and inserts.
//!
//! Measures instruction counts for linear vs binary lookup on a set just below
//! and well above the linear search threshold, plus incremental construction.

use coalescing_set::interval::{IntervalSet, SearchStrategy};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

fn setup_set(boundary_count: u32) -> IntervalSet<u32> {
    (0..boundary_count / 2)
        .map(|index| (index * 4, index * 4 + 2))
        .collect()
}

fn setup_set_62() -> IntervalSet<u32> {
    setup_set(62)
}

fn setup_set_4096() -> IntervalSet<u32> {
    setup_set(4096)
}

fn setup_intervals_512() -> Vec<(u32, u32)> {
    (0..512).map(|index| (index * 4, index * 4 + 2)).collect()
}

fn probe_all(set: &IntervalSet<u32>, strategy: SearchStrategy) -> usize {
    let upper = u32::try_from(set.boundaries().len()).unwrap_or(u32::MAX) * 2;
    (0..upper)
        .filter(|probe| set.contains_with(black_box(probe), strategy))
        .count()
}

// Lookup below the threshold
#[library_benchmark]
#[bench::with_setup(setup_set_62())]
fn linear_contains_62(set: IntervalSet<u32>) -> usize {
    black_box(probe_all(&set, SearchStrategy::Linear))
}

#[library_benchmark]
#[bench::with_setup(setup_set_62())]
fn binary_contains_62(set: IntervalSet<u32>) -> usize {
    black_box(probe_all(&set, SearchStrategy::Binary))
}

// Lookup above the threshold
#[library_benchmark]
#[bench::with_setup(setup_set_4096())]
fn linear_contains_4096(set: IntervalSet<u32>) -> usize {
    black_box(probe_all(&set, SearchStrategy::Linear))
}

#[library_benchmark]
#[bench::with_setup(setup_set_4096())]
fn binary_contains_4096(set: IntervalSet<u32>) -> usize {
    black_box(probe_all(&set, SearchStrategy::Binary))
}

// Incremental construction
#[library_benchmark]
#[bench::with_setup(setup_intervals_512())]
fn collect_insert_512(intervals: Vec<(u32, u32)>) -> IntervalSet<u32> {
    black_box(black_box(intervals).into_iter().collect())
}

library_benchmark_group!(
    name = interval_set_group;
    benchmarks =
        linear_contains_62, binary_contains_62,
        linear_contains_4096, binary_contains_4096,
        collect_insert_512
);

main!(library_benchmark_groups = interval_set_group);
