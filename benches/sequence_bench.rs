//! Benchmark for lazy pipelines vs standard iterator adapters.
//!
//! Every lazy combinator funnels through `flat_map`; these benchmarks show
//! the cost of that indirection against the equivalent `std::iter` chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazy_iterable::chain::chain;
use lazy_iterable::derived::generate;
use lazy_iterable::keyed::group_by;
use std::hint::black_box;

// =============================================================================
// map/filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Chain", size), &values, |bencher, values| {
            bencher.iter(|| {
                let result = chain(black_box(values))
                    .filter(|value, _| value % 3 == 0)
                    .map(|value, _| value * value)
                    .sum();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_iter", size), &values, |bencher, values| {
            bencher.iter(|| {
                let result: u64 = black_box(values)
                    .iter()
                    .filter(|value| *value % 3 == 0)
                    .map(|value| value * value)
                    .sum();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Infinite Source Benchmark
// =============================================================================

fn benchmark_generate_take(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("generate_take");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Chain", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(generate(|index| index * 2, None).take(size).to_array()));
        });

        group.bench_with_input(BenchmarkId::new("std_iter", size), &size, |bencher, &size| {
            bencher.iter(|| black_box((0..).map(|index: usize| index * 2).take(size).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// uniq Benchmark
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for size in [100, 1000, 10000] {
        let values: Vec<u32> = (0..size).map(|index| index % 97).collect();

        group.bench_with_input(BenchmarkId::new("Chain", size), &values, |bencher, values| {
            bencher.iter(|| black_box(chain(black_box(values)).uniq().to_array()));
        });

        group.bench_with_input(BenchmarkId::new("std_hashset", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut seen = std::collections::HashSet::new();
                let result: Vec<u32> = black_box(values)
                    .iter()
                    .copied()
                    .filter(|value| seen.insert(*value))
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// group_by Benchmark
// =============================================================================

fn benchmark_group_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [100, 1000, 10000] {
        let pairs: Vec<(String, u64)> = (0..size).map(|index| ((index % 31).to_string(), index)).collect();

        group.bench_with_input(BenchmarkId::new("group_by", size), &pairs, |bencher, pairs| {
            bencher.iter(|| black_box(group_by(black_box(pairs), |prior, value| prior + value)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_map_filter,
    benchmark_generate_take,
    benchmark_uniq,
    benchmark_group_by
);

criterion_main!(benches);
