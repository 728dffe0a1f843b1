#![allow(clippy::all)]
//! Benchmarks for the four measured algorithms.
//!
//! Mirrors the suite's own measurement discipline: sorts run against a
//! fresh clone of the input per iteration, searches probe for the
//! guaranteed-absent target so every run walks the full path.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;

use algobench::algorithms::{binary_search, insertion_sort, linear_search, merge_sort};
use algobench::dataset::{random_permutation, ABSENT_TARGET};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// ---------------------------------------------------------------------------
// Sorts
// ---------------------------------------------------------------------------

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let mut rng = rand::rng();

    for size in SIZES {
        let input = random_permutation(&mut rng, size);

        group.bench_with_input(BenchmarkId::new("insertion", size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| insertion_sort(black_box(data)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("merge", size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| merge_sort(black_box(data)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Searches
// ---------------------------------------------------------------------------

fn bench_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let mut rng = rand::rng();

    for size in SIZES {
        let input = random_permutation(&mut rng, size);
        let mut sorted = input.clone();
        sorted.sort_unstable();

        group.bench_with_input(BenchmarkId::new("linear_absent", size), &input, |b, input| {
            b.iter(|| linear_search(black_box(input), black_box(&ABSENT_TARGET)));
        });

        group.bench_with_input(
            BenchmarkId::new("binary_absent", size),
            &sorted,
            |b, sorted| {
                b.iter(|| binary_search(black_box(sorted), black_box(&ABSENT_TARGET)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_searches);
criterion_main!(benches);
