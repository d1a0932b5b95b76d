//! Set-operation benchmarks across the backing stores.
//!
//! Compares `VecCollection` (linear scan) against `HashCollection` and
//! `CompactCollection` for population, membership, union, and
//! intersection at several sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kollect::prelude::*;
use std::hint::black_box;

const SIZES: [i32; 3] = [10, 100, 1000];

fn benchmark_population(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("population");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut collection: VecCollection<i32> = VecCollection::new();
                collection.add_all(black_box(0..size));
                black_box(collection)
            });
        });
        group.bench_with_input(BenchmarkId::new("hash", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut collection: HashCollection<i32> = HashCollection::new();
                collection.add_all(black_box(0..size));
                black_box(collection)
            });
        });
        group.bench_with_input(
            BenchmarkId::new("compact", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut collection: CompactCollection<i32> = CompactCollection::new();
                    collection.add_all(black_box(0..size));
                    black_box(collection)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in SIZES {
        let vec_collection: VecCollection<i32> = (0..size).collect();
        let hash_collection: HashCollection<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("vec", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(vec_collection.contains(black_box(&(size - 1)))));
        });
        group.bench_with_input(BenchmarkId::new("hash", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(hash_collection.contains(black_box(&(size - 1)))));
        });
    }

    group.finish();
}

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("union");

    for size in SIZES {
        let left: HashCollection<i32> = (0..size).collect();
        let right: HashCollection<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("hash", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(&right)));
        });
    }

    group.finish();
}

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intersection");

    for size in SIZES {
        let left: HashCollection<i32> = (0..size).collect();
        let right: HashCollection<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("hash", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersection(&right)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_population,
    benchmark_contains,
    benchmark_union,
    benchmark_intersection
);
criterion_main!(benches);
