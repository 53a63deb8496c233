//! Criterion benchmarks for the counting-sort engine, with and without tracing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortviz_core::{CountingSort, TraceEvent};

/// Deterministic pseudo-random values in `0..range`.
fn gen_values(size: usize, range: u64) -> Vec<i64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..size)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % range) as i64
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let engine = CountingSort::default();
    let sizes = [10, 100, 1000, 10000];
    let mut group = c.benchmark_group("counting_sort");

    for size in sizes {
        let values = gen_values(size, 256);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, v| {
            b.iter(|| engine.sort(black_box(v)))
        });
    }
    group.finish();
}

fn bench_sort_traced(c: &mut Criterion) {
    let engine = CountingSort::default();
    let sizes = [10, 100, 1000, 10000];
    let mut group = c.benchmark_group("counting_sort_traced");

    for size in sizes {
        let values = gen_values(size, 256);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, v| {
            b.iter(|| {
                let mut events: Vec<TraceEvent> = Vec::with_capacity(v.len() * 2);
                let _ = engine.sort_traced(black_box(v), &mut events);
                events
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_sort_traced);
criterion_main!(benches);
