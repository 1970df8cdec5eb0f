//! Criterion micro-benchmarks for buffer allocation, population and the
//! full scenario.

use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion};
use heapbuf_arena::BufferPool;
use heapbuf_bench::{reference_profile, stress_profile, STRESS_CAPACITY};
use heapbuf_demo::{populate, run};

/// Benchmark: allocate and release a 5-element buffer.
fn bench_allocate_release_5(c: &mut Criterion) {
    let pool = BufferPool::unbounded();
    c.bench_function("allocate_release_5", |b| {
        b.iter(|| {
            let buffer = pool.allocate(black_box(5)).unwrap();
            black_box(buffer.capacity());
            buffer.release();
        });
    });
}

/// Benchmark: populate a 1M-element buffer with `i * 2`.
fn bench_populate_1m(c: &mut Criterion) {
    let pool = BufferPool::unbounded();
    let mut buffer = pool.allocate(STRESS_CAPACITY).unwrap();
    c.bench_function("populate_1m", |b| {
        b.iter(|| {
            populate(&mut buffer);
            black_box(buffer.as_slice()[STRESS_CAPACITY - 1]);
        });
    });
}

/// Benchmark: full allocate → populate → render → release, output discarded.
fn bench_run(c: &mut Criterion) {
    let reference = reference_profile();
    c.bench_function("run_reference", |b| {
        b.iter(|| black_box(run(&reference, &mut io::sink()).unwrap()));
    });

    let stress = stress_profile();
    c.bench_function("run_stress_1m", |b| {
        b.iter(|| black_box(run(&stress, &mut io::sink()).unwrap()));
    });
}

criterion_group!(benches, bench_allocate_release_5, bench_populate_1m, bench_run);
criterion_main!(benches);
