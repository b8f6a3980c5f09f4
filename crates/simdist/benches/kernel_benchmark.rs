//! Benchmark the dispatched SIMD kernels against the scalar reference.
//!
//! Run with: `cargo bench --bench kernel_benchmark`

#![allow(clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use simdist::simd::scalar;
use simdist::{dot_product, squared_l2, warmup};

fn generate_vector(dim: usize, seed: f32) -> Vec<f32> {
    (0..dim).map(|i| (seed + i as f32 * 0.1).sin()).collect()
}

fn bench_dot_product(c: &mut Criterion) {
    warmup();
    let mut group = c.benchmark_group("dot_product");

    for dim in &[9, 128, 384, 768, 1536, 3072] {
        let a = generate_vector(*dim, 0.0);
        let b = generate_vector(*dim, 1.0);

        group.bench_with_input(BenchmarkId::new("dispatch", dim), dim, |bencher, _| {
            bencher.iter(|| dot_product(black_box(&a), black_box(&b)));
        });

        group.bench_with_input(BenchmarkId::new("scalar", dim), dim, |bencher, _| {
            bencher.iter(|| scalar::dot(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_squared_l2(c: &mut Criterion) {
    warmup();
    let mut group = c.benchmark_group("squared_l2");

    for dim in &[9, 128, 384, 768, 1536, 3072] {
        let a = generate_vector(*dim, 0.0);
        let b = generate_vector(*dim, 1.0);

        group.bench_with_input(BenchmarkId::new("dispatch", dim), dim, |bencher, _| {
            bencher.iter(|| squared_l2(black_box(&a), black_box(&b)));
        });

        group.bench_with_input(BenchmarkId::new("scalar", dim), dim, |bencher, _| {
            bencher.iter(|| scalar::squared_l2(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dot_product, bench_squared_l2);
criterion_main!(benches);
