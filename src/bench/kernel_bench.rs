//! Criterion benchmarks: naive vs cache-oblivious, per engine.

use cache_oblivious::data::{random_matrix, random_vector};
use cache_oblivious::{
    forward_fft, multiply, naive_fft, naive_multiply, naive_transpose, transpose,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use num_complex::Complex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    let mut rng = StdRng::seed_from_u64(1);

    for &(rows, cols) in &[
        (100usize, 100usize),
        (500, 500),
        (500, 1000),
        (1000, 500),
        (1000, 1000),
        (5000, 5000),
    ] {
        let label = format!("{}x{}", rows, cols);
        group.throughput(Throughput::Elements((rows * cols) as u64));

        let a: Vec<i32> = random_matrix(&mut rng, rows, cols);
        let mut out = vec![0i32; cols * rows];

        group.bench_with_input(BenchmarkId::new("naive", &label), &label, |b, _| {
            b.iter(|| naive_transpose(black_box(&a), &mut out, rows, cols))
        });
        group.bench_with_input(BenchmarkId::new("oblivious", &label), &label, |b, _| {
            b.iter(|| transpose(black_box(&a), &mut out, rows, cols))
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(2);

    for &size in &[64usize, 256, 512] {
        let (m, k, n) = (size, size, size);
        group.throughput(Throughput::Elements((2 * m * k * n) as u64));

        let a: Vec<i32> = random_matrix(&mut rng, m, k);
        let b: Vec<i32> = random_matrix(&mut rng, k, n);

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, _| {
            bench.iter(|| {
                let mut c_out = vec![0i32; m * n];
                naive_multiply(black_box(&a), black_box(&b), &mut c_out, m, k, n);
                c_out
            })
        });
        group.bench_with_input(BenchmarkId::new("oblivious", size), &size, |bench, _| {
            bench.iter(|| {
                let mut c_out = vec![0i32; m * n];
                multiply(black_box(&a), black_box(&b), &mut c_out, m, k, n);
                c_out
            })
        });
    }
    group.finish();
}

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");
    let mut rng = StdRng::seed_from_u64(3);

    for &n in &[1usize << 10, 1 << 14, 1 << 18] {
        group.throughput(Throughput::Elements(n as u64));

        let x: Vec<Complex<f64>> = random_vector(&mut rng, n);

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, _| {
            b.iter(|| {
                let mut buf = x.clone();
                naive_fft(&mut buf);
                buf
            })
        });
        group.bench_with_input(BenchmarkId::new("oblivious", n), &n, |b, _| {
            b.iter(|| {
                let mut buf = x.clone();
                forward_fft(&mut buf);
                buf
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transpose, bench_multiply, bench_fft);
criterion_main!(benches);
