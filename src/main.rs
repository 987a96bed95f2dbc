//! Benchmark runner comparing naive vs cache-oblivious kernels.

use cache_oblivious::data::{random_matrix, random_vector};
use cache_oblivious::{
    forward_fft, multiply, naive_fft, naive_multiply, naive_transpose, transpose,
};
use num_complex::Complex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

/// Average wall time of `f` over `iters` runs, in milliseconds. Setup
/// happens in the closure's captures, outside the timed region.
fn time_ms(iters: usize, mut f: impl FnMut()) -> f64 {
    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iters as f64
}

fn report(name: &str, naive_ms: f64, oblivious_ms: f64) {
    println!(
        "{:<28} {:>10.2} ms {:>10.2} ms {:>7.2}x",
        name,
        naive_ms,
        oblivious_ms,
        naive_ms / oblivious_ms
    );
}

fn main() {
    println!("=== Cache-Oblivious Kernel Benchmark ===\n");
    println!(
        "{:<28} {:>13} {:>13} {:>8}",
        "", "naive", "oblivious", "speedup"
    );

    let mut rng = StdRng::seed_from_u64(42);
    let iterations = 3;

    for &(rows, cols) in &[(1000usize, 1000usize), (1000, 5000), (5000, 5000)] {
        let a: Vec<i32> = random_matrix(&mut rng, rows, cols);
        let mut out = vec![0i32; cols * rows];

        let naive_ms = time_ms(iterations, || naive_transpose(&a, &mut out, rows, cols));
        let obl_ms = time_ms(iterations, || transpose(&a, &mut out, rows, cols));
        report(&format!("transpose {}x{}", rows, cols), naive_ms, obl_ms);
    }

    for &size in &[256usize, 512, 1024] {
        let (m, k, n) = (size, size, size);
        let a: Vec<i32> = random_matrix(&mut rng, m, k);
        let b: Vec<i32> = random_matrix(&mut rng, k, n);

        // The kernels accumulate into C, so rezero before every run to keep
        // each timed iteration doing identical work.
        let mut c = vec![0i32; m * n];
        let naive_ms = time_ms(iterations, || {
            c.fill(0);
            naive_multiply(&a, &b, &mut c, m, k, n);
        });
        let obl_ms = time_ms(iterations, || {
            c.fill(0);
            multiply(&a, &b, &mut c, m, k, n);
        });
        report(&format!("multiply {0}x{0}x{0}", size), naive_ms, obl_ms);
    }

    for &n in &[1usize << 14, 1 << 17, 1 << 20] {
        let x: Vec<Complex<f64>> = random_vector(&mut rng, n);

        let mut buf = x.clone();
        let naive_ms = time_ms(iterations, || {
            buf.copy_from_slice(&x);
            naive_fft(&mut buf);
        });
        let obl_ms = time_ms(iterations, || {
            buf.copy_from_slice(&x);
            forward_fft(&mut buf);
        });
        report(&format!("fft 2^{}", n.trailing_zeros()), naive_ms, obl_ms);
    }
}
