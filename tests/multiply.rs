use cache_oblivious::data::random_matrix;
use cache_oblivious::{multiply, naive_multiply};
use num_complex::Complex;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================
// Known values
// ============================================================

#[test]
fn test_2x3_times_3x2() {
    let a = vec![1, 2, 3, 4, 5, 6]; // 2x3
    let b = vec![7, 8, 9, 10, 11, 12]; // 3x2

    let mut c_naive = vec![0; 4];
    let mut c_fast = vec![0; 4];

    naive_multiply(&a, &b, &mut c_naive, 2, 3, 2);
    multiply(&a, &b, &mut c_fast, 2, 3, 2);

    assert_eq!(c_naive, vec![58, 64, 139, 154]);
    assert_eq!(c_naive, c_fast);
}

#[test]
fn test_identity() {
    let mut rng = StdRng::seed_from_u64(3);
    let (m, n) = (23usize, 41usize);

    let a: Vec<i64> = random_matrix(&mut rng, m, n);
    let mut eye = vec![0i64; n * n];
    for i in 0..n {
        eye[i * n + i] = 1;
    }

    let mut c = vec![0i64; m * n];
    multiply(&a, &eye, &mut c, m, n, n);
    assert_eq!(c, a, "A * I == A");

    let mut eye_m = vec![0i64; m * m];
    for i in 0..m {
        eye_m[i * m + i] = 1;
    }
    let mut c = vec![0i64; m * n];
    multiply(&eye_m, &a, &mut c, m, m, n);
    assert_eq!(c, a, "I * A == A");
}

// ============================================================
// Equivalence with the naive baseline
// ============================================================

#[test]
fn test_matches_naive_square() {
    // Straddle the leaf cutoff and the power-of-two splits.
    let sizes = [1usize, 3, 8, 15, 16, 17, 31, 32, 33, 64, 100];

    for size in sizes {
        let a: Vec<i32> = (0..size * size).map(|i| (i % 10) as i32).collect();
        let b: Vec<i32> = (0..size * size).map(|i| (i % 13) as i32).collect();

        let mut c_naive = vec![0i32; size * size];
        let mut c_fast = vec![0i32; size * size];

        naive_multiply(&a, &b, &mut c_naive, size, size, size);
        multiply(&a, &b, &mut c_fast, size, size, size);

        assert_eq!(c_naive, c_fast, "size {}", size);
    }
}

#[test]
fn test_matches_naive_non_square() {
    let test_cases = [
        (32usize, 48usize, 64usize), // wide result
        (64, 48, 32),                // tall result
        (100, 75, 50),               // odd sizes
        (48, 100, 48),               // deep k, forces k-splits
        (13, 19, 17),                // primes
        (1, 100, 1),                 // degenerate outer dims
    ];

    for (m, k, n) in test_cases {
        let a: Vec<i32> = (0..m * k).map(|i| (i % 10) as i32).collect();
        let b: Vec<i32> = (0..k * n).map(|i| (i % 10) as i32).collect();

        let mut c_naive = vec![0i32; m * n];
        let mut c_fast = vec![0i32; m * n];

        naive_multiply(&a, &b, &mut c_naive, m, k, n);
        multiply(&a, &b, &mut c_fast, m, k, n);

        assert_eq!(c_naive, c_fast, "{}x{}x{}", m, k, n);
    }
}

#[test]
fn test_matches_naive_element_types() {
    let mut rng = StdRng::seed_from_u64(5);
    let (m, k, n) = (33usize, 45usize, 27usize);

    // i8 stays in range because data::Sample keeps magnitudes tiny; the
    // kernels themselves never range-check.
    let a: Vec<i8> = random_matrix(&mut rng, m, k);
    let b: Vec<i8> = random_matrix(&mut rng, k, n);
    let mut c_naive = vec![0i8; m * n];
    let mut c_fast = vec![0i8; m * n];
    naive_multiply(&a, &b, &mut c_naive, m, k, n);
    multiply(&a, &b, &mut c_fast, m, k, n);
    assert_eq!(c_naive, c_fast, "i8");

    let a: Vec<Complex<i32>> = random_matrix(&mut rng, m, k);
    let b: Vec<Complex<i32>> = random_matrix(&mut rng, k, n);
    let mut c_naive = vec![Complex::new(0i32, 0); m * n];
    let mut c_fast = c_naive.clone();
    naive_multiply(&a, &b, &mut c_naive, m, k, n);
    multiply(&a, &b, &mut c_fast, m, k, n);
    assert_eq!(c_naive, c_fast, "Complex<i32>");
}

// ============================================================
// Accumulation (C += A*B, not C = A*B)
// ============================================================

#[test]
fn test_accumulation() {
    let size = 64;
    let a: Vec<i32> = (0..size * size).map(|i| (i % 10) as i32).collect();
    let b: Vec<i32> = (0..size * size).map(|i| (i % 10) as i32).collect();

    // Start with non-zero C
    let mut c_naive = vec![5i32; size * size];
    let mut c_fast = vec![5i32; size * size];

    naive_multiply(&a, &b, &mut c_naive, size, size, size);
    multiply(&a, &b, &mut c_fast, size, size, size);

    assert_eq!(c_naive, c_fast);

    // Verify values were accumulated, not overwritten
    assert!(c_fast[0] > 5, "Should accumulate, not overwrite");
}
