//! Common test utilities and data generators.

#![allow(dead_code)]

use quantlab::data::{generate, observed, Field};

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic noisy line y = intercept + slope * x + noise.
pub fn noisy_line(
    n: usize,
    intercept: f64,
    slope: f64,
    noise: f64,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs
        .iter()
        .map(|&x| intercept + slope * x + noise * next())
        .collect();
    (xs, ys)
}

/// Observed (age, los_days) pairs from a generated cohort.
pub fn age_and_los(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let cohort = generate(size, seed);
    (observed(&cohort, Field::Age), observed(&cohort, Field::LosDays))
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
