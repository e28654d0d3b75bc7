//! Descriptive statistics, correlation and regression tests.

mod common;

use approx::assert_relative_eq;
use quantlab::core::{impute_mean, impute_median, observed_values};
use quantlab::solvers::linear_regression;
use quantlab::utils::{correlation, correlation_matrix, mean, median, standardize, std};

// ============================================================================
// Dispersion
// ============================================================================

#[test]
fn test_population_std_never_exceeds_sample_std() {
    let series: Vec<Vec<f64>> = vec![
        vec![1.0],
        vec![1.0, 2.0],
        vec![3.0, 7.0, 7.0, 19.0],
        (0..50).map(|i| (i as f64 * 0.37).sin() * 10.0).collect(),
    ];

    for xs in &series {
        assert!(std(xs, false) <= std(xs, true) + 1e-15);
    }
}

#[test]
fn test_constant_sequence_has_zero_std() {
    let xs = vec![4.2; 12];
    assert_eq!(std(&xs, true), 0.0);
    assert_eq!(std(&xs, false), 0.0);
}

// ============================================================================
// Correlation
// ============================================================================

#[test]
fn test_self_correlation_is_one() {
    let (_, ys) = common::noisy_line(40, 1.0, 0.3, 2.0, 9);
    assert_relative_eq!(correlation(&ys, &ys), 1.0, epsilon = 1e-12);
}

#[test]
fn test_correlation_symmetry() {
    let (xs, ys) = common::noisy_line(40, 1.0, 0.3, 5.0, 17);
    assert_relative_eq!(correlation(&xs, &ys), correlation(&ys, &xs), epsilon = 1e-12);
}

#[test]
fn test_correlation_matrix_matches_pairwise() {
    let (xs, ys) = common::noisy_line(30, 0.0, 1.0, 3.0, 4);
    let zs: Vec<f64> = xs.iter().map(|x| (x * 0.5).cos()).collect();
    let series = vec![xs.clone(), ys.clone(), zs.clone()];

    let m = correlation_matrix(&series);

    assert_relative_eq!(m[(0, 1)], correlation(&xs, &ys), epsilon = 1e-12);
    assert_relative_eq!(m[(2, 1)], correlation(&zs, &ys), epsilon = 1e-12);
    assert_eq!(m[(1, 1)], 1.0);
}

// ============================================================================
// Regression
// ============================================================================

#[test]
fn test_regression_exact_line() {
    let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]);

    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-12);
    assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
}

#[test]
fn test_regression_residuals_sum_to_zero() {
    for seed in [1, 2, 3] {
        let (xs, ys) = common::noisy_line(80, 4.0, -0.7, 6.0, seed);
        let fit = linear_regression(&xs, &ys);

        assert!(fit.residuals.iter().sum::<f64>().abs() < 1e-8);
        assert!(common::approx_eq(fit.slope, -0.7, 0.1));
    }
}

#[test]
fn test_regression_on_cohort() {
    let (age, los) = common::age_and_los(300, 42);
    let fit = linear_regression(&age, &los);

    // Length of stay rises by about 0.1 day per year of age
    assert!(fit.slope > 0.0);
    assert!(fit.r_squared > 0.0 && fit.r_squared < 1.0);
    assert_eq!(fit.fitted.len(), 300);
}

// ============================================================================
// Standardization and imputation
// ============================================================================

#[test]
fn test_standardize_has_zero_mean_unit_std() {
    let (_, ys) = common::noisy_line(25, 10.0, 2.0, 3.0, 8);
    let z = standardize(&ys);

    assert_relative_eq!(mean(&z), 0.0, epsilon = 1e-12);
    assert_relative_eq!(std(&z, true), 1.0, epsilon = 1e-12);
}

#[test]
fn test_imputation_preserves_observed_center() {
    let values = vec![Some(3.0), None, Some(8.0), Some(1.0), None, Some(4.0), None];
    let observed = observed_values(&values);

    let by_mean = impute_mean(&values);
    let by_median = impute_median(&values);

    assert_eq!(by_mean.len(), values.len());
    assert_relative_eq!(mean(&by_mean), mean(&observed), epsilon = 1e-12);
    assert_relative_eq!(median(&by_median), median(&observed), epsilon = 1e-12);
}
