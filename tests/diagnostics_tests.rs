//! Integration tests for regression diagnostics.

mod common;

use approx::assert_relative_eq;
use quantlab::core::{DiagnosticsOptions, OptionsError, VifMethod};
use quantlab::data::{generate, observed, reference_datasets, DatasetKind, Field};
use quantlab::diagnostics::{
    auxiliary_vif, calculate_vif, cooks_distance, correlated_pairs, high_leverage_points,
    influential_cooks, leverage, DiagnosticReport, MulticollinearityReport, VifSeverity,
    VIF_CEILING,
};
use quantlab::solvers::linear_regression;
use quantlab::utils::correlation_matrix;

// ============================================================================
// Leverage Tests
// ============================================================================

#[test]
fn test_leverage_bounds_and_sum() {
    let (xs, _) = common::noisy_line(50, 0.0, 1.0, 1.0, 3);
    let h = leverage(&xs);
    let n = xs.len() as f64;

    for &hi in &h {
        assert!(hi >= 1.0 / n - 1e-12 && hi <= 1.0 + 1e-12);
    }
    assert_relative_eq!(h.iter().sum::<f64>(), 2.0, epsilon = 1e-10);
}

#[test]
fn test_leverage_constant_predictor() {
    let h = leverage(&[3.0; 8]);
    assert!(h.iter().all(|&hi| hi == 1.0 / 8.0));
}

#[test]
fn test_leverage_extreme_point() {
    let mut xs: Vec<f64> = (0..20).map(f64::from).collect();
    xs.push(200.0);

    let h = leverage(&xs);
    let flagged = high_leverage_points(&h, 2, None);

    assert_eq!(flagged, vec![20]);
}

// ============================================================================
// Cook's Distance Tests
// ============================================================================

#[test]
fn test_cooks_distance_non_negative() {
    let (xs, ys) = common::noisy_line(40, 1.0, 2.0, 3.0, 8);
    let fit = linear_regression(&xs, &ys);
    let cooks = cooks_distance(&fit.residuals, &leverage(&xs), fit.mse(), 2);

    assert_eq!(cooks.len(), 40);
    assert!(cooks.iter().all(|&d| d >= 0.0 && d.is_finite()));
}

#[test]
fn test_cooks_distance_perfect_fit_is_zero() {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [3.0, 5.0, 7.0, 9.0, 11.0];
    let fit = linear_regression(&xs, &ys);

    let cooks = cooks_distance(&fit.residuals, &leverage(&xs), fit.mse(), 2);

    assert!(cooks.iter().all(|&d| d == 0.0));
    assert!(influential_cooks(&cooks, None).is_empty());
}

#[test]
fn test_outlier_is_influential() {
    let (mut xs, mut ys) = common::noisy_line(30, 0.0, 1.0, 0.5, 6);
    xs.push(60.0);
    ys.push(-20.0);

    let report = DiagnosticReport::compute(&xs, &ys, &DiagnosticsOptions::default());

    assert!(report.influential.contains(&30));
    let max_idx = report
        .cooks_distance
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    assert_eq!(max_idx, Some(30));
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_report_on_reference_cohort() {
    common::init_logging();

    let cohort = reference_datasets().get(DatasetKind::Clean);
    let age = observed(cohort, Field::Age);
    let los = observed(cohort, Field::LosDays);

    let report = DiagnosticReport::compute(&age, &los, &DiagnosticsOptions::default());

    assert_eq!(report.leverage.len(), 300);
    assert_eq!(report.qq.len(), 300);
    assert!(report.fit.slope > 0.0);
    assert!(report.n_influential() < 60);
    assert!(report
        .qq
        .windows(2)
        .all(|w| w[0].sample <= w[1].sample && w[0].theoretical < w[1].theoretical));
}

#[test]
fn test_report_respects_explicit_thresholds() {
    let (xs, ys) = common::noisy_line(40, 1.0, 1.0, 2.0, 10);

    let strict = DiagnosticsOptions::builder()
        .cooks_threshold(1e-12)
        .leverage_threshold(1e-12)
        .build_validated()
        .unwrap();
    let report = DiagnosticReport::compute(&xs, &ys, &strict);

    // Every point has positive leverage
    assert_eq!(report.high_leverage.len(), 40);

    let lax = DiagnosticsOptions::builder().cooks_threshold(1e9).build();
    assert_eq!(DiagnosticReport::compute(&xs, &ys, &lax).n_influential(), 0);
}

#[test]
fn test_invalid_options_rejected() {
    let result = DiagnosticsOptions::builder().n_params(0).build_validated();
    assert!(matches!(result, Err(OptionsError::InvalidParameterCount(0))));
}

// ============================================================================
// VIF Tests
// ============================================================================

#[test]
fn test_vif_on_cohort_predictors() {
    let cohort = generate(500, 17);
    let series = vec![
        observed(&cohort, Field::Age),
        observed(&cohort, Field::Bmi),
        observed(&cohort, Field::Hemoglobin),
    ];

    for method in [VifMethod::AveragedCorrelation, VifMethod::AuxiliaryRegression] {
        let vif = calculate_vif(&series, method);
        assert_eq!(vif.len(), 3);
        for v in vif {
            assert!(v >= 1.0 && v < 5.0, "{method:?}: VIF = {v}");
            assert_eq!(VifSeverity::classify(v), VifSeverity::Acceptable);
        }
    }
}

#[test]
fn test_vif_creatinine_egfr_collinear() {
    let cohort = generate(500, 18);
    let series = vec![
        observed(&cohort, Field::Creatinine),
        observed(&cohort, Field::Egfr),
    ];

    let vif = calculate_vif(&series, VifMethod::AuxiliaryRegression);
    assert!(vif.iter().all(|&v| v > 1.5 && v <= VIF_CEILING));

    let pairs = correlated_pairs(&correlation_matrix(&series), 0.5);
    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].correlation < 0.0);
}

#[test]
fn test_vif_exact_combination_of_three_series() {
    let a: Vec<f64> = (0..30).map(|i| (i as f64 * 0.7).sin()).collect();
    let b: Vec<f64> = (0..30).map(|i| 100.0 * (i as f64 * 0.3).cos() + i as f64).collect();
    let c: Vec<f64> = (0..30).map(|i| 10.0 * ((i * i) % 7) as f64).collect();
    let d: Vec<f64> = (0..30).map(|i| 1.0 + 2.0 * a[i] + 3.0 * b[i] + 4.0 * c[i]).collect();

    let vif = auxiliary_vif(&[a, b, c, d]);

    assert_eq!(vif, vec![VIF_CEILING; 4]);
}

#[test]
fn test_vif_constant_series_is_not_inflated() {
    let a: Vec<f64> = (0..30).map(|i| (i as f64 * 0.7).sin()).collect();
    let b: Vec<f64> = (0..30).map(|i| (i as f64 * 0.2).cos()).collect();
    let constant = vec![5.0; 30];

    let vif = calculate_vif(&[a, b, constant], VifMethod::AuxiliaryRegression);

    assert_eq!(vif[2], 1.0);
    assert!(vif.iter().all(|&v| VifSeverity::classify(v) == VifSeverity::Acceptable));
}

#[test]
fn test_multicollinearity_report_follows_options() {
    let cohort = generate(500, 18);
    let series = vec![
        observed(&cohort, Field::Age),
        observed(&cohort, Field::Creatinine),
        observed(&cohort, Field::Egfr),
    ];

    let approximate =
        MulticollinearityReport::compute(&series, &DiagnosticsOptions::default()).unwrap();
    let auxiliary_options = DiagnosticsOptions::builder()
        .vif_method(VifMethod::AuxiliaryRegression)
        .correlation_threshold(0.5)
        .build();
    let auxiliary = MulticollinearityReport::compute(&series, &auxiliary_options).unwrap();

    assert_eq!(approximate.method, VifMethod::AveragedCorrelation);
    assert_eq!(approximate.vif, calculate_vif(&series, VifMethod::AveragedCorrelation));
    assert_eq!(auxiliary.vif, calculate_vif(&series, VifMethod::AuxiliaryRegression));
    assert!(auxiliary.correlated_pairs.iter().any(|p| (p.first, p.second) == (1, 2)));
}
