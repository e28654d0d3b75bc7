//! Residual diagnostics: standardized residuals, QQ coordinates and the
//! scale-location transform.

use crate::distributions::inverse_normal_cdf;
use crate::utils::standardize;

/// Standardized residuals as z-scores of the residual vector.
///
/// All zeros when the residuals have no spread.
pub fn standardized_residuals(residuals: &[f64]) -> Vec<f64> {
    standardize(residuals)
}

/// One point of a normal QQ plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QqPoint {
    /// Standard normal quantile at plotting position (i + 0.5) / n.
    pub theoretical: f64,
    /// i-th smallest sample value.
    pub sample: f64,
}

/// Normal QQ plot coordinates for a sample.
///
/// Pairs each sorted value with the standard normal quantile at plotting
/// position (i + 0.5) / n.
pub fn qq_plot_data(residuals: &[f64]) -> Vec<QqPoint> {
    let n = residuals.len();
    let mut sorted = residuals.to_vec();
    sorted.sort_by(f64::total_cmp);

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, sample)| QqPoint {
            theoretical: inverse_normal_cdf((i as f64 + 0.5) / n as f64),
            sample,
        })
        .collect()
}

/// Scale-location values √|z| for standardized residuals.
pub fn scale_location(standardized: &[f64]) -> Vec<f64> {
    standardized.iter().map(|z| z.abs().sqrt()).collect()
}

/// Identify outliers among standardized residuals.
///
/// Returns indices with |z| > threshold (commonly 2 or 3).
pub fn residual_outliers(standardized: &[f64], threshold: f64) -> Vec<usize> {
    standardized
        .iter()
        .enumerate()
        .filter(|(_, &z)| z.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
