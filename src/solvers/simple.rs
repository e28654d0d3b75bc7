//! Ordinary least squares with a single predictor.

use crate::core::LinearFit;
use crate::utils::mean;

/// Fit `y = intercept + slope * x` by ordinary least squares.
///
/// - slope = Σ(x−x̄)(y−ȳ) / Σ(x−x̄)²
/// - intercept = ȳ − slope·x̄
/// - R² = 1 − SSres/SStot
///
/// Empty or mismatched input yields [`LinearFit::default`]. When x has no
/// variance the slope is 0 and the intercept is ȳ. R² is 0 when y has no
/// variance.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> LinearFit {
    if xs.len() != ys.len() || xs.is_empty() {
        return LinearFit::default();
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let (numerator, denominator) = xs.iter().zip(ys).fold((0.0, 0.0), |(num, den), (&x, &y)| {
        let dx = x - mean_x;
        (num + dx * (y - mean_y), den + dx * dx)
    });

    let slope = if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    };
    let intercept = mean_y - slope * mean_x;

    let fitted: Vec<f64> = xs.iter().map(|&x| slope * x + intercept).collect();
    let residuals: Vec<f64> = ys.iter().zip(&fitted).map(|(&y, &f)| y - f).collect();

    let ss_res: f64 = residuals.iter().map(|&r| r * r).sum();
    let ss_tot: f64 = ys.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    LinearFit {
        slope,
        intercept,
        fitted,
        residuals,
        r_squared,
    }
}
