//! Leverage (hat values) for single-predictor regression.

use crate::utils::mean;

/// Hat values of a single-predictor OLS fit with intercept:
/// h_i = 1/n + (x_i − x̄)² / Σ(x − x̄)².
///
/// # Properties
/// - h_i ∈ [1/n, 1]
/// - Σ h_i = 2 when x varies
///
/// When x has no variance every point gets 1/n. Empty input gives an
/// empty vector.
pub fn leverage(xs: &[f64]) -> Vec<f64> {
    let n = xs.len();
    if n == 0 {
        return Vec::new();
    }

    let mean_x = mean(xs);
    let ss_x: f64 = xs.iter().map(|&x| (x - mean_x).powi(2)).sum();
    let base = 1.0 / n as f64;

    if ss_x == 0.0 {
        return vec![base; n];
    }

    xs.iter()
        .map(|&x| base + (x - mean_x).powi(2) / ss_x)
        .collect()
}

/// Identify high leverage points.
///
/// Returns indices of observations with leverage > threshold.
/// Default threshold is 2p/n where p is the number of parameters.
pub fn high_leverage_points(
    leverage: &[f64],
    n_params: usize,
    threshold: Option<f64>,
) -> Vec<usize> {
    let n = leverage.len();
    if n == 0 {
        return Vec::new();
    }
    let cutoff = threshold.unwrap_or(2.0 * n_params as f64 / n as f64);

    leverage
        .iter()
        .enumerate()
        .filter(|(_, &h)| h > cutoff)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leverage_sum_and_bounds() {
        let xs: Vec<f64> = (0..30).map(|i| (i as f64).powf(1.3)).collect();
        let h = leverage(&xs);

        assert_relative_eq!(h.iter().sum::<f64>(), 2.0, epsilon = 1e-10);
        for &hi in &h {
            assert!(hi >= 1.0 / 30.0 - 1e-15 && hi <= 1.0);
        }
    }

    #[test]
    fn test_extreme_point_has_highest_leverage() {
        let mut xs: Vec<f64> = (0..20).map(|i| i as f64).collect();
        xs[19] = 100.0;
        let h = leverage(&xs);

        let max_idx = (0..20)
            .max_by(|&a, &b| h[a].total_cmp(&h[b]))
            .unwrap();
        assert_eq!(max_idx, 19);
        assert_eq!(high_leverage_points(&h, 2, None), vec![19]);
    }

    #[test]
    fn test_constant_and_empty() {
        assert!(leverage(&[]).is_empty());
        assert_eq!(leverage(&[2.0, 2.0, 2.0, 2.0]), vec![0.25; 4]);
        assert!(high_leverage_points(&[], 2, None).is_empty());
    }
}
