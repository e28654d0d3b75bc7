//! Influence measures: Cook's distance.

/// Compute Cook's distance for each observation.
///
/// D_i = e_i² · h_ii / (p · MSE · (1 − h_ii)²)
///
/// `1 − h_ii` is floored at 1e-14. Returns zeros when `mse` is not a
/// positive finite number or `p` is 0. Residuals and leverage are paired
/// up to the shorter of the two.
pub fn cooks_distance(residuals: &[f64], leverage: &[f64], mse: f64, n_params: usize) -> Vec<f64> {
    let n = residuals.len().min(leverage.len());

    if mse <= 0.0 || !mse.is_finite() || n_params == 0 {
        return vec![0.0; n];
    }

    let scale = n_params as f64 * mse;

    residuals
        .iter()
        .zip(leverage)
        .map(|(&e, &h)| {
            let one_minus_h = (1.0 - h).max(1e-14);
            let d = e * e * h / (scale * one_minus_h * one_minus_h);
            if d.is_finite() {
                d.max(0.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// Identify influential observations based on Cook's distance.
///
/// Returns indices of observations with D_i > threshold.
/// Default threshold is 4/n.
pub fn influential_cooks(cooks_d: &[f64], threshold: Option<f64>) -> Vec<usize> {
    let n = cooks_d.len();
    if n == 0 {
        return Vec::new();
    }
    let cutoff = threshold.unwrap_or(4.0 / n as f64);

    cooks_d
        .iter()
        .enumerate()
        .filter(|(_, &d)| d.is_finite() && d > cutoff)
        .map(|(i, _)| i)
        .collect()
}
