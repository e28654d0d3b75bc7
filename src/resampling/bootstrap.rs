//! Bootstrap resampling and percentile intervals.

use crate::core::{BootstrapOptions, OptionsError};
use crate::utils::{mean, std};
use log::debug;
use rand::Rng;

/// Draw `xs.len()` elements with replacement using the thread-local
/// generator.
pub fn bootstrap_sample<T: Clone>(xs: &[T]) -> Vec<T> {
    bootstrap_sample_with(xs, &mut rand::thread_rng())
}

/// Draw `xs.len()` elements with replacement, indices uniform over the
/// input range.
pub fn bootstrap_sample_with<T: Clone, R: Rng + ?Sized>(xs: &[T], rng: &mut R) -> Vec<T> {
    let n = xs.len();
    (0..n).map(|_| xs[rng.gen_range(0..n)].clone()).collect()
}

/// Evaluate `statistic` on `n_resamples` bootstrap resamples of `xs`.
///
/// Empty input yields no estimates.
pub fn bootstrap_distribution<F, R>(
    xs: &[f64],
    statistic: F,
    n_resamples: usize,
    rng: &mut R,
) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
    R: Rng + ?Sized,
{
    if xs.is_empty() {
        return Vec::new();
    }

    (0..n_resamples)
        .map(|_| statistic(&bootstrap_sample_with(xs, rng)))
        .collect()
}

/// Bootstrap `statistic` over `xs` with the thread-local generator.
///
/// See [`bootstrap_with`].
pub fn bootstrap<F>(
    xs: &[f64],
    statistic: F,
    options: &BootstrapOptions,
) -> Result<BootstrapSummary, OptionsError>
where
    F: Fn(&[f64]) -> f64,
{
    bootstrap_with(xs, statistic, options, &mut rand::thread_rng())
}

/// Validate `options`, draw `options.n_resamples` resamples from `rng` and
/// summarize them at `options.confidence_level`.
pub fn bootstrap_with<F, R>(
    xs: &[f64],
    statistic: F,
    options: &BootstrapOptions,
    rng: &mut R,
) -> Result<BootstrapSummary, OptionsError>
where
    F: Fn(&[f64]) -> f64,
    R: Rng + ?Sized,
{
    options.validate()?;

    let estimates = bootstrap_distribution(xs, statistic, options.n_resamples, rng);
    debug!("bootstrap: {} resamples of {} values", estimates.len(), xs.len());
    Ok(BootstrapSummary::from_estimates(&estimates, options.confidence_level))
}

/// Summary of a bootstrap distribution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BootstrapSummary {
    /// Estimates in ascending order.
    pub sorted_estimates: Vec<f64>,
    pub mean: f64,
    /// Sample standard deviation of the estimates.
    pub std_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub confidence_level: f64,
}

impl BootstrapSummary {
    /// Summarize estimates with a percentile interval.
    ///
    /// For m estimates and α = 1 − confidence_level the bounds are the
    /// sorted estimates at indices ⌊m·α/2⌋ and ⌊m·(1 − α/2)⌋, clamped to
    /// the last index. Everything is 0 when there are no estimates.
    pub fn from_estimates(estimates: &[f64], confidence_level: f64) -> Self {
        if estimates.is_empty() {
            return Self {
                confidence_level,
                ..Self::default()
            };
        }

        let mut sorted = estimates.to_vec();
        sorted.sort_by(f64::total_cmp);

        let m = sorted.len();
        let alpha = 1.0 - confidence_level;
        let lower_idx = ((m as f64 * alpha / 2.0).floor() as usize).min(m - 1);
        let upper_idx = ((m as f64 * (1.0 - alpha / 2.0)).floor() as usize).min(m - 1);

        Self {
            mean: mean(&sorted),
            std_error: std(&sorted, true),
            ci_lower: sorted[lower_idx],
            ci_upper: sorted[upper_idx],
            sorted_estimates: sorted,
            confidence_level,
        }
    }

    /// Number of bootstrap estimates summarized.
    pub fn n_resamples(&self) -> usize {
        self.sorted_estimates.len()
    }
}
