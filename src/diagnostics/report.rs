//! Everything the diagnostic dashboard plots for one single-predictor fit.

use super::influence::{cooks_distance, influential_cooks};
use super::leverage::{high_leverage_points, leverage};
use super::residuals::{qq_plot_data, scale_location, standardized_residuals, QqPoint};
use crate::core::{DiagnosticsOptions, LinearFit};
use crate::solvers::linear_regression;

/// Regression diagnostics for `y ~ x`.
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub fit: LinearFit,
    pub leverage: Vec<f64>,
    /// Residual mean square RSS / (n − 2).
    pub mse: f64,
    pub cooks_distance: Vec<f64>,
    pub standardized_residuals: Vec<f64>,
    /// QQ coordinates of the standardized residuals.
    pub qq: Vec<QqPoint>,
    /// √|z| of the standardized residuals.
    pub scale_location: Vec<f64>,
    /// Indices whose Cook's distance exceeds the cutoff.
    pub influential: Vec<usize>,
    /// Indices whose leverage exceeds the cutoff.
    pub high_leverage: Vec<usize>,
}

impl DiagnosticReport {
    /// Fit `ys` on `xs` and derive every diagnostic from that fit.
    ///
    /// Degenerate input (empty or mismatched series) produces an empty
    /// report rather than an error.
    pub fn compute(xs: &[f64], ys: &[f64], options: &DiagnosticsOptions) -> Self {
        let fit = linear_regression(xs, ys);
        if fit.is_empty() {
            return Self::empty(fit);
        }

        let leverage = leverage(xs);
        let mse = fit.mse();
        let cooks = cooks_distance(&fit.residuals, &leverage, mse, options.n_params);
        let standardized = standardized_residuals(&fit.residuals);
        let qq = qq_plot_data(&standardized);
        let scale_location = scale_location(&standardized);
        let influential = influential_cooks(&cooks, options.cooks_threshold);
        let high_leverage =
            high_leverage_points(&leverage, options.n_params, options.leverage_threshold);

        Self {
            fit,
            leverage,
            mse,
            cooks_distance: cooks,
            standardized_residuals: standardized,
            qq,
            scale_location,
            influential,
            high_leverage,
        }
    }

    fn empty(fit: LinearFit) -> Self {
        Self {
            fit,
            leverage: Vec::new(),
            mse: 0.0,
            cooks_distance: Vec::new(),
            standardized_residuals: Vec::new(),
            qq: Vec::new(),
            scale_location: Vec::new(),
            influential: Vec::new(),
            high_leverage: Vec::new(),
        }
    }

    /// Number of influential observations.
    pub fn n_influential(&self) -> usize {
        self.influential.len()
    }
}
