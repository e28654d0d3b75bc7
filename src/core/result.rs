//! Single-predictor regression result.

/// Ordinary least squares fit of `y = intercept + slope * x`.
///
/// The default value (all zeros, empty vectors) is what degenerate input
/// (empty or mismatched series) produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Fitted values, one per input pair.
    pub fitted: Vec<f64>,
    /// Residuals `y - fitted`, one per input pair.
    pub residuals: Vec<f64>,
    /// Coefficient of determination, 0 when y has no variance.
    pub r_squared: f64,
}

impl LinearFit {
    /// Number of observations the fit was computed on.
    pub fn n_observations(&self) -> usize {
        self.residuals.len()
    }

    /// Predict the response at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r * r).sum()
    }

    /// Residual mean square `RSS / (n - 2)`; 0 when n <= 2.
    pub fn mse(&self) -> f64 {
        let n = self.n_observations();
        if n <= 2 {
            return 0.0;
        }
        self.rss() / (n - 2) as f64
    }

    /// Check whether the fit came from usable input.
    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }
}
