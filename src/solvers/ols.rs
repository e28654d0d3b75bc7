//! Multi-predictor ordinary least squares, used for auxiliary regressions.

use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{center_columns, center_vector, detect_constant_columns};
use faer::{Col, Mat};

/// Ordinary Least Squares regression estimator.
///
/// Uses QR decomposition with column pivoting so rank-deficient designs
/// still fit. Aliased (collinear or constant) coefficients are NaN and do
/// not contribute to predictions.
///
/// # Example
///
/// ```rust,ignore
/// use quantlab::solvers::{FittedRegressor, OlsRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(20, 2, |i, j| if j == 0 { i as f64 } else { (i as f64).sin() });
/// let y = Col::from_fn(20, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = OlsRegressor::builder().with_intercept(true).build().fit(&x, &y)?;
/// println!("R² = {}", fitted.r_squared());
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    with_intercept: bool,
    rank_tolerance: f64,
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self {
            with_intercept: true,
            rank_tolerance: 1e-10,
        }
    }
}

impl OlsRegressor {
    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    /// Solve the least squares problem using column-pivoted QR.
    ///
    /// Returns coefficients in original column order, the aliased mask and
    /// the numerical rank.
    fn solve_with_qr(
        &self,
        x: &Mat<f64>,
        y: &Col<f64>,
        constant_cols: &[bool],
    ) -> (Col<f64>, Vec<bool>, usize) {
        let n_features = x.ncols();
        let n_samples = x.nrows();

        let mut aliased = constant_cols.to_vec();

        let qr = x.col_piv_qr();
        let q = qr.compute_Q();
        let r = qr.R();
        let perm = qr.P();

        // position_of[j] = where original column j ended up after pivoting
        let perm_arr = perm.arrays().1;
        let mut position_of: Vec<usize> = vec![0; n_features];
        position_of[..n_features].copy_from_slice(&perm_arr[..n_features]);

        let mut rank = 0;
        for i in 0..n_features.min(n_samples) {
            if r[(i, i)].abs() > self.rank_tolerance {
                rank += 1;
            } else {
                break;
            }
        }

        if rank == 0 {
            return (
                Col::from_fn(n_features, |_| f64::NAN),
                vec![true; n_features],
                0,
            );
        }

        for j in 0..n_features {
            if constant_cols[j] || position_of[j] >= rank {
                aliased[j] = true;
            }
        }

        // R * beta = Q' * y on the leading rank x rank block
        let qty = q.transpose() * y;

        let mut beta_reduced = Col::zeros(rank);
        for i in (0..rank).rev() {
            let mut sum = qty[i];
            for j in (i + 1)..rank {
                sum -= r[(i, j)] * beta_reduced[j];
            }
            beta_reduced[i] = sum / r[(i, i)];
        }

        let coefficients = Col::from_fn(n_features, |j| {
            if aliased[j] {
                f64::NAN
            } else {
                beta_reduced[position_of[j]]
            }
        });

        (coefficients, aliased, rank)
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: n_samples,
                y_len: y.nrows(),
            });
        }

        let n_params = if self.with_intercept {
            n_features + 1
        } else {
            n_features
        };
        let needed = n_params.max(2);
        if n_samples < needed {
            return Err(RegressionError::InsufficientObservations {
                needed,
                got: n_samples,
            });
        }

        let constant_cols = detect_constant_columns(x, self.rank_tolerance);

        let (coefficients, aliased, rank, intercept) = if self.with_intercept {
            let (x_centered, x_means) = center_columns(x);
            let (y_centered, y_mean) = center_vector(y);

            let (coefficients, aliased, rank) =
                self.solve_with_qr(&x_centered, &y_centered, &constant_cols);

            let mut intercept = y_mean;
            for j in 0..n_features {
                if !aliased[j] {
                    intercept -= x_means[j] * coefficients[j];
                }
            }

            (coefficients, aliased, rank, Some(intercept))
        } else {
            if constant_cols.iter().all(|&c| c) {
                return Err(RegressionError::AllFeaturesConstant);
            }
            let (coefficients, aliased, rank) = self.solve_with_qr(x, y, &constant_cols);
            (coefficients, aliased, rank, None)
        };

        let mut fitted = FittedOls {
            coefficients,
            intercept,
            aliased,
            rank,
            fitted_values: Col::zeros(n_samples),
            residuals: Col::zeros(n_samples),
            r_squared: 0.0,
        };

        fitted.fitted_values = fitted.predict(x);
        fitted.residuals = Col::from_fn(n_samples, |i| y[i] - fitted.fitted_values[i]);
        fitted.r_squared = r_squared(y, &fitted.residuals, self.with_intercept);

        Ok(fitted)
    }
}

/// R² from the response and residuals.
///
/// Without an intercept the total sum of squares is taken about zero.
fn r_squared(y: &Col<f64>, residuals: &Col<f64>, centered: bool) -> f64 {
    let n = y.nrows();
    let y_mean = if centered {
        y.iter().sum::<f64>() / n as f64
    } else {
        0.0
    };

    let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
    let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();

    if tss > 0.0 {
        (1.0 - rss / tss).clamp(0.0, 1.0)
    } else if rss < 1e-10 {
        1.0
    } else {
        0.0
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    regressor: OlsRegressor,
}

impl OlsRegressorBuilder {
    /// Set whether to include an intercept term (default: true).
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.regressor.with_intercept = include;
        self
    }

    /// Set the tolerance below which R diagonal entries count as zero.
    pub fn rank_tolerance(mut self, tolerance: f64) -> Self {
        self.regressor.rank_tolerance = tolerance;
        self
    }

    pub fn build(self) -> OlsRegressor {
        self.regressor
    }
}

/// A fitted OLS model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    coefficients: Col<f64>,
    intercept: Option<f64>,
    aliased: Vec<bool>,
    rank: usize,
    fitted_values: Col<f64>,
    residuals: Col<f64>,
    r_squared: f64,
}

impl FittedOls {
    /// Which coefficients were dropped as collinear or constant.
    pub fn aliased(&self) -> &[bool] {
        &self.aliased
    }

    /// Numerical rank of the (centered) design matrix.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn fitted_values(&self) -> &Col<f64> {
        &self.fitted_values
    }

    pub fn residuals(&self) -> &Col<f64> {
        &self.residuals
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        let base = self.intercept.unwrap_or(0.0);
        Col::from_fn(x.nrows(), |i| {
            let mut pred = base;
            for j in 0..self.coefficients.nrows() {
                if !self.aliased[j] {
                    pred += x[(i, j)] * self.coefficients[j];
                }
            }
            pred
        })
    }

    fn coefficients(&self) -> &Col<f64> {
        &self.coefficients
    }

    fn intercept(&self) -> Option<f64> {
        self.intercept
    }

    fn r_squared(&self) -> f64 {
        self.r_squared
    }
}
