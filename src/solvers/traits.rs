//! Core traits for multi-predictor regression estimators.

use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("all features are constant")]
    AllFeaturesConstant,
}

/// A regression estimator that can be fit to data.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to an (n_samples, n_features) design matrix and a
    /// response of length n_samples.
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model.
pub trait FittedRegressor {
    /// Predict the response for each row of `x`.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// Coefficients, one per feature. Aliased coefficients are NaN.
    fn coefficients(&self) -> &Col<f64>;

    /// Intercept, if the model was fit with one.
    fn intercept(&self) -> Option<f64>;

    /// In-sample R².
    fn r_squared(&self) -> f64;
}
