//! Regression solvers: single-predictor OLS for the lessons and a
//! multi-predictor OLS used for auxiliary regressions.

mod ols;
mod simple;
mod traits;

pub use ols::{FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use simple::linear_regression;
pub use traits::{FittedRegressor, RegressionError, Regressor};
