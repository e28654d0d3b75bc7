//! Regression diagnostics (leverage, Cook's distance, VIF, QQ plots).
//!
//! - **Leverage**: hat values for a single-predictor fit
//! - **Residuals**: standardized residuals, QQ coordinates, scale-location
//! - **Influence**: Cook's distance and influential point detection
//! - **VIF**: approximate and auxiliary-regression variance inflation
//! - **Report**: all of the above for one `y ~ x` fit
//! - **Multicollinearity**: VIF and correlated pairs for several series
//!
//! # Example
//!
//! ```rust,ignore
//! use quantlab::diagnostics::{cooks_distance, leverage, influential_cooks};
//! use quantlab::solvers::linear_regression;
//!
//! let fit = linear_regression(&x, &y);
//! let h = leverage(&x);
//! let cooks = cooks_distance(&fit.residuals, &h, fit.mse(), 2);
//! let influential = influential_cooks(&cooks, None);
//! ```

mod influence;
mod leverage;
mod multicollinearity;
mod report;
mod residuals;
mod vif;

pub use influence::{cooks_distance, influential_cooks};
pub use leverage::{high_leverage_points, leverage};
pub use multicollinearity::MulticollinearityReport;
pub use report::DiagnosticReport;
pub use residuals::{
    qq_plot_data, residual_outliers, scale_location, standardized_residuals, QqPoint,
};
pub use vif::{
    approximate_vif, auxiliary_vif, calculate_vif, correlated_pairs, high_vif_predictors,
    variance_inflation_factor, CorrelatedPair, VifSeverity, VIF_CEILING,
};
