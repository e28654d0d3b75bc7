//! Statistics helpers and synthetic clinical cohorts for applied-statistics
//! lessons.
//!
//! The crate pairs a seeded generator of synthetic patient records (with
//! MCAR/MAR/MNAR missingness injection) with the small set of statistical
//! routines the lessons visualize: descriptive statistics, correlation,
//! single-predictor least squares, regression diagnostics, VIF, k-fold
//! partitioning, bootstrap resampling and simple imputation.
//!
//! Numeric routines never fail: degenerate input (empty series, zero
//! variance, mismatched lengths) yields zero or empty results.
//!
//! # Example
//!
//! ```rust,ignore
//! use quantlab::prelude::*;
//!
//! let cohort = generate(300, 42);
//! let age = observed(&cohort, Field::Age);
//! let los = observed(&cohort, Field::LosDays);
//!
//! let report = DiagnosticReport::compute(&age, &los, &DiagnosticsOptions::default());
//! println!("R² = {}", report.fit.r_squared);
//! println!("{} influential points", report.n_influential());
//! ```

pub mod core;
pub mod data;
pub mod diagnostics;
pub mod distributions;
pub mod resampling;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        forward_fill, impute, impute_mean, impute_median, BootstrapOptions, DiagnosticsOptions,
        ImputeMethod, LinearFit, OptionsError, VifMethod,
    };
    pub use crate::data::{
        column, generate, generate_with_rng, inject_missingness, inject_missingness_with,
        missingness_profile, observed, reference_datasets, to_csv, Cohort, DatasetKind, Field,
        Gender, Mechanism, Smoking, SyntheticRecord,
    };
    pub use crate::diagnostics::{
        calculate_vif, cooks_distance, correlated_pairs, influential_cooks, leverage,
        qq_plot_data, standardized_residuals, DiagnosticReport, MulticollinearityReport, QqPoint,
        VifSeverity,
    };
    pub use crate::distributions::inverse_normal_cdf;
    pub use crate::resampling::{
        bootstrap, bootstrap_distribution, bootstrap_sample, bootstrap_sample_with,
        bootstrap_with, cross_validate, k_fold_split, k_fold_split_with, BootstrapSummary,
        CrossValidationResult,
    };
    pub use crate::solvers::{linear_regression, FittedRegressor, OlsRegressor, Regressor};
    pub use crate::utils::{
        correlation, correlation_matrix, histogram, mean, median, standardize, std,
        DescriptiveSummary,
    };
}

pub use crate::core::{DiagnosticsOptions, LinearFit, VifMethod};
pub use crate::data::{generate, inject_missingness, Field, Mechanism, SyntheticRecord};
pub use crate::solvers::linear_regression;
