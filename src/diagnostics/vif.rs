//! Variance Inflation Factor (VIF) for multicollinearity detection.

use crate::core::VifMethod;
use crate::solvers::{FittedRegressor, OlsRegressor, Regressor};
use crate::utils::{
    column, correlation, detect_constant_columns, series_to_matrix, without_column,
};
use faer::Mat;
use log::{debug, warn};

/// Largest VIF reported. Near-perfect collinearity is capped here instead
/// of diverging.
pub const VIF_CEILING: f64 = 100.0;

/// R² at or above which the VIF is reported as [`VIF_CEILING`].
const R_SQUARED_CAP: f64 = 0.99;

const CONSTANT_TOLERANCE: f64 = 1e-10;

fn vif_from_r_squared(r_squared: f64) -> f64 {
    if r_squared >= R_SQUARED_CAP {
        VIF_CEILING
    } else {
        1.0 / (1.0 - r_squared)
    }
}

/// Approximate VIF from averaged pairwise correlation.
///
/// For series i, r̄ is the mean absolute correlation with every other
/// series and VIF_i = 1 / (1 − r̄²), or [`VIF_CEILING`] when r̄² ≥ 0.99.
/// This is not the textbook VIF; it only tracks it loosely. A lone series
/// gets VIF 1.
pub fn approximate_vif<S: AsRef<[f64]>>(series: &[S]) -> Vec<f64> {
    let p = series.len();

    (0..p)
        .map(|i| {
            let others = p - 1;
            let avg_corr = if others > 0 {
                (0..p)
                    .filter(|&j| j != i)
                    .map(|j| correlation(series[i].as_ref(), series[j].as_ref()).abs())
                    .sum::<f64>()
                    / others as f64
            } else {
                0.0
            };
            vif_from_r_squared(avg_corr * avg_corr)
        })
        .collect()
}

/// VIF from auxiliary regressions.
///
/// VIF_j = 1 / (1 − R²_j), where R²_j comes from regressing series j on all
/// other series with an intercept. Results are at least 1 and capped at
/// [`VIF_CEILING`]. Series are truncated to the shortest length. A constant
/// series has no variance to inflate and reports 1, as does a failed
/// auxiliary fit (too few rows, say).
pub fn auxiliary_vif<S: AsRef<[f64]>>(series: &[S]) -> Vec<f64> {
    let x = series_to_matrix(series);
    variance_inflation_factor(&x)
}

/// Auxiliary-regression VIF for the columns of a design matrix.
pub fn variance_inflation_factor(x: &Mat<f64>) -> Vec<f64> {
    let p = x.ncols();

    if p < 2 {
        return vec![1.0; p];
    }

    let model = OlsRegressor::builder().with_intercept(true).build();
    let constant = detect_constant_columns(x, CONSTANT_TOLERANCE);

    (0..p)
        .map(|j| {
            if constant[j] {
                warn!("column {j} is constant; reporting VIF 1");
                return 1.0;
            }

            let others = without_column(x, j);
            let target = column(x, j);

            match model.fit(&others, &target) {
                Ok(fitted) => vif_from_r_squared(fitted.r_squared()).max(1.0),
                Err(err) => {
                    warn!("auxiliary regression for column {j} failed: {err}");
                    1.0
                }
            }
        })
        .collect()
}

/// Compute VIF for each series with the requested method.
pub fn calculate_vif<S: AsRef<[f64]>>(series: &[S], method: VifMethod) -> Vec<f64> {
    match method {
        VifMethod::AveragedCorrelation => {
            debug!("computing approximate VIF for {} series", series.len());
            approximate_vif(series)
        }
        VifMethod::AuxiliaryRegression => auxiliary_vif(series),
    }
}

/// Rough multicollinearity grading of a VIF value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VifSeverity {
    /// VIF < 5.
    Acceptable,
    /// 5 <= VIF < 10.
    Moderate,
    /// VIF >= 10.
    Severe,
}

impl VifSeverity {
    pub fn classify(vif: f64) -> Self {
        if vif < 5.0 {
            VifSeverity::Acceptable
        } else if vif < 10.0 {
            VifSeverity::Moderate
        } else {
            VifSeverity::Severe
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VifSeverity::Acceptable => "OK",
            VifSeverity::Moderate => "Moderate",
            VifSeverity::Severe => "Severe",
        }
    }
}

/// Identify predictors with high multicollinearity.
///
/// Returns indices of predictors with VIF > threshold.
pub fn high_vif_predictors(vif: &[f64], threshold: f64) -> Vec<usize> {
    vif.iter()
        .enumerate()
        .filter(|(_, &v)| v > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// A strongly correlated pair of series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelatedPair {
    pub first: usize,
    pub second: usize,
    pub correlation: f64,
}

/// Pairs (i < j) of a correlation matrix with |r| > threshold.
pub fn correlated_pairs(matrix: &Mat<f64>, threshold: f64) -> Vec<CorrelatedPair> {
    let p = matrix.nrows().min(matrix.ncols());
    let mut pairs = Vec::new();

    for i in 0..p {
        for j in (i + 1)..p {
            let r = matrix[(i, j)];
            if r.abs() > threshold {
                pairs.push(CorrelatedPair {
                    first: i,
                    second: j,
                    correlation: r,
                });
            }
        }
    }

    pairs
}
