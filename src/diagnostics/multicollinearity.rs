//! Multicollinearity summary for a set of predictor series.

use super::vif::{calculate_vif, correlated_pairs, CorrelatedPair, VifSeverity};
use crate::core::{DiagnosticsOptions, OptionsError, VifMethod};
use crate::utils::correlation_matrix;
use faer::Mat;

/// VIF, severity grading and strongly correlated pairs for several series.
#[derive(Debug, Clone)]
pub struct MulticollinearityReport {
    /// Method the VIF values were computed with.
    pub method: VifMethod,
    /// One VIF per series.
    pub vif: Vec<f64>,
    pub severity: Vec<VifSeverity>,
    /// Pairwise correlation matrix of the series.
    pub correlation: Mat<f64>,
    /// Pairs with |r| above the configured threshold.
    pub correlated_pairs: Vec<CorrelatedPair>,
}

impl MulticollinearityReport {
    /// Validate `options`, then compute VIF with `options.vif_method` and
    /// collect pairs above `options.correlation_threshold`.
    pub fn compute<S: AsRef<[f64]>>(
        series: &[S],
        options: &DiagnosticsOptions,
    ) -> Result<Self, OptionsError> {
        options.validate()?;

        let vif = calculate_vif(series, options.vif_method);
        let severity = vif.iter().map(|&v| VifSeverity::classify(v)).collect();
        let correlation = correlation_matrix(series);
        let pairs = correlated_pairs(&correlation, options.correlation_threshold);

        Ok(Self {
            method: options.vif_method,
            vif,
            severity,
            correlation,
            correlated_pairs: pairs,
        })
    }

    /// Indices of series graded [`VifSeverity::Severe`].
    pub fn severe(&self) -> Vec<usize> {
        self.severity
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == VifSeverity::Severe)
            .map(|(i, _)| i)
            .collect()
    }
}
