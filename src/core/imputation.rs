//! Simple single-value imputation for series with missing entries.
//!
//! Missing entries are `None`. Three policies are available:
//! - `Mean`: replace with the mean of the observed entries
//! - `Median`: replace with the median of the observed entries
//! - `ForwardFill`: carry the last observed value forward
//!
//! # Example
//!
//! ```
//! use quantlab::core::{impute, ImputeMethod};
//!
//! let values = [Some(1.0), None, Some(3.0)];
//! assert_eq!(impute(&values, ImputeMethod::Mean), vec![1.0, 2.0, 3.0]);
//! assert_eq!(impute(&values, ImputeMethod::ForwardFill), vec![1.0, 1.0, 3.0]);
//! ```

use crate::utils::{mean, median};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Value used by forward fill when nothing at all was observed.
pub const FORWARD_FILL_FALLBACK: f64 = 25.0;

/// Imputation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImputeMethod {
    /// Replace missing entries with the mean of the observed entries.
    #[default]
    Mean,

    /// Replace missing entries with the median of the observed entries.
    Median,

    /// Replace each missing entry with the most recent observed value.
    /// Leading gaps take the first observed value.
    ForwardFill,
}

impl ImputeMethod {
    pub fn name(self) -> &'static str {
        match self {
            ImputeMethod::Mean => "mean",
            ImputeMethod::Median => "median",
            ImputeMethod::ForwardFill => "forward-fill",
        }
    }
}

impl fmt::Display for ImputeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when an imputation method name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown imputation method: {0}")]
pub struct UnknownImputeMethod(pub String);

impl FromStr for ImputeMethod {
    type Err = UnknownImputeMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Ok(ImputeMethod::Mean),
            "median" => Ok(ImputeMethod::Median),
            "forward-fill" | "forward_fill" | "ffill" => Ok(ImputeMethod::ForwardFill),
            _ => Err(UnknownImputeMethod(s.to_string())),
        }
    }
}

/// Observed (non-missing) entries in order.
pub fn observed_values(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}

/// Count missing entries.
pub fn count_missing(values: &[Option<f64>]) -> usize {
    values.iter().filter(|v| v.is_none()).count()
}

fn fill_with(values: &[Option<f64>], fill: f64) -> Vec<f64> {
    values.iter().map(|v| v.unwrap_or(fill)).collect()
}

/// Replace missing entries with the mean of the observed entries.
///
/// An all-missing input becomes all zeros.
pub fn impute_mean(values: &[Option<f64>]) -> Vec<f64> {
    fill_with(values, mean(&observed_values(values)))
}

/// Replace missing entries with the median of the observed entries.
///
/// An all-missing input becomes all zeros.
pub fn impute_median(values: &[Option<f64>]) -> Vec<f64> {
    fill_with(values, median(&observed_values(values)))
}

/// Carry the last observed value forward.
///
/// Leading gaps take the first observed value; an all-missing input is
/// filled with [`FORWARD_FILL_FALLBACK`].
pub fn forward_fill(values: &[Option<f64>]) -> Vec<f64> {
    let mut last = values
        .iter()
        .flatten()
        .copied()
        .next()
        .unwrap_or(FORWARD_FILL_FALLBACK);

    values
        .iter()
        .map(|v| {
            if let Some(x) = v {
                last = *x;
            }
            last
        })
        .collect()
}

/// Impute with the given policy.
pub fn impute(values: &[Option<f64>], method: ImputeMethod) -> Vec<f64> {
    match method {
        ImputeMethod::Mean => impute_mean(values),
        ImputeMethod::Median => impute_median(values),
        ImputeMethod::ForwardFill => forward_fill(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_gaps() -> Vec<Option<f64>> {
        vec![None, Some(2.0), Some(10.0), None, Some(3.0), None]
    }

    #[test]
    fn test_impute_mean() {
        let out = impute_mean(&with_gaps());
        assert_eq!(out.len(), 6);
        assert_relative_eq!(out[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(out[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out[5], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_impute_median() {
        let out = impute_median(&with_gaps());
        assert_eq!(out, vec![3.0, 2.0, 10.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_forward_fill() {
        let out = forward_fill(&with_gaps());
        assert_eq!(out, vec![2.0, 2.0, 10.0, 10.0, 3.0, 3.0]);
    }

    #[test]
    fn test_all_missing() {
        let values = vec![None, None];
        assert_eq!(impute_mean(&values), vec![0.0, 0.0]);
        assert_eq!(impute_median(&values), vec![0.0, 0.0]);
        assert_eq!(
            forward_fill(&values),
            vec![FORWARD_FILL_FALLBACK, FORWARD_FILL_FALLBACK]
        );
    }

    #[test]
    fn test_no_missing_is_identity() {
        let values = vec![Some(1.5), Some(2.5)];
        for method in [ImputeMethod::Mean, ImputeMethod::Median, ImputeMethod::ForwardFill] {
            assert_eq!(impute(&values, method), vec![1.5, 2.5]);
        }
    }

    #[test]
    fn test_helpers() {
        assert_eq!(count_missing(&with_gaps()), 3);
        assert_eq!(observed_values(&with_gaps()), vec![2.0, 10.0, 3.0]);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("Median".parse::<ImputeMethod>(), Ok(ImputeMethod::Median));
        assert_eq!("ffill".parse::<ImputeMethod>(), Ok(ImputeMethod::ForwardFill));
        assert!("knn".parse::<ImputeMethod>().is_err());
        assert_eq!(ImputeMethod::ForwardFill.to_string(), "forward-fill");
        assert_eq!(ImputeMethod::default(), ImputeMethod::Mean);
    }
}
