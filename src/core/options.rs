//! Diagnostics and resampling options.

use thiserror::Error;

/// How variance inflation factors are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VifMethod {
    /// Mean absolute pairwise correlation stands in for the auxiliary R².
    ///
    /// Illustrative only: this is what the multicollinearity lesson plots.
    #[default]
    AveragedCorrelation,

    /// Regress each series on all the others and use the resulting R².
    AuxiliaryRegression,
}

/// Configuration for regression diagnostics.
#[derive(Debug, Clone)]
pub struct DiagnosticsOptions {
    /// VIF computation mode (default: averaged correlation).
    pub vif_method: VifMethod,
    /// Number of model parameters used in Cook's distance (default: 2,
    /// slope plus intercept).
    pub n_params: usize,
    /// Cook's distance cutoff for influential points (default: 4/n).
    pub cooks_threshold: Option<f64>,
    /// Leverage cutoff for high-leverage points (default: 2p/n).
    pub leverage_threshold: Option<f64>,
    /// Absolute correlation above which a pair is reported (default: 0.7).
    pub correlation_threshold: f64,
}

impl Default for DiagnosticsOptions {
    fn default() -> Self {
        Self {
            vif_method: VifMethod::AveragedCorrelation,
            n_params: 2,
            cooks_threshold: None,
            leverage_threshold: None,
            correlation_threshold: 0.7,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("n_params must be at least 1, got {0}")]
    InvalidParameterCount(usize),
    #[error("threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),
    #[error("correlation_threshold must be in [0, 1], got {0}")]
    InvalidCorrelationThreshold(f64),
    #[error("n_resamples must be at least 1, got {0}")]
    InvalidResampleCount(usize),
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
}

fn check_threshold(threshold: Option<f64>) -> Result<(), OptionsError> {
    match threshold {
        Some(t) if !(t.is_finite() && t > 0.0) => Err(OptionsError::InvalidThreshold(t)),
        _ => Ok(()),
    }
}

impl DiagnosticsOptions {
    /// Create a new builder for diagnostics options.
    pub fn builder() -> DiagnosticsOptionsBuilder {
        DiagnosticsOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.n_params == 0 {
            return Err(OptionsError::InvalidParameterCount(self.n_params));
        }
        check_threshold(self.cooks_threshold)?;
        check_threshold(self.leverage_threshold)?;
        if !(0.0..=1.0).contains(&self.correlation_threshold) {
            return Err(OptionsError::InvalidCorrelationThreshold(
                self.correlation_threshold,
            ));
        }
        Ok(())
    }
}

/// Builder for `DiagnosticsOptions`.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsOptionsBuilder {
    options: DiagnosticsOptions,
}

impl DiagnosticsOptionsBuilder {
    pub fn vif_method(mut self, method: VifMethod) -> Self {
        self.options.vif_method = method;
        self
    }

    pub fn n_params(mut self, n_params: usize) -> Self {
        self.options.n_params = n_params;
        self
    }

    pub fn cooks_threshold(mut self, threshold: f64) -> Self {
        self.options.cooks_threshold = Some(threshold);
        self
    }

    pub fn leverage_threshold(mut self, threshold: f64) -> Self {
        self.options.leverage_threshold = Some(threshold);
        self
    }

    pub fn correlation_threshold(mut self, threshold: f64) -> Self {
        self.options.correlation_threshold = threshold;
        self
    }

    /// Build the options without validation.
    pub fn build(self) -> DiagnosticsOptions {
        self.options
    }

    /// Build and validate the options.
    pub fn build_validated(self) -> Result<DiagnosticsOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// Configuration for bootstrap resampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapOptions {
    /// Number of bootstrap resamples (default: 1000).
    pub n_resamples: usize,
    /// Percentile interval coverage (default: 0.95).
    pub confidence_level: f64,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            n_resamples: 1000,
            confidence_level: 0.95,
        }
    }
}

impl BootstrapOptions {
    pub fn new(n_resamples: usize, confidence_level: f64) -> Self {
        Self {
            n_resamples,
            confidence_level,
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.n_resamples == 0 {
            return Err(OptionsError::InvalidResampleCount(self.n_resamples));
        }
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        Ok(())
    }
}
