//! Core types: options, fit results and imputation.

mod imputation;
mod options;
mod result;

pub use imputation::{
    count_missing, forward_fill, impute, impute_mean, impute_median, observed_values,
    ImputeMethod, UnknownImputeMethod, FORWARD_FILL_FALLBACK,
};
pub use options::{
    BootstrapOptions, DiagnosticsOptions, DiagnosticsOptionsBuilder, OptionsError, VifMethod,
};
pub use result::LinearFit;
