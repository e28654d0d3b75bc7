//! Resampling: k-fold partitions, bootstrap and cross-validation.
//!
//! Functions without a `_with` suffix draw from the thread-local generator
//! and are not reproducible across calls. The `_with` variants take an
//! explicit `rand::Rng` so callers can seed them.

mod bootstrap;
mod cross_validation;
mod kfold;

pub use bootstrap::{
    bootstrap, bootstrap_distribution, bootstrap_sample, bootstrap_sample_with, bootstrap_with,
    BootstrapSummary,
};
pub use cross_validation::{cross_validate, CrossValidationResult};
pub use kfold::{k_fold_split, k_fold_split_with};
