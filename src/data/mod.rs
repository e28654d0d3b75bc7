//! Synthetic clinical cohorts: generation, missingness injection, CSV
//! export and the shared reference datasets.
//!
//! # Example
//!
//! ```
//! use quantlab::data::{generate, inject_missingness, Field, Mechanism};
//!
//! let cohort = generate(300, 42);
//! let masked = inject_missingness(&cohort, Mechanism::Mcar, Field::Bmi, 0.0);
//! assert!(masked.iter().all(|r| r.bmi.is_some()));
//! ```

mod datasets;
mod export;
mod generator;
mod missingness;
mod record;

pub use datasets::{reference_datasets, DatasetKind, ReferenceDatasets};
pub use export::{to_csv, write_csv, ExportError};
pub use generator::{egfr_from, generate, generate_with_rng, random_normal};
pub use missingness::{
    inject_missingness, inject_missingness_with, missingness_profile, FieldMissingness,
    Mechanism, MissingnessProfile,
};
pub use record::{
    column, observed, Cohort, DataError, Field, Gender, Smoking, SyntheticRecord,
};
