//! Missing-value injection under MCAR, MAR and MNAR mechanisms, and
//! per-field missingness profiles.

use super::record::{DataError, Field, SyntheticRecord};
use log::debug;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Age assumed by MAR when the record's own age is missing.
const MAR_DEFAULT_AGE: f64 = 65.0;

/// BMI above which MNAR doubles the missingness probability.
const MNAR_BMI_CUTOFF: f64 = 30.0;

/// How the probability of a value going missing is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mechanism {
    /// Missing completely at random: probability `rate` for every record.
    Mcar,
    /// Missing at random: probability `rate · age / 100`, depending on the
    /// observed age.
    Mar,
    /// Missing not at random: probability doubles for BMI above 30.
    /// Only defined for [`Field::Bmi`]; a no-op for every other field.
    Mnar,
}

impl Mechanism {
    pub fn name(self) -> &'static str {
        match self {
            Mechanism::Mcar => "MCAR",
            Mechanism::Mar => "MAR",
            Mechanism::Mnar => "MNAR",
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mechanism {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MCAR" => Ok(Mechanism::Mcar),
            "MAR" => Ok(Mechanism::Mar),
            "MNAR" => Ok(Mechanism::Mnar),
            _ => Err(DataError::UnknownMechanism(s.to_string())),
        }
    }
}

/// Probability that `field` goes missing in `record`, or `None` when the
/// mechanism does not apply.
fn missing_probability(
    record: &SyntheticRecord,
    mechanism: Mechanism,
    field: Field,
    rate: f64,
) -> Option<f64> {
    match mechanism {
        Mechanism::Mcar => Some(rate),
        Mechanism::Mar => {
            let age = record.age.map_or(MAR_DEFAULT_AGE, f64::from);
            Some(rate * age / 100.0)
        }
        Mechanism::Mnar => match (field, record.bmi) {
            (Field::Bmi, Some(bmi)) => {
                let factor = if bmi > MNAR_BMI_CUTOFF { 2.0 } else { 1.0 };
                Some(rate * factor)
            }
            _ => None,
        },
    }
}

/// Copy `cohort` with `field` nulled according to `mechanism`, drawing from
/// the thread-local generator.
///
/// See [`inject_missingness_with`].
pub fn inject_missingness(
    cohort: &[SyntheticRecord],
    mechanism: Mechanism,
    field: Field,
    rate: f64,
) -> Vec<SyntheticRecord> {
    inject_missingness_with(cohort, mechanism, field, rate, &mut rand::thread_rng())
}

/// Copy `cohort` with `field` nulled according to `mechanism`.
///
/// The input is never modified. Each record draws one uniform and loses
/// the field when the draw falls below the mechanism's probability.
pub fn inject_missingness_with<R: Rng + ?Sized>(
    cohort: &[SyntheticRecord],
    mechanism: Mechanism,
    field: Field,
    rate: f64,
    rng: &mut R,
) -> Vec<SyntheticRecord> {
    if mechanism == Mechanism::Mnar && field != Field::Bmi {
        debug!("MNAR is only defined for bmi; {field} left untouched");
    }

    let mut result = cohort.to_vec();
    let mut n_cleared = 0usize;

    for record in &mut result {
        if let Some(p) = missing_probability(record, mechanism, field, rate) {
            if rng.gen::<f64>() < p {
                record.clear(field);
                n_cleared += 1;
            }
        }
    }

    debug!(
        "{mechanism} at rate {rate} cleared {field} in {n_cleared} of {} records",
        result.len()
    );
    result
}

/// Missing count for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMissingness {
    pub field: Field,
    pub missing: usize,
    /// Percentage of records (0–100) missing this field.
    pub percentage: f64,
}

/// Missingness across a set of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingnessProfile {
    pub fields: Vec<FieldMissingness>,
    /// Records missing at least one of the profiled fields.
    pub rows_with_missing: usize,
    pub n_records: usize,
}

/// Count missing values per field and rows with any missing value.
pub fn missingness_profile(cohort: &[SyntheticRecord], fields: &[Field]) -> MissingnessProfile {
    let n = cohort.len();

    let per_field = fields
        .iter()
        .map(|&field| {
            let missing = cohort.iter().filter(|r| r.is_missing(field)).count();
            let percentage = if n == 0 {
                0.0
            } else {
                missing as f64 / n as f64 * 100.0
            };
            FieldMissingness {
                field,
                missing,
                percentage,
            }
        })
        .collect();

    let rows_with_missing = cohort
        .iter()
        .filter(|r| fields.iter().any(|&f| r.is_missing(f)))
        .count();

    MissingnessProfile {
        fields: per_field,
        rows_with_missing,
        n_records: n,
    }
}
