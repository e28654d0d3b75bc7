//! Synthetic patient records and the fields that can go missing.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing data-layer names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown missingness mechanism: {0}")]
    UnknownMechanism(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Smoking {
    Never,
    Former,
    Current,
}

/// One simulated patient.
///
/// Every clinical field is optional so missingness can be injected;
/// `id` and the `readmitted` outcome are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticRecord {
    pub id: u32,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    #[serde(serialize_with = "whole_number")]
    pub bmi: Option<f64>,
    #[serde(serialize_with = "whole_number")]
    pub systolic_bp: Option<f64>,
    #[serde(serialize_with = "whole_number")]
    pub diastolic_bp: Option<f64>,
    #[serde(serialize_with = "whole_number")]
    pub heart_rate: Option<f64>,
    #[serde(serialize_with = "whole_number")]
    pub creatinine: Option<f64>,
    #[serde(serialize_with = "whole_number")]
    pub egfr: Option<f64>,
    #[serde(serialize_with = "whole_number")]
    pub hemoglobin: Option<f64>,
    pub diabetes: Option<u8>,
    pub hypertension: Option<u8>,
    pub smoking: Option<Smoking>,
    pub readmitted: u8,
    pub los_days: Option<u32>,
}

/// Writes whole-valued measurements without a fractional part, so a
/// rounded blood pressure exports as `140` rather than `140.0`.
fn whole_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => serializer.serialize_some(&(v as i64)),
        _ => value.serialize(serializer),
    }
}

/// A sequence of records produced by one generator call.
pub type Cohort = Vec<SyntheticRecord>;

/// The nullable fields of a [`SyntheticRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Age,
    Gender,
    Bmi,
    SystolicBp,
    DiastolicBp,
    HeartRate,
    Creatinine,
    Egfr,
    Hemoglobin,
    Diabetes,
    Hypertension,
    Smoking,
    LosDays,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Age,
        Field::Gender,
        Field::Bmi,
        Field::SystolicBp,
        Field::DiastolicBp,
        Field::HeartRate,
        Field::Creatinine,
        Field::Egfr,
        Field::Hemoglobin,
        Field::Diabetes,
        Field::Hypertension,
        Field::Smoking,
        Field::LosDays,
    ];

    /// Column name, as used in CSV headers.
    pub fn name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Bmi => "bmi",
            Field::SystolicBp => "systolic_bp",
            Field::DiastolicBp => "diastolic_bp",
            Field::HeartRate => "heart_rate",
            Field::Creatinine => "creatinine",
            Field::Egfr => "egfr",
            Field::Hemoglobin => "hemoglobin",
            Field::Diabetes => "diabetes",
            Field::Hypertension => "hypertension",
            Field::Smoking => "smoking",
            Field::LosDays => "los_days",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| DataError::UnknownField(s.to_string()))
    }
}

impl SyntheticRecord {
    /// Numeric view of a field.
    ///
    /// Categoricals are coded Female=0/Male=1 and Never=0/Former=1/Current=2.
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Age => self.age.map(f64::from),
            Field::Gender => self.gender.map(|g| match g {
                Gender::Female => 0.0,
                Gender::Male => 1.0,
            }),
            Field::Bmi => self.bmi,
            Field::SystolicBp => self.systolic_bp,
            Field::DiastolicBp => self.diastolic_bp,
            Field::HeartRate => self.heart_rate,
            Field::Creatinine => self.creatinine,
            Field::Egfr => self.egfr,
            Field::Hemoglobin => self.hemoglobin,
            Field::Diabetes => self.diabetes.map(f64::from),
            Field::Hypertension => self.hypertension.map(f64::from),
            Field::Smoking => self.smoking.map(|s| match s {
                Smoking::Never => 0.0,
                Smoking::Former => 1.0,
                Smoking::Current => 2.0,
            }),
            Field::LosDays => self.los_days.map(f64::from),
        }
    }

    pub fn is_missing(&self, field: Field) -> bool {
        match field {
            Field::Gender => self.gender.is_none(),
            Field::Smoking => self.smoking.is_none(),
            _ => self.value(field).is_none(),
        }
    }

    /// Set a field to missing.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Age => self.age = None,
            Field::Gender => self.gender = None,
            Field::Bmi => self.bmi = None,
            Field::SystolicBp => self.systolic_bp = None,
            Field::DiastolicBp => self.diastolic_bp = None,
            Field::HeartRate => self.heart_rate = None,
            Field::Creatinine => self.creatinine = None,
            Field::Egfr => self.egfr = None,
            Field::Hemoglobin => self.hemoglobin = None,
            Field::Diabetes => self.diabetes = None,
            Field::Hypertension => self.hypertension = None,
            Field::Smoking => self.smoking = None,
            Field::LosDays => self.los_days = None,
        }
    }
}

/// A field's values across a cohort, `None` where missing.
pub fn column(cohort: &[SyntheticRecord], field: Field) -> Vec<Option<f64>> {
    cohort.iter().map(|r| r.value(field)).collect()
}

/// A field's observed values, missing entries dropped.
pub fn observed(cohort: &[SyntheticRecord], field: Field) -> Vec<f64> {
    cohort.iter().filter_map(|r| r.value(field)).collect()
}
