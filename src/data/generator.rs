//! Seeded generation of synthetic clinical cohorts.
//!
//! Every draw, categorical and continuous, comes from the one generator
//! passed in, so a seed fully determines the cohort.

use super::record::{Cohort, Gender, Smoking, SyntheticRecord};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Normal draw via the Box–Muller transform on two uniforms from `rng`.
pub fn random_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    // 1 - U lies in (0, 1], keeping ln finite
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    z0 * std + mean
}

/// eGFR from serum creatinine, age and gender:
/// `round(175 · creatinine^-1.154 · age^-0.203 · (0.742 if female))`.
pub fn egfr_from(creatinine: f64, age: u32, gender: Gender) -> f64 {
    let sex_factor = match gender {
        Gender::Male => 1.0,
        Gender::Female => 0.742,
    };
    (175.0 * creatinine.powf(-1.154) * f64::from(age).powf(-0.203) * sex_factor).round()
}

fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

fn flag(b: bool) -> u8 {
    u8::from(b)
}

/// Generate a cohort of `size` records from `seed`.
///
/// The same `(size, seed)` pair always yields the same cohort.
pub fn generate(size: usize, seed: u64) -> Cohort {
    let mut rng = StdRng::seed_from_u64(seed);
    let cohort = generate_with_rng(size, &mut rng);
    debug!("generated cohort of {size} records from seed {seed}");
    cohort
}

/// Generate a cohort of `size` records drawing from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Cohort {
    (0..size).map(|i| generate_record(i as u32 + 1, rng)).collect()
}

fn generate_record<R: Rng + ?Sized>(id: u32, rng: &mut R) -> SyntheticRecord {
    let age = random_normal(rng, 65.0, 15.0).round().clamp(18.0, 95.0) as u32;
    let gender = if rng.gen::<f64>() > 0.48 {
        Gender::Male
    } else {
        Gender::Female
    };

    let bmi = random_normal(rng, 28.0, 6.0).clamp(15.0, 50.0);

    // Comorbidities become more likely with age
    let years_over_18 = f64::from(age) - 18.0;
    let diabetes = bernoulli(rng, 0.15 + years_over_18 / 200.0);
    let hypertension = bernoulli(rng, 0.20 + years_over_18 / 150.0);

    let smoking_draw: f64 = rng.gen();
    let smoking = if smoking_draw < 0.5 {
        Smoking::Never
    } else if smoking_draw < 0.75 {
        Smoking::Former
    } else {
        Smoking::Current
    };

    let (systolic_bp, diastolic_bp) = if hypertension {
        (
            random_normal(rng, 145.0, 18.0).round(),
            random_normal(rng, 88.0, 10.0).round(),
        )
    } else {
        (
            random_normal(rng, 125.0, 12.0).round(),
            random_normal(rng, 78.0, 8.0).round(),
        )
    };

    let heart_rate = random_normal(rng, 75.0, 12.0).round();

    let creatinine_mean = if diabetes { 1.4 } else { 1.1 };
    let creatinine = random_normal(rng, creatinine_mean, 0.4).clamp(0.5, 3.5);
    let egfr = egfr_from(creatinine, age, gender);

    let hemoglobin_mean = match gender {
        Gender::Male => 14.5,
        Gender::Female => 13.0,
    };
    let hemoglobin = random_normal(rng, hemoglobin_mean, 1.5);

    let los = 3.0
        + (f64::from(age) - 65.0) / 10.0
        + if diabetes { 1.5 } else { 0.0 }
        + if hypertension { 0.5 } else { 0.0 }
        + random_normal(rng, 0.0, 2.0);
    let los_days = los.round().max(1.0) as u32;

    let readmit_prob = 0.15
        + if diabetes { 0.10 } else { 0.0 }
        + if hypertension { 0.05 } else { 0.0 }
        + if los_days > 7 { 0.10 } else { 0.0 };
    let readmitted = bernoulli(rng, readmit_prob);

    SyntheticRecord {
        id,
        age: Some(age),
        gender: Some(gender),
        bmi: Some(bmi),
        systolic_bp: Some(systolic_bp),
        diastolic_bp: Some(diastolic_bp),
        heart_rate: Some(heart_rate),
        creatinine: Some(creatinine),
        egfr: Some(egfr),
        hemoglobin: Some(hemoglobin),
        diabetes: Some(flag(diabetes)),
        hypertension: Some(flag(hypertension)),
        smoking: Some(smoking),
        readmitted: flag(readmitted),
        los_days: Some(los_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{mean, std};
    use approx::assert_relative_eq;

    #[test]
    fn test_ids_and_size() {
        let cohort = generate(50, 1);
        assert_eq!(cohort.len(), 50);
        for (i, r) in cohort.iter().enumerate() {
            assert_eq!(r.id, i as u32 + 1);
        }
        assert!(generate(0, 1).is_empty());
    }

    #[test]
    fn test_ranges() {
        for r in generate(500, 9) {
            let age = r.age.unwrap();
            assert!((18..=95).contains(&age));
            assert!((15.0..=50.0).contains(&r.bmi.unwrap()));
            assert!((0.5..=3.5).contains(&r.creatinine.unwrap()));
            assert!(r.los_days.unwrap() >= 1);
            assert!(r.readmitted <= 1);
        }
    }

    #[test]
    fn test_box_muller_moments() {
        let mut rng = StdRng::seed_from_u64(123);
        let draws: Vec<f64> = (0..20_000).map(|_| random_normal(&mut rng, 10.0, 2.0)).collect();

        assert_relative_eq!(mean(&draws), 10.0, epsilon = 0.1);
        assert_relative_eq!(std(&draws, true), 2.0, epsilon = 0.1);
    }

    #[test]
    fn test_egfr_formula() {
        let male = egfr_from(1.0, 60, Gender::Male);
        let expected = (175.0 * 60f64.powf(-0.203)).round();
        assert_eq!(male, expected);

        let female = egfr_from(1.0, 60, Gender::Female);
        assert_eq!(female, (175.0 * 60f64.powf(-0.203) * 0.742).round());
        assert!(egfr_from(2.0, 60, Gender::Male) < male);
    }
}
