//! Fixed reference cohorts shared by every lesson.

use super::generator::generate;
use super::missingness::{inject_missingness_with, Mechanism};
use super::record::{Cohort, Field, SyntheticRecord};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::OnceLock;

const REFERENCE_SIZE: usize = 300;
const REFERENCE_SEED: u64 = 42;
const REFERENCE_MISSING_RATE: f64 = 0.15;

/// Names of the reference cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Clean,
    WithMcar,
    WithMar,
    WithMnar,
    Small,
    Large,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Clean,
        DatasetKind::WithMcar,
        DatasetKind::WithMar,
        DatasetKind::WithMnar,
        DatasetKind::Small,
        DatasetKind::Large,
    ];

    /// Mechanism used to derive this cohort, if any.
    pub fn mechanism(self) -> Option<Mechanism> {
        match self {
            DatasetKind::WithMcar => Some(Mechanism::Mcar),
            DatasetKind::WithMar => Some(Mechanism::Mar),
            DatasetKind::WithMnar => Some(Mechanism::Mnar),
            _ => None,
        }
    }
}

/// The reference cohorts.
///
/// `clean` is 300 records from seed 42; the three `with_*` cohorts are
/// `clean` with 15% missingness injected on bmi; `small` and `large` are
/// 100 records from seed 123 and 500 from seed 789.
#[derive(Debug, Clone)]
pub struct ReferenceDatasets {
    pub clean: Cohort,
    pub with_mcar: Cohort,
    pub with_mar: Cohort,
    pub with_mnar: Cohort,
    pub small: Cohort,
    pub large: Cohort,
}

impl ReferenceDatasets {
    /// Build every reference cohort. Missingness draws are seeded, so the
    /// result is identical on every call.
    pub fn build() -> Self {
        let clean = generate(REFERENCE_SIZE, REFERENCE_SEED);

        let masked = |mechanism: Mechanism, stream: u64| {
            let mut rng = StdRng::seed_from_u64(REFERENCE_SEED.wrapping_add(stream));
            inject_missingness_with(
                &clean,
                mechanism,
                Field::Bmi,
                REFERENCE_MISSING_RATE,
                &mut rng,
            )
        };
        let with_mcar = masked(Mechanism::Mcar, 1);
        let with_mar = masked(Mechanism::Mar, 2);
        let with_mnar = masked(Mechanism::Mnar, 3);

        let datasets = Self {
            with_mcar,
            with_mar,
            with_mnar,
            small: generate(100, 123),
            large: generate(500, 789),
            clean,
        };
        debug!("built {} reference datasets", DatasetKind::ALL.len());
        datasets
    }

    pub fn get(&self, kind: DatasetKind) -> &[SyntheticRecord] {
        match kind {
            DatasetKind::Clean => &self.clean,
            DatasetKind::WithMcar => &self.with_mcar,
            DatasetKind::WithMar => &self.with_mar,
            DatasetKind::WithMnar => &self.with_mnar,
            DatasetKind::Small => &self.small,
            DatasetKind::Large => &self.large,
        }
    }
}

/// Process-wide reference cohorts, built on first use.
pub fn reference_datasets() -> &'static ReferenceDatasets {
    static DATASETS: OnceLock<ReferenceDatasets> = OnceLock::new();
    DATASETS.get_or_init(ReferenceDatasets::build)
}
