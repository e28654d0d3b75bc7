//! Probability distribution helpers.

mod normal;

pub use normal::inverse_normal_cdf;
