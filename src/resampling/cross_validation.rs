//! K-fold cross-validation of a single-predictor linear fit.

use crate::solvers::linear_regression;
use crate::utils::{mean, std};

/// Per-fold and aggregate RMSE from cross-validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrossValidationResult {
    /// Held-out RMSE for each non-empty fold, in fold order.
    pub fold_rmse: Vec<f64>,
    pub mean_rmse: f64,
    /// Population standard deviation of the fold RMSEs.
    pub std_rmse: f64,
}

fn rmse(errors: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = errors.fold((0.0, 0usize), |(s, c), e| (s + e * e, c + 1));
    if count == 0 {
        0.0
    } else {
        (sum / count as f64).sqrt()
    }
}

/// Cross-validate `y ~ x` over the given folds.
///
/// For each fold the line is fit on every other fold and scored on the
/// held-out indices. Empty folds, and indices outside the data, are
/// skipped. Mismatched `xs`/`ys` lengths yield an empty result.
pub fn cross_validate(xs: &[f64], ys: &[f64], folds: &[Vec<usize>]) -> CrossValidationResult {
    if xs.len() != ys.len() {
        return CrossValidationResult::default();
    }
    let n = xs.len();

    let mut held_out = vec![false; n];
    let mut fold_rmse = Vec::with_capacity(folds.len());

    for fold in folds {
        let test: Vec<usize> = fold.iter().copied().filter(|&i| i < n).collect();
        if test.is_empty() {
            continue;
        }

        held_out.iter_mut().for_each(|h| *h = false);
        for &i in &test {
            held_out[i] = true;
        }

        let (train_x, train_y): (Vec<f64>, Vec<f64>) = (0..n)
            .filter(|&i| !held_out[i])
            .map(|i| (xs[i], ys[i]))
            .unzip();

        let fit = linear_regression(&train_x, &train_y);
        fold_rmse.push(rmse(test.iter().map(|&i| ys[i] - fit.predict(xs[i]))));
    }

    CrossValidationResult {
        mean_rmse: mean(&fold_rmse),
        std_rmse: std(&fold_rmse, false),
        fold_rmse,
    }
}
