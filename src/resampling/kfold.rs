//! K-fold index partitioning.

use rand::seq::SliceRandom;
use rand::Rng;

/// Partition `0..n` into `k` folds after a Fisher–Yates shuffle, drawing
/// from the thread-local generator.
///
/// See [`k_fold_split_with`].
pub fn k_fold_split(n: usize, k: usize) -> Vec<Vec<usize>> {
    k_fold_split_with(n, k, &mut rand::thread_rng())
}

/// Partition `0..n` into `k` folds after shuffling with `rng`.
///
/// Folds are contiguous runs of the shuffled indices of size ⌊n/k⌋; the
/// last fold also takes the remaining n mod k indices. When k > n every
/// fold but the last is empty. `k == 0` yields no folds.
pub fn k_fold_split_with<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<Vec<usize>> {
    if k == 0 {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let fold_size = n / k;
    (0..k)
        .map(|i| {
            let start = i * fold_size;
            let end = if i == k - 1 { n } else { start + fold_size };
            indices[start..end].to_vec()
        })
        .collect()
}
