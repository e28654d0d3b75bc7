//! Conversions between series slices and `faer` matrices.

use faer::{Col, Mat};

/// Stack series as the columns of an n x p matrix.
///
/// Series of unequal length are truncated to the shortest one.
pub fn series_to_matrix<S: AsRef<[f64]>>(series: &[S]) -> Mat<f64> {
    let n = series.iter().map(|s| s.as_ref().len()).min().unwrap_or(0);
    Mat::from_fn(n, series.len(), |i, j| series[j].as_ref()[i])
}

/// Copy column `j` into a column vector.
pub fn column(x: &Mat<f64>, j: usize) -> Col<f64> {
    Col::from_fn(x.nrows(), |i| x[(i, j)])
}

/// Copy every column except `j`.
pub fn without_column(x: &Mat<f64>, j: usize) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols().saturating_sub(1), |i, k| {
        if k < j {
            x[(i, k)]
        } else {
            x[(i, k + 1)]
        }
    })
}

/// Flag columns whose values all lie within `tolerance` of the first row.
///
/// Every column counts as constant when the matrix has no rows.
pub fn detect_constant_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    if x.nrows() == 0 {
        return vec![true; x.ncols()];
    }

    (0..x.ncols())
        .map(|j| {
            let first = x[(0, j)];
            (1..x.nrows()).all(|i| (x[(i, j)] - first).abs() < tolerance)
        })
        .collect()
}

/// Subtract column means, returning the centered matrix and the means.
pub fn center_columns(x: &Mat<f64>) -> (Mat<f64>, Col<f64>) {
    let n = x.nrows();
    let means = Col::from_fn(x.ncols(), |j| {
        if n == 0 {
            0.0
        } else {
            (0..n).map(|i| x[(i, j)]).sum::<f64>() / n as f64
        }
    });
    let centered = Mat::from_fn(n, x.ncols(), |i, j| x[(i, j)] - means[j]);

    (centered, means)
}

/// Subtract the mean from a vector.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let n = y.nrows();
    let mean = if n == 0 {
        0.0
    } else {
        y.iter().sum::<f64>() / n as f64
    };

    (Col::from_fn(n, |i| y[i] - mean), mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_to_matrix_truncates() {
        let series = vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0]];
        let x = series_to_matrix(&series);

        assert_eq!(x.nrows(), 2);
        assert_eq!(x.ncols(), 2);
        assert_eq!(x[(1, 0)], 2.0);
        assert_eq!(x[(1, 1)], 20.0);
    }

    #[test]
    fn test_without_column() {
        let x = Mat::from_fn(3, 3, |i, j| (i * 10 + j) as f64);
        let reduced = without_column(&x, 1);

        assert_eq!(reduced.ncols(), 2);
        assert_eq!(reduced[(2, 0)], 20.0);
        assert_eq!(reduced[(2, 1)], 22.0);

        let y = column(&x, 1);
        assert_eq!(y[2], 21.0);
    }

    #[test]
    fn test_detect_constant_columns() {
        let x = Mat::from_fn(5, 3, |i, j| match j {
            0 => 1.0,
            1 => i as f64,
            _ => 2.0,
        });

        assert_eq!(detect_constant_columns(&x, 1e-10), vec![true, false, true]);
        assert!(detect_constant_columns(&Mat::<f64>::zeros(0, 2), 1e-10)
            .iter()
            .all(|&c| c));
    }

    #[test]
    fn test_center_columns_and_vector() {
        let x = Mat::from_fn(4, 2, |i, j| (i + 1) as f64 * if j == 0 { 1.0 } else { 10.0 });
        let (centered, means) = center_columns(&x);

        assert!((means[0] - 2.5).abs() < 1e-10);
        assert!((means[1] - 25.0).abs() < 1e-10);
        let col_sum: f64 = (0..4).map(|i| centered[(i, 1)]).sum();
        assert!(col_sum.abs() < 1e-10);

        let (cy, mean) = center_vector(&Col::from_fn(4, |i| (i + 1) as f64));
        assert!((mean - 2.5).abs() < 1e-10);
        assert!(cy.iter().sum::<f64>().abs() < 1e-10);
    }
}
