//! Descriptive statistics over plain `f64` slices.
//!
//! Every function here is total: empty input, zero variance and length
//! mismatches produce `0.0` (or an all-zero / empty result) instead of an
//! error. A zero therefore means either "truly zero" or "undefined".

use faer::Mat;

/// Arithmetic mean. Returns 0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Median of a sorted copy (average of the two middle values for even n).
///
/// Returns 0 for an empty slice.
pub fn median(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }

    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Standard deviation.
///
/// `sample = true` uses the n-1 denominator, `false` the population (n)
/// denominator. Returns 0 for an empty slice, and for the sample estimate
/// of a single value.
pub fn std(xs: &[f64], sample: bool) -> f64 {
    let n = xs.len();
    if n == 0 || (sample && n < 2) {
        return 0.0;
    }

    let mu = mean(xs);
    let ss: f64 = xs.iter().map(|&x| (x - mu).powi(2)).sum();
    let denom = if sample { (n - 1) as f64 } else { n as f64 };

    (ss / denom).sqrt()
}

/// Pearson correlation computed as the sample-normalized sum of z-score
/// cross-products.
///
/// Returns 0 when the slices differ in length, are empty, or either series
/// has zero variance.
pub fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.is_empty() {
        return 0.0;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);
    let std_x = std(xs, true);
    let std_y = std(ys, true);

    if std_x == 0.0 || std_y == 0.0 {
        return 0.0;
    }

    let sum: f64 = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| ((x - mean_x) / std_x) * ((y - mean_y) / std_y))
        .sum();

    sum / (xs.len() - 1) as f64
}

/// Pairwise correlation matrix of several series.
///
/// The result is symmetric with a unit diagonal; entry (i, j) is
/// `correlation(series[i], series[j])`.
pub fn correlation_matrix<S: AsRef<[f64]>>(series: &[S]) -> Mat<f64> {
    let p = series.len();
    let mut matrix = Mat::zeros(p, p);

    for i in 0..p {
        matrix[(i, i)] = 1.0;
        for j in (i + 1)..p {
            let r = correlation(series[i].as_ref(), series[j].as_ref());
            matrix[(i, j)] = r;
            matrix[(j, i)] = r;
        }
    }

    matrix
}

/// Z-scores using the sample standard deviation.
///
/// All zeros when the standard deviation is 0.
pub fn standardize(xs: &[f64]) -> Vec<f64> {
    let mu = mean(xs);
    let sigma = std(xs, true);

    if sigma == 0.0 {
        return vec![0.0; xs.len()];
    }

    xs.iter().map(|&x| (x - mu) / sigma).collect()
}

/// Summary statistics shown next to distribution charts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DescriptiveSummary {
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl DescriptiveSummary {
    /// Summarize a slice. Every statistic is 0 for an empty slice.
    pub fn from_slice(xs: &[f64]) -> Self {
        if xs.is_empty() {
            return Self::default();
        }

        Self {
            n: xs.len(),
            mean: mean(xs),
            median: median(xs),
            std: std(xs, true),
            min: xs.iter().copied().fold(f64::INFINITY, f64::min),
            max: xs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Field-wise difference `self - baseline`, used to show how an
    /// imputation shifted each statistic.
    pub fn shift_from(&self, baseline: &DescriptiveSummary) -> DescriptiveShift {
        DescriptiveShift {
            n: self.n as i64 - baseline.n as i64,
            mean: self.mean - baseline.mean,
            median: self.median - baseline.median,
            std: self.std - baseline.std,
            min: self.min - baseline.min,
            max: self.max - baseline.max,
        }
    }
}

/// Difference between two [`DescriptiveSummary`] values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DescriptiveShift {
    pub n: i64,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// One equal-width histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub center: f64,
    pub count: usize,
}

/// Equal-width histogram over `[min, max]`.
///
/// The maximum lands in the last bin. When every value is equal the bins
/// have zero width and all values are counted in the first bin. Returns an
/// empty vector for empty input or `bins == 0`.
pub fn histogram(xs: &[f64], bins: usize) -> Vec<HistogramBin> {
    if xs.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            center: min + i as f64 * width + width / 2.0,
            count: 0,
        })
        .collect();

    for &x in xs {
        let idx = if width > 0.0 {
            (((x - min) / width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        out[idx].count += 1;
    }

    out
}
