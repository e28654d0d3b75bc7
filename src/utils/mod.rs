//! Descriptive statistics and matrix helpers shared by the other modules.

mod descriptive;
mod matrix;

pub use descriptive::{
    correlation, correlation_matrix, histogram, mean, median, standardize, std,
    DescriptiveShift, DescriptiveSummary, HistogramBin,
};
pub use matrix::{
    center_columns, center_vector, column, detect_constant_columns, series_to_matrix,
    without_column,
};
