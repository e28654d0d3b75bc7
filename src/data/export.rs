//! CSV export of cohorts.

use super::record::SyntheticRecord;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur while exporting a cohort.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("exported CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Write a cohort as CSV: a header row of field names, then one row per
/// record with missing values as empty fields.
pub fn write_csv<W: Write>(cohort: &[SyntheticRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in cohort {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render a cohort as a CSV string. An empty cohort renders as "".
pub fn to_csv(cohort: &[SyntheticRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(cohort, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
