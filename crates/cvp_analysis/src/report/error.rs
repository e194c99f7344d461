//! Report export errors.

use thiserror::Error;

/// Errors from writing or reading a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writer could not be flushed into the output buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Exported bytes were not valid UTF-8.
    #[error("Report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Expected metric row was not found.
    #[error("Missing report row: {0}")]
    MissingRow(String),

    /// Value cell could not be parsed back into a number.
    #[error("Cannot parse value {value:?} for {label}")]
    UnparsableValue {
        /// Row label
        label: String,
        /// Offending cell
        value: String,
    },
}
