//! Tabular report export.
//!
//! - `ReportTable`: ordered (label, formatted value) rows built from inputs and metrics
//! - `ReportTable::to_csv`: two-column CSV with a `Metric,Value` header
//! - `ParsedReport::from_csv`: reads an exported report back into numbers

mod error;
pub mod serializer;

pub use error::ReportError;
pub use serializer::{ParsedReport, ReportField, ReportRow, ReportTable, ValueKind};
