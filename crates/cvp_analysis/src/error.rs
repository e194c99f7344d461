//! Top-level error type for the analysis pipeline.

use cvp_core::types::InputError;
use thiserror::Error;

use crate::curve::CurveError;
use crate::interpretation::RenderError;
use crate::report::ReportError;

/// Failures surfaced by [`crate::pipeline::CvpAnalyzer`] and its stages.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Invalid scenario inputs.
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Curve configuration or range error.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Report export or parse error.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Interpretation rendering error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Margin thresholds are inconsistent.
    #[error("Invalid margin thresholds: low {low} must not exceed high {high}")]
    InvalidThresholds {
        /// Low threshold
        low: f64,
        /// High threshold
        high: f64,
    },

    /// Simulated quantity lies outside `[0, max]`.
    #[error("Simulated quantity {quantity} exceeds the simulation limit of {max} units")]
    SimulationOutOfRange {
        /// Requested quantity
        quantity: u64,
        /// Simulation upper bound
        max: u64,
    },
}

/// Result alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
