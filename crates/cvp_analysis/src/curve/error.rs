//! Curve generation errors.

use thiserror::Error;

/// Errors from curve generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Fewer samples than needed to span a range.
    #[error("Insufficient samples: got {got}, need at least {need}")]
    InsufficientSamples {
        /// Number of samples requested
        got: usize,
        /// Minimum number of samples
        need: usize,
    },

    /// Reference quantity is not a positive finite number.
    #[error("Invalid reference quantity: {0}")]
    InvalidRange(f64),
}
