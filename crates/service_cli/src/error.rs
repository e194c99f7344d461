//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the user by the `cvp` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed or inconsistent command-line arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A file named on the command line does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario inputs violate their invariants
    #[error("Invalid input: {0}")]
    Input(#[from] cvp_core::types::InputError),

    /// Analysis pipeline failure
    #[error("Analysis failed: {0}")]
    Analysis(#[from] cvp_analysis::AnalysisError),

    /// Report export failure
    #[error("Report error: {0}")]
    Report(#[from] cvp_analysis::report::ReportError),

    /// Curve export failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem or stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::InvalidArgument("bad".to_string());
        assert_eq!(err.to_string(), "Invalid argument: bad");

        let err = CliError::FileNotFound("cvp.toml".to_string());
        assert_eq!(err.to_string(), "File not found: cvp.toml");
    }

    #[test]
    fn test_from_input_error() {
        let err: CliError = cvp_core::types::InputError::NegativeFixedCost(-1.0).into();
        assert!(matches!(err, CliError::Input(_)));
        assert!(err.to_string().starts_with("Invalid input:"));
    }
}
