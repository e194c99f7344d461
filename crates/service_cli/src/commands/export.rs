//! Export command implementation
//!
//! Writes the two-column CSV report to a file.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use super::analyze::analyze;
use super::inputs::InputArgs;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// File written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "cvp_analysis.csv";

/// Run the export command
pub fn run(
    input: &InputArgs,
    scenario: &str,
    simulate: Option<u64>,
    output: &Path,
    config: &CliConfig,
) -> Result<()> {
    info!("Exporting report...");
    info!("  Output: {}", output.display());

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(CliError::FileNotFound(parent.display().to_string()));
        }
    }

    let analysis = analyze(input, scenario, simulate, config, None)?;
    let file = File::create(output)?;
    analysis.report.write_csv(BufWriter::new(file))?;

    info!("Report written to {}", output.display());
    Ok(())
}
