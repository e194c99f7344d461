//! Curve command implementation
//!
//! Emits the sampled revenue, cost and profit lines as data for charting.

use serde::Serialize;
use tracing::info;

use super::analyze::analyze;
use super::inputs::InputArgs;
use super::{resolve_format, table};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;
use cvp_analysis::curve::{BreakEvenMarker, CurvePoint};

#[derive(Serialize)]
struct CurveOutput<'a> {
    points: &'a [CurvePoint],
    break_even: Option<BreakEvenMarker>,
}

/// Run the curve command
pub fn run(
    input: &InputArgs,
    scenario: &str,
    samples: Option<usize>,
    format: Option<&str>,
    config: &CliConfig,
) -> Result<()> {
    info!("Generating curve...");
    info!("  Samples: {}", samples.unwrap_or(config.curve_samples));

    let output = render(input, scenario, samples, format, config)?;
    println!("{}", output);

    info!("Curve generation complete");
    Ok(())
}

/// Build the curve output
pub fn render(
    input: &InputArgs,
    scenario: &str,
    samples: Option<usize>,
    format: Option<&str>,
    config: &CliConfig,
) -> Result<String> {
    let format = resolve_format(format, config)?;
    let analysis = analyze(input, scenario, None, config, samples)?;
    let points = analysis.curve.points();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CurveOutput {
            points,
            break_even: analysis.break_even_marker,
        })?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for point in points {
                writer.serialize(point)?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = points
                .iter()
                .map(|p| {
                    vec![
                        format!("{:.2}", p.quantity),
                        format!("{:.2}", p.revenue),
                        format!("{:.2}", p.cost),
                        format!("{:.2}", p.profit),
                    ]
                })
                .collect();
            Ok(table(&["Quantity", "Revenue", "Cost", "Profit"], &rows))
        }
    }
}
