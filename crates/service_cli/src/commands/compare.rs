//! Compare command implementation
//!
//! Evaluates the Base, Optimistic and Pessimistic scenarios side by side.

use cvp_analysis::scenarios::ScenarioComparison;
use cvp_analysis::CvpAnalyzer;
use cvp_core::types::Currency;
use tracing::info;

use super::inputs::InputArgs;
use super::{money, resolve_format, table};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

const HEADERS: [&str; 9] = [
    "Scenario",
    "Price",
    "Variable cost",
    "Fixed cost",
    "CM/unit",
    "CM %",
    "Break-even",
    "Revenue",
    "Profit",
];

/// Run the compare command
pub fn run(input: &InputArgs, format: Option<&str>, config: &CliConfig) -> Result<()> {
    info!("Comparing scenarios...");

    let output = render(input, format, config)?;
    println!("{}", output);

    info!("Comparison complete");
    Ok(())
}

/// Build the compare output
pub fn render(input: &InputArgs, format: Option<&str>, config: &CliConfig) -> Result<String> {
    let format = resolve_format(format, config)?;
    let inputs = input.resolve(config.currency)?;
    let analyzer = CvpAnalyzer::new(config.analysis_config(None))?;
    let rows = analyzer.compare(&inputs);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(HEADERS)?;
            for row in &rows {
                writer.write_record(cells(row, inputs.currency()))?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        OutputFormat::Table => {
            let body: Vec<Vec<String>> =
                rows.iter().map(|r| cells(r, inputs.currency())).collect();
            Ok(table(&HEADERS, &body))
        }
    }
}

fn cells(row: &ScenarioComparison, currency: Currency) -> Vec<String> {
    let m = &row.metrics;
    vec![
        row.variant.to_string(),
        money(currency, row.adjusted.price),
        money(currency, row.adjusted.variable_cost),
        money(currency, row.adjusted.fixed_cost),
        money(currency, m.contribution_margin_unit),
        format!("{:.1}%", m.contribution_margin_percent),
        m.break_even_units
            .value()
            .map(|u| format!("{:.0} units", u))
            .unwrap_or_else(|| "unreachable".to_string()),
        money(currency, m.revenue_total),
        money(currency, m.profit),
    ]
}
