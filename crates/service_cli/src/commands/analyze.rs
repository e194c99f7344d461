//! Analyze command implementation
//!
//! Runs the full CVP pipeline and prints metrics, simulation deltas,
//! additional metrics and the interpretation.

use cvp_analysis::interpretation::PlainTextRenderer;
use cvp_analysis::scenarios::ScenarioVariant;
use cvp_analysis::{AnalysisRequest, CvpAnalysis, CvpAnalyzer};
use tracing::info;

use super::inputs::InputArgs;
use super::{money, resolve_format, resolve_variant, signed_money, table};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the analyze command
pub fn run(
    input: &InputArgs,
    scenario: &str,
    simulate: Option<u64>,
    format: Option<&str>,
    config: &CliConfig,
) -> Result<()> {
    info!("Starting analysis...");
    info!("  Scenario: {}", scenario);
    info!("  Currency: {}", config.currency);

    let output = render(input, scenario, simulate, format, config)?;
    println!("{}", output);

    info!("Analysis complete");
    Ok(())
}

/// Build the analyze output
pub fn render(
    input: &InputArgs,
    scenario: &str,
    simulate: Option<u64>,
    format: Option<&str>,
    config: &CliConfig,
) -> Result<String> {
    let format = resolve_format(format, config)?;
    let analysis = analyze(input, scenario, simulate, config, None)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Csv => Ok(analysis.report_csv()?),
        OutputFormat::Table => format_table(&analysis),
    }
}

/// Resolve inputs and run the pipeline
pub(crate) fn analyze(
    input: &InputArgs,
    scenario: &str,
    simulate: Option<u64>,
    config: &CliConfig,
    curve_samples: Option<usize>,
) -> Result<CvpAnalysis> {
    let inputs = input.resolve(config.currency)?;
    let variant = resolve_variant(scenario)?;
    let analyzer = CvpAnalyzer::new(config.analysis_config(curve_samples))?;

    let mut request = AnalysisRequest::new(inputs).with_variant(variant);
    if let Some(quantity) = simulate {
        request = request.with_simulated_quantity(quantity);
    }
    Ok(analyzer.analyze(&request)?)
}

fn format_table(analysis: &CvpAnalysis) -> Result<String> {
    let currency = analysis.currency;
    let mut sections = Vec::new();

    sections.push(format!(
        "CVP analysis: {} scenario ({})",
        analysis.adjusted.variant, currency
    ));

    let rows: Vec<Vec<String>> = analysis
        .report
        .rows()
        .iter()
        .map(|r| vec![r.label().to_string(), r.value.clone()])
        .collect();
    sections.push(table(&["Metric", "Value"], &rows));

    if analysis.adjusted.variant != ScenarioVariant::Base {
        let c = analysis.changes;
        sections.push(format!(
            "Adjustments: price {:+.1}%, variable cost {:+.1}%, fixed cost {:+.1}%",
            c.price, c.variable_cost, c.fixed_cost
        ));
    }

    if let Some(delta) = analysis.delta {
        sections.push(format!(
            "Simulation: {} units vs {} sold\n  Revenue: {}\n  Cost:    {}\n  Profit:  {}",
            analysis.simulated_quantity,
            analysis.quantity,
            signed_money(currency, delta.revenue),
            signed_money(currency, delta.cost),
            signed_money(currency, delta.profit),
        ));
    }

    if let Some(extra) = analysis.additional {
        let margin = match extra.safety_margin {
            Some(m) => match m.percent {
                Some(pct) => format!("{:.0} units ({:.1}%)", m.units, pct),
                None => format!("{:.0} units", m.units),
            },
            None => "n/a (break-even unreachable)".to_string(),
        };
        let leverage = extra
            .operating_leverage
            .map(|dol| format!("{:.2}x", dol))
            .unwrap_or_else(|| "n/a".to_string());
        sections.push(format!(
            "Safety margin:      {}\nOperating leverage: {}",
            margin, leverage
        ));
    }

    let b = analysis.breakdown;
    sections.push(format!(
        "Price composition: variable cost {} + contribution margin {} = {}",
        money(currency, b.variable_cost),
        money(currency, b.contribution_margin),
        money(currency, b.price)
    ));
    sections.push(format!(
        "Simulation range: 0 to {} units",
        analysis.simulation_upper_bound
    ));

    sections.push(analysis.narrative(&PlainTextRenderer)?);
    Ok(sections.join("\n\n"))
}
