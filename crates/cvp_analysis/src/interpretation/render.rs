//! Interpretation renderers.

use cvp_core::types::Currency;
use thiserror::Error;

use super::composer::{Interpretation, MarginQuality, ProfitPosition};

/// Rendering failures.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON encoding failed.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turns a tagged interpretation into presentable output.
pub trait InterpretationRenderer {
    /// Renders `interpretation`, formatting money in `currency`.
    fn render(
        &self,
        interpretation: &Interpretation,
        currency: Currency,
    ) -> Result<String, RenderError>;
}

/// English narrative, one paragraph per fired branch.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    fn position_text(interpretation: &Interpretation, symbol: &str) -> Vec<String> {
        let q = interpretation.quantity;
        let profit = interpretation.profit;
        match interpretation.position {
            ProfitPosition::BelowBreakEven { gap_units } => vec![
                format!(
                    "Loss position: operating {:.0} units below break-even. \
                     With {} units sold the loss is {} {:.2}.",
                    gap_units,
                    q,
                    symbol,
                    profit.abs()
                ),
                format!(
                    "Recommendation: sell {:.0} more units or cut fixed costs by {} {:.2} to break even.",
                    gap_units,
                    symbol,
                    profit.abs()
                ),
            ],
            ProfitPosition::AboveBreakEven {
                safety_margin_units,
                safety_margin_percent,
            } => {
                let margin = match safety_margin_percent {
                    Some(pct) => format!(" (safety margin of {:.1}%)", pct),
                    None => String::new(),
                };
                vec![format!(
                    "Profit position: operating {:.0} units above break-even{}. \
                     With {} units sold the profit is {} {:.2}.",
                    safety_margin_units, margin, q, symbol, profit
                )]
            }
            ProfitPosition::BreakEvenUnreachable => vec![
                format!(
                    "Break-even unreachable: the unit price does not exceed the unit variable cost, \
                     so no sales volume covers fixed costs. With {} units sold the result is {} {:.2}.",
                    q, symbol, profit
                ),
                "Recommendation: raise the unit price or reduce the unit variable cost.".to_string(),
            ],
        }
    }

    fn margin_text(interpretation: &Interpretation, symbol: &str) -> Option<String> {
        let pct = interpretation.contribution_margin_percent;
        interpretation.margin_quality.map(|quality| match quality {
            MarginQuality::Low => format!(
                "Low contribution margin: {:.1}% is relatively low. For every {} 100 of sales \
                 only {:.1} goes towards fixed costs and profit.",
                pct, symbol, pct
            ),
            MarginQuality::High => format!(
                "High contribution margin: {:.1}% is excellent. For every {} 100 of sales, \
                 {:.1} goes towards fixed costs and profit.",
                pct, symbol, pct
            ),
        })
    }
}

impl InterpretationRenderer for PlainTextRenderer {
    fn render(
        &self,
        interpretation: &Interpretation,
        currency: Currency,
    ) -> Result<String, RenderError> {
        let symbol = currency.symbol();
        let mut paragraphs = Self::position_text(interpretation, symbol);
        paragraphs.extend(Self::margin_text(interpretation, symbol));
        Ok(paragraphs.join("\n"))
    }
}

/// Pretty-printed JSON of the interpretation plus its tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl InterpretationRenderer for JsonRenderer {
    fn render(
        &self,
        interpretation: &Interpretation,
        currency: Currency,
    ) -> Result<String, RenderError> {
        let value = serde_json::json!({
            "currency": currency,
            "tags": interpretation.tags(),
            "interpretation": interpretation,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
