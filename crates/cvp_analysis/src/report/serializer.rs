//! Report serializer.
//!
//! Rows always appear in the same order: price, variable cost, fixed cost,
//! quantity, contribution margin (unit), contribution margin (%), break-even
//! (units), break-even (value), revenue, cost, profit.
//!
//! Formatting:
//! - money: currency symbol, a space, 2 decimals (`R$ 50.00`)
//! - percentages: 1 decimal and a `%` suffix (`60.0%`)
//! - unit counts: 0 decimals and a ` units` suffix (`2000 units`)
//! - unreachable break-even: the literal `unreachable`

use cvp_core::types::{BreakEven, Currency, ScenarioInputs};
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::metrics::ComputedMetrics;
use crate::scenarios::AdjustedInputs;

const HEADER: [&str; 2] = ["Metric", "Value"];
const UNREACHABLE: &str = "unreachable";
const UNITS_SUFFIX: &str = " units";

/// How a field's value is formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Money, 2 decimals with currency symbol
    Currency,
    /// Percentage, 1 decimal
    Percent,
    /// Whole units, 0 decimals
    Units,
}

impl ValueKind {
    /// Decimal places used when formatting.
    pub fn decimals(&self) -> usize {
        match self {
            ValueKind::Currency => 2,
            ValueKind::Percent => 1,
            ValueKind::Units => 0,
        }
    }
}

/// Exported metrics, in export order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    /// Unit selling price
    Price,
    /// Unit variable cost
    VariableCost,
    /// Total fixed cost
    FixedCost,
    /// Quantity sold
    Quantity,
    /// Contribution margin per unit
    ContributionMarginUnit,
    /// Contribution margin percentage
    ContributionMarginPercent,
    /// Break-even in units
    BreakEvenUnits,
    /// Break-even revenue
    BreakEvenValue,
    /// Total revenue
    Revenue,
    /// Total cost
    Cost,
    /// Profit or loss
    Profit,
}

impl ReportField {
    /// All fields in export order.
    pub const ALL: [ReportField; 11] = [
        ReportField::Price,
        ReportField::VariableCost,
        ReportField::FixedCost,
        ReportField::Quantity,
        ReportField::ContributionMarginUnit,
        ReportField::ContributionMarginPercent,
        ReportField::BreakEvenUnits,
        ReportField::BreakEvenValue,
        ReportField::Revenue,
        ReportField::Cost,
        ReportField::Profit,
    ];

    /// Row label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "Unit Selling Price",
            Self::VariableCost => "Unit Variable Cost",
            Self::FixedCost => "Total Fixed Cost",
            Self::Quantity => "Quantity Sold",
            Self::ContributionMarginUnit => "Unit Contribution Margin",
            Self::ContributionMarginPercent => "Contribution Margin Percentage",
            Self::BreakEvenUnits => "Break-even Point (units)",
            Self::BreakEvenValue => "Break-even Point (value)",
            Self::Revenue => "Total Revenue",
            Self::Cost => "Total Cost",
            Self::Profit => "Profit/Loss",
        }
    }

    /// Formatting kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Quantity | Self::BreakEvenUnits => ValueKind::Units,
            Self::ContributionMarginPercent => ValueKind::Percent,
            _ => ValueKind::Currency,
        }
    }

    /// Field with the given label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.label() == label)
    }
}

/// One exported row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Metric
    pub field: ReportField,
    /// Formatted value
    pub value: String,
}

impl ReportRow {
    /// Row label.
    pub fn label(&self) -> &'static str {
        self.field.label()
    }
}

/// Ordered label/value export of one analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    currency: Currency,
    rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Builds the table for `adjusted` inputs and the `metrics` computed at `quantity`.
    pub fn new(
        adjusted: &AdjustedInputs,
        quantity: u64,
        metrics: &ComputedMetrics,
        currency: Currency,
    ) -> Self {
        let symbol = currency.symbol();
        let rows = ReportField::ALL
            .iter()
            .map(|&field| {
                let raw = match field {
                    ReportField::Price => BreakEven::Reachable(adjusted.price),
                    ReportField::VariableCost => BreakEven::Reachable(adjusted.variable_cost),
                    ReportField::FixedCost => BreakEven::Reachable(adjusted.fixed_cost),
                    ReportField::Quantity => BreakEven::Reachable(quantity as f64),
                    ReportField::ContributionMarginUnit => {
                        BreakEven::Reachable(metrics.contribution_margin_unit)
                    }
                    ReportField::ContributionMarginPercent => {
                        BreakEven::Reachable(metrics.contribution_margin_percent)
                    }
                    ReportField::BreakEvenUnits => metrics.break_even_units,
                    ReportField::BreakEvenValue => metrics.break_even_value,
                    ReportField::Revenue => BreakEven::Reachable(metrics.revenue_total),
                    ReportField::Cost => BreakEven::Reachable(metrics.cost_total),
                    ReportField::Profit => BreakEven::Reachable(metrics.profit),
                };
                ReportRow {
                    field,
                    value: format_value(field.kind(), raw.value(), symbol),
                }
            })
            .collect();

        Self { currency, rows }
    }

    /// Table for unadjusted inputs at their own quantity.
    pub fn from_inputs(inputs: &ScenarioInputs, metrics: &ComputedMetrics) -> Self {
        Self::new(
            &AdjustedInputs::base(inputs),
            inputs.quantity(),
            metrics,
            inputs.currency(),
        )
    }

    /// Rows in export order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Currency used for monetary rows.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Writes the header and rows as CSV.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(HEADER)?;
        for row in &self.rows {
            csv_writer.write_record([row.label(), row.value.as_str()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// CSV text with a `Metric,Value` header.
    pub fn to_csv(&self) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

fn format_value(kind: ValueKind, value: Option<f64>, symbol: &str) -> String {
    let Some(v) = value else {
        return UNREACHABLE.to_string();
    };
    let decimals = kind.decimals();
    match kind {
        ValueKind::Currency => format!("{} {:.*}", symbol, decimals, v),
        ValueKind::Percent => format!("{:.*}%", decimals, v),
        ValueKind::Units => format!("{:.*}{}", decimals, v, UNITS_SUFFIX),
    }
}

fn parse_value(kind: ValueKind, cell: &str, symbol: &str) -> Option<Option<f64>> {
    let cell = cell.trim();
    if cell == UNREACHABLE {
        return Some(None);
    }
    let number = match kind {
        ValueKind::Currency => cell.strip_prefix(symbol)?,
        ValueKind::Percent => cell.strip_suffix('%')?,
        ValueKind::Units => cell.strip_suffix(UNITS_SUFFIX)?,
    };
    number.trim().parse::<f64>().ok().map(Some)
}

/// Numbers recovered from an exported report.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedReport {
    values: Vec<(ReportField, Option<f64>)>,
}

impl ParsedReport {
    /// Parses CSV produced by [`ReportTable::to_csv`] with monetary values in `currency`.
    ///
    /// # Errors
    ///
    /// - `ReportError::Csv` for malformed CSV
    /// - `ReportError::UnparsableValue` for a cell that does not match its field's format
    /// - `ReportError::MissingRow` if any field is absent
    pub fn from_csv(text: &str, currency: Currency) -> Result<Self, ReportError> {
        let symbol = currency.symbol();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut values = Vec::with_capacity(ReportField::ALL.len());

        for record in reader.records() {
            let record = record?;
            let label = record.get(0).unwrap_or_default();
            let cell = record.get(1).unwrap_or_default();
            let Some(field) = ReportField::from_label(label) else {
                continue;
            };
            let value = parse_value(field.kind(), cell, symbol).ok_or_else(|| {
                ReportError::UnparsableValue {
                    label: label.to_string(),
                    value: cell.to_string(),
                }
            })?;
            values.push((field, value));
        }

        if let Some(missing) = ReportField::ALL
            .iter()
            .find(|f| !values.iter().any(|(g, _)| g == *f))
        {
            return Err(ReportError::MissingRow(missing.label().to_string()));
        }

        Ok(Self { values })
    }

    /// Parsed value of `field`; `None` when the report says `unreachable`.
    pub fn value(&self, field: ReportField) -> Option<f64> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(price: f64, vc: f64, fc: f64, q: u64, currency: Currency) -> ReportTable {
        let inputs = ScenarioInputs::new(price, vc, fc, q, currency).unwrap();
        let metrics = ComputedMetrics::compute(&AdjustedInputs::base(&inputs), q);
        ReportTable::from_inputs(&inputs, &metrics)
    }

    #[test]
    fn test_row_order_and_formatting() {
        let t = table(50.0, 20.0, 60_000.0, 2000, Currency::BRL);
        let values: Vec<&str> = t.rows().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "R$ 50.00",
                "R$ 20.00",
                "R$ 60000.00",
                "2000 units",
                "R$ 30.00",
                "60.0%",
                "2000 units",
                "R$ 100000.00",
                "R$ 100000.00",
                "R$ 100000.00",
                "R$ 0.00",
            ]
        );
        let labels: Vec<&str> = t.rows().iter().map(|r| r.label()).collect();
        assert_eq!(labels[0], "Unit Selling Price");
        assert_eq!(labels[10], "Profit/Loss");
    }

    #[test]
    fn test_csv_header_and_length() {
        let csv = table(800.0, 320.0, 240_000.0, 600, Currency::USD).to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Metric,Value"));
        assert_eq!(lines.count(), 11);
        assert!(csv.contains("Profit/Loss,US$ 48000.00"));
    }

    #[test]
    fn test_unreachable_break_even_exported_literally() {
        let t = table(10.0, 10.0, 5_000.0, 100, Currency::BRL);
        assert_eq!(t.rows()[6].value, "unreachable");
        assert_eq!(t.rows()[7].value, "unreachable");
    }

    #[test]
    fn test_parse_back() {
        let csv = table(120.0, 72.0, 96_000.0, 4000, Currency::EUR).to_csv().unwrap();
        let parsed = ParsedReport::from_csv(&csv, Currency::EUR).unwrap();
        assert_eq!(parsed.value(ReportField::Price), Some(120.0));
        assert_eq!(parsed.value(ReportField::Quantity), Some(4000.0));
        assert_eq!(parsed.value(ReportField::ContributionMarginPercent), Some(40.0));
        assert_eq!(parsed.value(ReportField::BreakEvenUnits), Some(2000.0));
        assert_eq!(parsed.value(ReportField::Profit), Some(96_000.0));
    }

    #[test]
    fn test_parse_missing_row() {
        let csv = "Metric,Value\nUnit Selling Price,R$ 1.00\n";
        match ParsedReport::from_csv(csv, Currency::BRL) {
            Err(ReportError::MissingRow(label)) => assert_eq!(label, "Unit Variable Cost"),
            other => panic!("Expected MissingRow, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_currency() {
        let csv = table(50.0, 20.0, 60_000.0, 2000, Currency::BRL).to_csv().unwrap();
        assert!(matches!(
            ParsedReport::from_csv(&csv, Currency::GBP),
            Err(ReportError::UnparsableValue { .. })
        ));
    }

    #[test]
    fn test_value_kind_decimals() {
        assert_eq!(ReportField::Price.kind().decimals(), 2);
        assert_eq!(ReportField::ContributionMarginPercent.kind().decimals(), 1);
        assert_eq!(ReportField::BreakEvenUnits.kind().decimals(), 0);
    }

    #[test]
    fn test_written_precision_matches_value_kind() {
        let t = table(33.33, 11.11, 12_345.678, 777, Currency::GBP);
        let symbol = Currency::GBP.symbol();
        for row in t.rows() {
            let kind = row.field.kind();
            let number = match kind {
                ValueKind::Currency => row.value.strip_prefix(symbol).unwrap().trim(),
                ValueKind::Percent => row.value.strip_suffix('%').unwrap(),
                ValueKind::Units => row.value.strip_suffix(UNITS_SUFFIX).unwrap(),
            };
            let written = number.split_once('.').map_or(0, |(_, frac)| frac.len());
            assert_eq!(written, kind.decimals(), "{}: {}", row.label(), row.value);
        }
    }
}
