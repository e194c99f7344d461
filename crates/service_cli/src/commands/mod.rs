//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build their
//! output as a `String` in a `render` function and `run` prints it, so the
//! output can be tested without capturing stdout.

pub mod analyze;
pub mod cases;
pub mod check;
pub mod compare;
pub mod curve;
pub mod export;
pub mod glossary;
pub mod inputs;

use cvp_analysis::scenarios::ScenarioVariant;
use cvp_core::types::Currency;
use std::str::FromStr;

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Output format from `--format`, falling back to the configured default.
pub fn resolve_format(flag: Option<&str>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(s) => Ok(OutputFormat::from_str(s)?),
        None => Ok(config.output_format),
    }
}

/// Scenario variant from `--scenario`.
pub fn resolve_variant(s: &str) -> Result<ScenarioVariant> {
    ScenarioVariant::from_str(s).map_err(CliError::InvalidArgument)
}

/// `R$ 1234.50`
pub fn money(currency: Currency, value: f64) -> String {
    format!("{} {:.2}", currency.symbol(), value)
}

/// `+R$ 1234.50` / `-R$ 1234.50`
pub fn signed_money(currency: Currency, value: f64) -> String {
    let sign = if value < 0.0 { '-' } else { '+' };
    format!("{}{} {:.2}", sign, currency.symbol(), value.abs())
}

/// Box-drawn table with left-aligned columns.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule = |left: char, mid: char, right: char| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {}{} ", c, " ".repeat(w - c.chars().count())))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = vec![rule('┌', '┬', '┐'), line(headers.to_vec()), rule('├', '┼', '┤')];
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.push(rule('└', '┴', '┘'));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format() {
        let config = CliConfig::default();
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Table);
        assert_eq!(resolve_format(Some("json"), &config).unwrap(), OutputFormat::Json);
        assert!(matches!(
            resolve_format(Some("xml"), &config),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_variant() {
        assert_eq!(resolve_variant("optimistic").unwrap(), ScenarioVariant::Optimistic);
        assert!(matches!(
            resolve_variant("stress"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(Currency::BRL, 1234.5), "R$ 1234.50");
        assert_eq!(signed_money(Currency::USD, 15.0), "+US$ 15.00");
        assert_eq!(signed_money(Currency::USD, -15.0), "-US$ 15.00");
    }

    #[test]
    fn test_table_layout() {
        let rendered = table(
            &["Metric", "Value"],
            &[vec!["Profit".to_string(), "R$ 0.00".to_string()]],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "┌────────┬─────────┐");
        assert_eq!(lines[1], "│ Metric │ Value   │");
        assert_eq!(lines[3], "│ Profit │ R$ 0.00 │");
        assert_eq!(lines[4], "└────────┴─────────┘");
    }
}
