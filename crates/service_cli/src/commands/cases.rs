//! Cases command implementation
//!
//! Lists the predefined business cases accepted by `--case`.

use cvp_analysis::scenarios::PredefinedCase;
use serde_json::json;
use tracing::info;

use super::{money, resolve_format, table};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

const HEADERS: [&str; 7] = [
    "Case",
    "Name",
    "Price",
    "Variable cost",
    "Fixed cost",
    "Quantity",
    "Description",
];

/// Run the cases command
pub fn run(format: Option<&str>, config: &CliConfig) -> Result<()> {
    info!("Listing predefined cases...");
    println!("{}", render(format, config)?);
    Ok(())
}

/// Build the cases output
pub fn render(format: Option<&str>, config: &CliConfig) -> Result<String> {
    let currency = config.currency;

    match resolve_format(format, config)? {
        OutputFormat::Json => {
            let cases: Vec<_> = PredefinedCase::ALL
                .iter()
                .map(|case| {
                    let (price, variable_cost, fixed_cost, quantity) = case.values();
                    json!({
                        "id": case.id(),
                        "name": case.name(),
                        "description": case.description(),
                        "price": price,
                        "variable_cost": variable_cost,
                        "fixed_cost": fixed_cost,
                        "quantity": quantity,
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&cases)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(HEADERS)?;
            for case in PredefinedCase::ALL {
                let (price, variable_cost, fixed_cost, quantity) = case.values();
                writer.write_record([
                    case.id().to_string(),
                    case.name().to_string(),
                    price.to_string(),
                    variable_cost.to_string(),
                    fixed_cost.to_string(),
                    quantity.to_string(),
                    case.description().to_string(),
                ])?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = PredefinedCase::ALL
                .iter()
                .map(|case| {
                    let (price, variable_cost, fixed_cost, quantity) = case.values();
                    vec![
                        case.id().to_string(),
                        case.name().to_string(),
                        money(currency, price),
                        money(currency, variable_cost),
                        money(currency, fixed_cost),
                        quantity.to_string(),
                        case.description().to_string(),
                    ]
                })
                .collect();
            Ok(table(&HEADERS, &rows))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_case() {
        let out = render(None, &CliConfig::default()).unwrap();
        for case in PredefinedCase::ALL {
            assert!(out.contains(case.id()), "missing {}", case.id());
        }
        assert!(out.contains("R$ 800.00"));
    }

    #[test]
    fn test_json_cases() {
        let out = render(Some("json"), &CliConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
        assert_eq!(value[4]["id"], "restaurant");
        assert_eq!(value[4]["quantity"], 7500);
    }

    #[test]
    fn test_csv_cases() {
        let out = render(Some("csv"), &CliConfig::default()).unwrap();
        assert_eq!(out.lines().count(), 6);
        assert!(out.lines().nth(2).unwrap().starts_with("furniture-factory,"));
    }
}
