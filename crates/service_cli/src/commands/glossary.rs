//! Glossary command implementation
//!
//! Prints definitions of CVP terms, all of them or a single one.

use cvp_analysis::GlossaryTerm;
use serde_json::json;
use std::str::FromStr;
use tracing::info;

use super::{resolve_format, table};
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

const HEADERS: [&str; 3] = ["Term", "Name", "Definition"];

/// Run the glossary command
pub fn run(term: Option<&str>, format: Option<&str>, config: &CliConfig) -> Result<()> {
    info!("Listing glossary terms...");
    println!("{}", render(term, format, config)?);
    Ok(())
}

/// Build the glossary output
pub fn render(term: Option<&str>, format: Option<&str>, config: &CliConfig) -> Result<String> {
    let terms = match term {
        Some(t) => vec![GlossaryTerm::from_str(t).map_err(CliError::InvalidArgument)?],
        None => GlossaryTerm::ALL.to_vec(),
    };

    match resolve_format(format, config)? {
        OutputFormat::Json => {
            let entries: Vec<_> = terms
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id(),
                        "name": t.name(),
                        "definition": t.definition(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&entries)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(HEADERS)?;
            for t in &terms {
                writer.write_record([t.id(), t.name(), t.definition()])?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = terms
                .iter()
                .map(|t| {
                    vec![
                        t.id().to_string(),
                        t.name().to_string(),
                        t.definition().to_string(),
                    ]
                })
                .collect();
            Ok(table(&HEADERS, &rows))
        }
    }
}
