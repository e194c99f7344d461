//! Check command implementation
//!
//! Validates the resolved configuration and prints it as TOML.

use cvp_analysis::CvpAnalyzer;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    println!("{}", render(config)?);
    info!("Configuration OK");
    Ok(())
}

/// Build the check output
pub fn render(config: &CliConfig) -> Result<String> {
    config.validate()?;
    let analyzer = CvpAnalyzer::new(config.analysis_config(None))?;
    let resolved = analyzer.config();

    Ok(format!(
        "# Resolved configuration\n{}\n# Analyzer: {} curve samples, margin thresholds {}% / {}%",
        config.to_toml()?,
        resolved.curve_samples,
        resolved.thresholds.low,
        resolved.thresholds.high
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_check_default_config() {
        let out = render(&CliConfig::default()).unwrap();
        assert!(out.contains("currency = \"BRL\""));
        assert!(out.contains("curve_samples = 100"));
        assert!(out.contains("100 curve samples, margin thresholds 30% / 60%"));
    }

    #[test]
    fn test_check_rejects_invalid_config() {
        let config = CliConfig {
            curve_samples: 0,
            ..CliConfig::default()
        };
        assert!(matches!(render(&config), Err(CliError::Config(_))));
    }
}
