//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.

use cvp_analysis::interpretation::MarginThresholds;
use cvp_analysis::AnalysisConfig;
use cvp_core::types::Currency;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cvp.toml";

/// Environment variable overriding the currency.
pub const ENV_CURRENCY: &str = "CVP_CURRENCY";
/// Environment variable overriding the curve sample count.
pub const ENV_CURVE_SAMPLES: &str = "CVP_CURVE_SAMPLES";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "CVP_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid curve sample count: {0}. Must be at least 2")]
    InvalidCurveSamples(usize),

    #[error("Invalid margin thresholds: low {low} must not exceed high {high}")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidOutputFormat(String),

    #[error("Invalid currency: {0}. Must be one of: BRL, USD, EUR, GBP")]
    InvalidCurrency(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Currency for monetary values
    #[serde(deserialize_with = "deserialize_currency")]
    pub currency: Currency,
    /// Samples per curve
    pub curve_samples: usize,
    /// Contribution margin percentage below which the margin is low
    pub low_margin_threshold: f64,
    /// Contribution margin percentage above which the margin is high
    pub high_margin_threshold: f64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
}

fn deserialize_currency<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_currency(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

/// Parses an ISO code or symbol.
pub fn parse_currency(s: &str) -> Result<Currency, ConfigError> {
    Currency::from_str(s).map_err(|_| ConfigError::InvalidCurrency(s.to_string()))
}

impl Default for CliConfig {
    fn default() -> Self {
        let thresholds = MarginThresholds::default();
        Self {
            currency: Currency::default(),
            curve_samples: cvp_analysis::curve::DEFAULT_SAMPLES,
            low_margin_threshold: thresholds.low,
            high_margin_threshold: thresholds.high,
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `CVP_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup(ENV_CURRENCY) {
            self.currency = parse_currency(&currency)?;
        }

        if let Some(samples) = lookup(ENV_CURVE_SAMPLES) {
            self.curve_samples = samples.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a count: {}", ENV_CURVE_SAMPLES, samples))
            })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.curve_samples < 2 {
            return Err(ConfigError::InvalidCurveSamples(self.curve_samples));
        }

        let (low, high) = (self.low_margin_threshold, self.high_margin_threshold);
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ConfigError::InvalidThresholds { low, high });
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(currency) = &cli.currency {
            self.currency = parse_currency(currency)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Margin thresholds as used by the interpretation composer
    pub fn thresholds(&self) -> MarginThresholds {
        MarginThresholds {
            low: self.low_margin_threshold,
            high: self.high_margin_threshold,
        }
    }

    /// Analyzer settings, optionally overriding the sample count
    pub fn analysis_config(&self, curve_samples: Option<usize>) -> AnalysisConfig {
        AnalysisConfig {
            curve_samples: curve_samples.unwrap_or(self.curve_samples),
            thresholds: self.thresholds(),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::FileError(format!("Failed to encode TOML: {}", e)))
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path given with `--config`
    pub config_file: Option<PathBuf>,
    /// Currency override
    pub currency: Option<String>,
    /// Force debug logging
    pub verbose: bool,
}

impl CliArgs {
    /// File to read and whether its absence is an error
    fn config_source(&self) -> (PathBuf, bool) {
        match &self.config_file {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (path, required) = cli.config_source();
    let mut config = if path.exists() {
        CliConfig::from_file(&path)?
    } else if required {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    } else {
        CliConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}
