//! cvp - Command Line Cost-Volume-Profit Analysis
//!
//! This is the operational entry point for the CVP analysis library.
//!
//! # Commands
//!
//! - `cvp analyze` - Full analysis: metrics, simulation, interpretation
//! - `cvp compare` - Base, Optimistic and Pessimistic scenarios side by side
//! - `cvp curve` - Revenue, cost and profit curve data
//! - `cvp export --output <file>` - Two-column CSV report
//! - `cvp cases` - Predefined business cases
//! - `cvp glossary [term]` - Definitions of CVP terms
//! - `cvp check` - Validate and print the resolved configuration
//!
//! # Architecture
//!
//! As the service layer, this crate validates inputs at the boundary and
//! orchestrates `cvp_analysis` to produce tables, JSON or CSV.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::inputs::InputArgs;
use config::{CliArgs, CliConfig};

/// Cost-Volume-Profit analysis CLI
#[derive(Parser)]
#[command(name = "cvp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: cvp.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Currency code or symbol (BRL, USD, EUR, GBP)
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis for one scenario
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Scenario variant (base, optimistic, pessimistic)
        #[arg(short, long, default_value = "base")]
        scenario: String,

        /// Quantity to simulate instead of the quantity sold (up to the simulation limit)
        #[arg(long)]
        simulate: Option<u64>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Compare all scenario variants
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Emit revenue, cost and profit curve data
    Curve {
        #[command(flatten)]
        input: InputArgs,

        /// Scenario variant (base, optimistic, pessimistic)
        #[arg(short, long, default_value = "base")]
        scenario: String,

        /// Number of samples
        #[arg(long)]
        samples: Option<usize>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Write the CSV report to a file
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Scenario variant (base, optimistic, pessimistic)
        #[arg(short, long, default_value = "base")]
        scenario: String,

        /// Quantity to simulate instead of the quantity sold (up to the simulation limit)
        #[arg(long)]
        simulate: Option<u64>,

        /// Output file
        #[arg(short, long, default_value = commands::export::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// List predefined business cases
    Cases {
        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show definitions of CVP terms
    Glossary {
        /// Term to show (e.g. safety-margin); all terms when omitted
        term: Option<String>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check configuration
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::build_config(&CliArgs {
        config_file: cli.config.clone(),
        currency: cli.currency.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Analyze {
            input,
            scenario,
            simulate,
            format,
        } => commands::analyze::run(&input, &scenario, simulate, format.as_deref(), &config),
        Commands::Compare { input, format } => {
            commands::compare::run(&input, format.as_deref(), &config)
        }
        Commands::Curve {
            input,
            scenario,
            samples,
            format,
        } => commands::curve::run(&input, &scenario, samples, format.as_deref(), &config),
        Commands::Export {
            input,
            scenario,
            simulate,
            output,
        } => commands::export::run(&input, &scenario, simulate, &output, &config),
        Commands::Cases { format } => commands::cases::run(format.as_deref(), &config),
        Commands::Glossary { term, format } => {
            commands::glossary::run(term.as_deref(), format.as_deref(), &config)
        }
        Commands::Check => commands::check::run(&config),
    }
}
