//! Scenario input flags shared by the analysis commands

use clap::Args;
use cvp_analysis::scenarios::PredefinedCase;
use cvp_core::types::{Currency, ScenarioInputs};
use std::str::FromStr;
use tracing::debug;

use crate::{CliError, Result};

/// Business inputs: a predefined case, explicit values, or a case with overrides
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Predefined business case (see `cvp cases`)
    #[arg(long)]
    pub case: Option<String>,

    /// Unit selling price
    #[arg(long)]
    pub price: Option<f64>,

    /// Unit variable cost
    #[arg(long)]
    pub variable_cost: Option<f64>,

    /// Total fixed cost
    #[arg(long)]
    pub fixed_cost: Option<f64>,

    /// Quantity sold
    #[arg(long)]
    pub quantity: Option<u64>,
}

impl InputArgs {
    /// Validated inputs; explicit flags override the case's values
    pub fn resolve(&self, currency: Currency) -> Result<ScenarioInputs> {
        let case = self
            .case
            .as_deref()
            .map(PredefinedCase::from_str)
            .transpose()
            .map_err(CliError::InvalidArgument)?;
        let defaults = case.map(|c| c.values());

        let price = self.price.or(defaults.map(|d| d.0));
        let variable_cost = self.variable_cost.or(defaults.map(|d| d.1));
        let fixed_cost = self.fixed_cost.or(defaults.map(|d| d.2));
        let quantity = self.quantity.or(defaults.map(|d| d.3));

        let (Some(price), Some(variable_cost), Some(fixed_cost), Some(quantity)) =
            (price, variable_cost, fixed_cost, quantity)
        else {
            return Err(CliError::InvalidArgument(
                "Provide --case or all of --price, --variable-cost, --fixed-cost, --quantity"
                    .to_string(),
            ));
        };

        debug!(
            case = ?case,
            price,
            variable_cost,
            fixed_cost,
            quantity,
            "Resolved scenario inputs"
        );
        Ok(ScenarioInputs::new(
            price,
            variable_cost,
            fixed_cost,
            quantity,
            currency,
        )?)
    }
}
