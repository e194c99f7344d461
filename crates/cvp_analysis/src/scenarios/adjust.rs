//! Scenario adjuster.
//!
//! Multiplies the base price, variable cost and fixed cost by a variant's
//! factors. The adjusted values are deliberately not re-validated: a
//! pessimistic variant may push variable cost above price, which the formulas
//! report as an unreachable break-even.

use cvp_core::math::formulas::contribution_margin;
use cvp_core::types::ScenarioInputs;
use serde::{Deserialize, Serialize};

use super::presets::{ScenarioFactors, ScenarioVariant};

/// Price and costs after applying a scenario variant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustedInputs {
    /// Variant that produced these values
    pub variant: ScenarioVariant,
    /// Adjusted unit price
    pub price: f64,
    /// Adjusted unit variable cost
    pub variable_cost: f64,
    /// Adjusted total fixed cost
    pub fixed_cost: f64,
}

/// Relative change of each adjusted value against its base, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PercentChanges {
    /// Unit price change (%)
    pub price: f64,
    /// Unit variable cost change (%)
    pub variable_cost: f64,
    /// Fixed cost change (%)
    pub fixed_cost: f64,
}

/// Applies `variant` to `inputs`.
///
/// # Examples
///
/// ```
/// use cvp_analysis::scenarios::{adjust, ScenarioVariant};
/// use cvp_core::types::{Currency, ScenarioInputs};
///
/// let inputs = ScenarioInputs::new(100.0, 40.0, 1000.0, 10, Currency::BRL).unwrap();
/// let adjusted = adjust(&inputs, ScenarioVariant::Pessimistic);
/// assert_eq!(adjusted.price, 95.0);
/// assert_eq!(adjusted.fixed_cost, 1100.0);
/// ```
pub fn adjust(inputs: &ScenarioInputs, variant: ScenarioVariant) -> AdjustedInputs {
    AdjustedInputs::with_factors(inputs, variant, variant.factors())
}

impl AdjustedInputs {
    /// Inputs under the base variant.
    pub fn base(inputs: &ScenarioInputs) -> Self {
        adjust(inputs, ScenarioVariant::Base)
    }

    fn with_factors(
        inputs: &ScenarioInputs,
        variant: ScenarioVariant,
        factors: ScenarioFactors,
    ) -> Self {
        Self {
            variant,
            price: inputs.price() * factors.price,
            variable_cost: inputs.variable_cost() * factors.variable_cost,
            fixed_cost: inputs.fixed_cost() * factors.fixed_cost,
        }
    }

    /// Contribution margin per unit at the adjusted values.
    #[inline]
    pub fn contribution_margin(&self) -> f64 {
        contribution_margin(self.price, self.variable_cost)
    }

    /// Relative change of each adjusted value against `base`, in percent.
    ///
    /// A zero base value reports no change.
    pub fn percent_change_from(&self, base: &ScenarioInputs) -> PercentChanges {
        PercentChanges {
            price: percent_change(base.price(), self.price),
            variable_cost: percent_change(base.variable_cost(), self.variable_cost),
            fixed_cost: percent_change(base.fixed_cost(), self.fixed_cost),
        }
    }
}

fn percent_change(base: f64, adjusted: f64) -> f64 {
    if base == 0.0 {
        return 0.0;
    }
    (adjusted / base - 1.0) * 100.0
}
