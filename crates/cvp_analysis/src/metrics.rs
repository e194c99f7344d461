//! Computed CVP metrics.
//!
//! `ComputedMetrics` is recomputed from scratch on every request; there is no
//! caching because each field is a single closed-form expression.

use cvp_core::math::formulas::{
    break_even_units, break_even_value, contribution_margin_percent, cost_total, profit,
    revenue_total,
};
use cvp_core::types::BreakEven;
use serde::{Deserialize, Serialize};

use crate::scenarios::AdjustedInputs;

/// Scalar metrics for one adjusted scenario at one quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedMetrics {
    /// Contribution margin per unit
    pub contribution_margin_unit: f64,
    /// Contribution margin as a percentage of price
    pub contribution_margin_percent: f64,
    /// Break-even quantity in units
    pub break_even_units: BreakEven<f64>,
    /// Break-even revenue
    pub break_even_value: BreakEven<f64>,
    /// Total revenue at the quantity
    pub revenue_total: f64,
    /// Total cost at the quantity
    pub cost_total: f64,
    /// Operating profit (negative for a loss)
    pub profit: f64,
}

impl ComputedMetrics {
    /// Evaluates every formula for `adjusted` at `quantity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvp_analysis::metrics::ComputedMetrics;
    /// use cvp_analysis::scenarios::AdjustedInputs;
    /// use cvp_core::types::{BreakEven, Currency, ScenarioInputs};
    ///
    /// let inputs = ScenarioInputs::new(50.0, 20.0, 60_000.0, 2000, Currency::BRL).unwrap();
    /// let m = ComputedMetrics::compute(&AdjustedInputs::base(&inputs), inputs.quantity());
    ///
    /// assert_eq!(m.contribution_margin_unit, 30.0);
    /// assert_eq!(m.break_even_units, BreakEven::Reachable(2000.0));
    /// assert_eq!(m.profit, 0.0);
    /// ```
    pub fn compute(adjusted: &AdjustedInputs, quantity: u64) -> Self {
        let q = quantity as f64;
        let cm = adjusted.contribution_margin();
        let be_units = break_even_units(adjusted.fixed_cost, cm);

        Self {
            contribution_margin_unit: cm,
            contribution_margin_percent: contribution_margin_percent(cm, adjusted.price),
            break_even_units: be_units,
            break_even_value: break_even_value(be_units, adjusted.price),
            revenue_total: revenue_total(q, adjusted.price),
            cost_total: cost_total(q, adjusted.variable_cost, adjusted.fixed_cost),
            profit: profit(q, cm, adjusted.fixed_cost),
        }
    }

    /// Total contribution (revenue minus variable costs) at `quantity`.
    pub fn total_contribution(&self, quantity: u64) -> f64 {
        quantity as f64 * self.contribution_margin_unit
    }
}

/// Distance between a sales quantity and break-even.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetyMargin {
    /// `quantity - break_even_units`; negative below break-even
    pub units: f64,
    /// `units / break_even_units * 100`; `None` when break-even is zero units
    pub percent: Option<f64>,
}

impl SafetyMargin {
    /// Safety margin of `quantity` against `break_even`.
    ///
    /// Returns `None` when break-even is unreachable.
    pub fn compute(quantity: u64, break_even: BreakEven<f64>) -> Option<Self> {
        let be = break_even.value()?;
        let units = quantity as f64 - be;
        let percent = if be > 0.0 {
            Some(units / be * 100.0)
        } else {
            None
        };
        Some(Self { units, percent })
    }
}

/// Supplementary metrics reported for a positive quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdditionalMetrics {
    /// Safety margin; `None` when break-even is unreachable
    pub safety_margin: Option<SafetyMargin>,
    /// Degree of operating leverage `contribution / profit`; `None` unless profit > 0
    pub operating_leverage: Option<f64>,
}

impl AdditionalMetrics {
    /// Additional metrics at `quantity`; `None` for a zero quantity.
    pub fn compute(metrics: &ComputedMetrics, quantity: u64) -> Option<Self> {
        if quantity == 0 {
            return None;
        }
        let operating_leverage = if metrics.profit > 0.0 {
            Some(metrics.total_contribution(quantity) / metrics.profit)
        } else {
            None
        };
        Some(Self {
            safety_margin: SafetyMargin::compute(quantity, metrics.break_even_units),
            operating_leverage,
        })
    }
}

/// Composition of the unit price: variable cost plus contribution margin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarginBreakdown {
    /// Unit price
    pub price: f64,
    /// Unit variable cost
    pub variable_cost: f64,
    /// Contribution margin per unit
    pub contribution_margin: f64,
}

impl From<&AdjustedInputs> for MarginBreakdown {
    fn from(adjusted: &AdjustedInputs) -> Self {
        Self {
            price: adjusted.price,
            variable_cost: adjusted.variable_cost,
            contribution_margin: adjusted.contribution_margin(),
        }
    }
}

/// Simulated minus current totals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationDelta {
    /// Revenue difference
    pub revenue: f64,
    /// Cost difference
    pub cost: f64,
    /// Profit difference
    pub profit: f64,
}

impl SimulationDelta {
    /// Difference between two metric sets; `None` when the quantities coincide.
    pub fn between(
        current: &ComputedMetrics,
        current_quantity: u64,
        simulated: &ComputedMetrics,
        simulated_quantity: u64,
    ) -> Option<Self> {
        if current_quantity == simulated_quantity {
            return None;
        }
        Some(Self {
            revenue: simulated.revenue_total - current.revenue_total,
            cost: simulated.cost_total - current.cost_total,
            profit: simulated.profit - current.profit,
        })
    }
}
