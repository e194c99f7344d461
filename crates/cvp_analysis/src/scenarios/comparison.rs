//! Side-by-side evaluation of every scenario variant.

use cvp_core::types::ScenarioInputs;
use serde::{Deserialize, Serialize};

use super::adjust::{adjust, AdjustedInputs, PercentChanges};
use super::presets::ScenarioVariant;
use crate::metrics::ComputedMetrics;

/// One variant's adjusted inputs and resulting metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// Variant evaluated
    pub variant: ScenarioVariant,
    /// Adjusted price and costs
    pub adjusted: AdjustedInputs,
    /// Adjustment relative to the base inputs
    pub changes: PercentChanges,
    /// Metrics at the compared quantity
    pub metrics: ComputedMetrics,
}

/// Evaluates all variants at `quantity`, in the order Base, Optimistic, Pessimistic.
pub fn compare_scenarios(inputs: &ScenarioInputs, quantity: u64) -> Vec<ScenarioComparison> {
    ScenarioVariant::ALL
        .iter()
        .map(|&variant| {
            let adjusted = adjust(inputs, variant);
            ScenarioComparison {
                variant,
                adjusted,
                changes: adjusted.percent_change_from(inputs),
                metrics: ComputedMetrics::compute(&adjusted, quantity),
            }
        })
        .collect()
}
