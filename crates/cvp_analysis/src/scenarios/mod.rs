//! Scenario adjustment and comparison.
//!
//! Provides:
//! - `ScenarioVariant` / `ScenarioFactors`: the fixed Base/Optimistic/Pessimistic table
//! - `adjust`: elementwise application of a variant to base inputs
//! - `compare_scenarios`: all variants evaluated side by side
//! - `PredefinedCase`: built-in example businesses

pub mod adjust;
pub mod cases;
pub mod comparison;
pub mod presets;

pub use adjust::{adjust, AdjustedInputs, PercentChanges};
pub use cases::PredefinedCase;
pub use comparison::{compare_scenarios, ScenarioComparison};
pub use presets::{ScenarioFactors, ScenarioVariant};
