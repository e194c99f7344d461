//! # cvp_core: Foundation for Cost-Volume-Profit Analysis
//!
//! ## Foundation Layer Role
//!
//! cvp_core is the bottom layer of the workspace, providing:
//! - Closed-form CVP formulas (`math::formulas`)
//! - The break-even sum type `BreakEven` (`types::break_even`)
//! - Validated scenario inputs `ScenarioInputs` (`types::inputs`)
//! - Currency types: `Currency` (`types::currency`)
//! - Error types: `InputError`, `CurrencyError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other cvp_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use cvp_core::math::formulas::{break_even_units, contribution_margin, profit};
//! use cvp_core::types::{BreakEven, Currency, ScenarioInputs};
//!
//! let inputs = ScenarioInputs::new(800.0, 320.0, 240_000.0, 600, Currency::BRL).unwrap();
//!
//! let cm = contribution_margin(inputs.price(), inputs.variable_cost());
//! assert_eq!(cm, 480.0);
//!
//! let be = break_even_units(inputs.fixed_cost(), cm);
//! assert_eq!(be, BreakEven::Reachable(500.0));
//!
//! assert_eq!(profit(600.0, cm, inputs.fixed_cost()), 48_000.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for inputs, currency and break-even results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
