//! Core input, currency and result types.
//!
//! This module provides:
//! - `currency`: Supported reporting currencies with display symbols
//! - `inputs`: Validated, immutable `ScenarioInputs` record
//! - `break_even`: `BreakEven` sum type separating reachable from unreachable break-even
//! - `error`: Structured error types for input and currency validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Currency`] from `currency`
//! - [`ScenarioInputs`] from `inputs`
//! - [`BreakEven`] from `break_even`
//! - [`InputError`], [`CurrencyError`] from `error`

pub mod break_even;
pub mod currency;
pub mod error;
pub mod inputs;

// Re-export commonly used types at module level
pub use break_even::BreakEven;
pub use currency::Currency;
pub use error::{CurrencyError, InputError};
pub use inputs::ScenarioInputs;
