//! Error types for structured error handling.
//!
//! This module provides:
//! - `InputError`: Violations of the scenario input invariants
//! - `CurrencyError`: Errors from currency parsing
//!
//! A non-positive contribution margin is deliberately absent here: it is a
//! regular result value (`BreakEven::Unreachable`), not a failure.

use thiserror::Error;

/// Scenario input validation errors.
///
/// Returned by [`ScenarioInputs::new`](super::ScenarioInputs::new) when a
/// value falls outside its documented range.
///
/// # Examples
/// ```
/// use cvp_core::types::InputError;
///
/// let err = InputError::VariableCostExceedsPrice { variable_cost: 12.0, price: 10.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Unit variable cost 12 exceeds unit price 10"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Unit price must be strictly positive.
    #[error("Unit price must be positive, got {0}")]
    NonPositivePrice(f64),

    /// Unit variable cost must not be negative.
    #[error("Unit variable cost must not be negative, got {0}")]
    NegativeVariableCost(f64),

    /// Unit variable cost must not exceed the unit price.
    #[error("Unit variable cost {variable_cost} exceeds unit price {price}")]
    VariableCostExceedsPrice {
        /// Offending unit variable cost
        variable_cost: f64,
        /// Unit price it was compared against
        price: f64,
    },

    /// Total fixed cost must not be negative.
    #[error("Total fixed cost must not be negative, got {0}")]
    NegativeFixedCost(f64),

    /// NaN or infinite value supplied for the named field.
    #[error("Non-finite value for {0}")]
    NonFiniteValue(&'static str),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use cvp_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code or symbol.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}
