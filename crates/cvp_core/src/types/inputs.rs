//! Scenario input record.
//!
//! `ScenarioInputs` is the single immutable snapshot every calculation runs
//! against. The constructor is the validation boundary: once built, the
//! formulas assume the invariants below hold and never re-check them.
//!
//! # Invariants
//!
//! - all monetary values are finite
//! - `price > 0`
//! - `0 <= variable_cost <= price`
//! - `fixed_cost >= 0`
//! - `quantity` is a whole number of units (`u64`)

use super::currency::Currency;
use super::error::InputError;

/// Validated inputs for one CVP calculation.
///
/// # Examples
///
/// ```
/// use cvp_core::types::{Currency, InputError, ScenarioInputs};
///
/// let inputs = ScenarioInputs::new(50.0, 20.0, 60_000.0, 2000, Currency::BRL).unwrap();
/// assert_eq!(inputs.price(), 50.0);
/// assert_eq!(inputs.quantity(), 2000);
///
/// let err = ScenarioInputs::new(10.0, 12.0, 0.0, 1, Currency::BRL).unwrap_err();
/// assert!(matches!(err, InputError::VariableCostExceedsPrice { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawScenarioInputs")
)]
pub struct ScenarioInputs {
    price: f64,
    variable_cost: f64,
    fixed_cost: f64,
    quantity: u64,
    currency: Currency,
}

/// Unvalidated mirror used for deserialisation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScenarioInputs {
    price: f64,
    variable_cost: f64,
    fixed_cost: f64,
    quantity: u64,
    #[serde(default)]
    currency: Currency,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScenarioInputs> for ScenarioInputs {
    type Error = InputError;

    fn try_from(raw: RawScenarioInputs) -> Result<Self, Self::Error> {
        ScenarioInputs::new(
            raw.price,
            raw.variable_cost,
            raw.fixed_cost,
            raw.quantity,
            raw.currency,
        )
    }
}

impl ScenarioInputs {
    /// Builds a validated input record.
    ///
    /// # Errors
    ///
    /// - `InputError::NonFiniteValue` if any monetary value is NaN or infinite
    /// - `InputError::NonPositivePrice` if `price <= 0`
    /// - `InputError::NegativeVariableCost` if `variable_cost < 0`
    /// - `InputError::VariableCostExceedsPrice` if `variable_cost > price`
    /// - `InputError::NegativeFixedCost` if `fixed_cost < 0`
    pub fn new(
        price: f64,
        variable_cost: f64,
        fixed_cost: f64,
        quantity: u64,
        currency: Currency,
    ) -> Result<Self, InputError> {
        if !price.is_finite() {
            return Err(InputError::NonFiniteValue("price"));
        }
        if !variable_cost.is_finite() {
            return Err(InputError::NonFiniteValue("variable_cost"));
        }
        if !fixed_cost.is_finite() {
            return Err(InputError::NonFiniteValue("fixed_cost"));
        }
        if price <= 0.0 {
            return Err(InputError::NonPositivePrice(price));
        }
        if variable_cost < 0.0 {
            return Err(InputError::NegativeVariableCost(variable_cost));
        }
        if variable_cost > price {
            return Err(InputError::VariableCostExceedsPrice {
                variable_cost,
                price,
            });
        }
        if fixed_cost < 0.0 {
            return Err(InputError::NegativeFixedCost(fixed_cost));
        }

        Ok(Self {
            price,
            variable_cost,
            fixed_cost,
            quantity,
            currency,
        })
    }

    /// Unit selling price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Unit variable cost.
    #[inline]
    pub fn variable_cost(&self) -> f64 {
        self.variable_cost
    }

    /// Total fixed cost for the period.
    #[inline]
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// Units sold in the period.
    #[inline]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Reporting currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Copy of these inputs with a different quantity sold.
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..*self
        }
    }

    /// Copy of these inputs reported in a different currency.
    pub fn with_currency(&self, currency: Currency) -> Self {
        Self {
            currency,
            ..*self
        }
    }
}
