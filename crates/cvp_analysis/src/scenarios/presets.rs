//! Built-in scenario variants and their adjustment factors.
//!
//! The factor table is fixed configuration, not user-extensible:
//!
//! | Variant | price | variable cost | fixed cost |
//! |---------|-------|---------------|------------|
//! | Base | 1.00 | 1.00 | 1.00 |
//! | Optimistic | 1.10 | 0.95 | 0.98 |
//! | Pessimistic | 0.95 | 1.05 | 1.10 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multipliers applied elementwise to the base price, variable cost and fixed cost.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFactors {
    /// Unit price multiplier
    pub price: f64,
    /// Unit variable cost multiplier
    pub variable_cost: f64,
    /// Total fixed cost multiplier
    pub fixed_cost: f64,
}

impl ScenarioFactors {
    /// Identity factors: adjusted values equal the inputs bit-for-bit.
    pub const BASE: Self = Self {
        price: 1.0,
        variable_cost: 1.0,
        fixed_cost: 1.0,
    };

    /// Price +10%, variable cost -5%, fixed cost -2%.
    pub const OPTIMISTIC: Self = Self {
        price: 1.10,
        variable_cost: 0.95,
        fixed_cost: 0.98,
    };

    /// Price -5%, variable cost +5%, fixed cost +10%.
    pub const PESSIMISTIC: Self = Self {
        price: 0.95,
        variable_cost: 1.05,
        fixed_cost: 1.10,
    };
}

/// Named scenario variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioVariant {
    /// Inputs as entered
    #[default]
    Base,
    /// Favourable price and cost movements
    Optimistic,
    /// Adverse price and cost movements
    Pessimistic,
}

impl ScenarioVariant {
    /// All variants in comparison order.
    pub const ALL: [ScenarioVariant; 3] = [
        ScenarioVariant::Base,
        ScenarioVariant::Optimistic,
        ScenarioVariant::Pessimistic,
    ];

    /// Adjustment factors for this variant.
    pub fn factors(&self) -> ScenarioFactors {
        match self {
            Self::Base => ScenarioFactors::BASE,
            Self::Optimistic => ScenarioFactors::OPTIMISTIC,
            Self::Pessimistic => ScenarioFactors::PESSIMISTIC,
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Optimistic => "Optimistic",
            Self::Pessimistic => "Pessimistic",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Base => "Inputs used as entered",
            Self::Optimistic => "Price +10%, variable cost -5%, fixed cost -2%",
            Self::Pessimistic => "Price -5%, variable cost +5%, fixed cost +10%",
        }
    }
}

impl fmt::Display for ScenarioVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "optimistic" => Ok(Self::Optimistic),
            "pessimistic" => Ok(Self::Pessimistic),
            other => Err(format!(
                "Unknown scenario: {}. Supported: base, optimistic, pessimistic",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_factors_are_identity() {
        let f = ScenarioVariant::Base.factors();
        assert_eq!(f.price, 1.0);
        assert_eq!(f.variable_cost, 1.0);
        assert_eq!(f.fixed_cost, 1.0);
    }

    #[test]
    fn test_factor_table() {
        assert_eq!(ScenarioVariant::Optimistic.factors(), ScenarioFactors::OPTIMISTIC);
        assert_eq!(ScenarioVariant::Pessimistic.factors().fixed_cost, 1.10);
        assert_eq!(ScenarioVariant::Pessimistic.factors().price, 0.95);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("base".parse::<ScenarioVariant>().unwrap(), ScenarioVariant::Base);
        assert_eq!(
            "Optimistic".parse::<ScenarioVariant>().unwrap(),
            ScenarioVariant::Optimistic
        );
        assert_eq!(
            " PESSIMISTIC ".parse::<ScenarioVariant>().unwrap(),
            ScenarioVariant::Pessimistic
        );
        assert!("stress".parse::<ScenarioVariant>().is_err());
    }

    #[test]
    fn test_default_is_base() {
        assert_eq!(ScenarioVariant::default(), ScenarioVariant::Base);
    }

    #[test]
    fn test_names_unique() {
        use std::collections::HashSet;
        let names: HashSet<_> = ScenarioVariant::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(names.len(), 3);
    }
}
