//! Predefined business cases.
//!
//! Ready-made input sets illustrating typical cost structures.

use cvp_core::types::{Currency, InputError, ScenarioInputs};
use std::fmt;
use std::str::FromStr;

/// Built-in example businesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredefinedCase {
    /// Starting values for manual configuration
    Default,
    /// Small furniture maker
    FurnitureFactory,
    /// Clothing retailer
    ClothingStore,
    /// Accounting services firm
    AccountingConsultancy,
    /// Restaurant
    Restaurant,
}

impl PredefinedCase {
    /// All cases in menu order.
    pub const ALL: [PredefinedCase; 5] = [
        PredefinedCase::Default,
        PredefinedCase::FurnitureFactory,
        PredefinedCase::ClothingStore,
        PredefinedCase::AccountingConsultancy,
        PredefinedCase::Restaurant,
    ];

    /// Kebab-case identifier accepted by `FromStr`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::FurnitureFactory => "furniture-factory",
            Self::ClothingStore => "clothing-store",
            Self::AccountingConsultancy => "accounting-consultancy",
            Self::Restaurant => "restaurant",
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Manual configuration",
            Self::FurnitureFactory => "Furniture Factory",
            Self::ClothingStore => "Clothing Store",
            Self::AccountingConsultancy => "Accounting Consultancy",
            Self::Restaurant => "Restaurant",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "Configure the values manually",
            Self::FurnitureFactory => {
                "A small furniture maker with high fixed costs and a healthy contribution margin."
            }
            Self::ClothingStore => {
                "A retailer with moderate fixed costs (rent, staff) and a thinner margin."
            }
            Self::AccountingConsultancy => {
                "A services firm with low variable cost and high fixed cost (salaries)."
            }
            Self::Restaurant => "A food business with considerable fixed costs and high volume.",
        }
    }

    /// Raw values as `(price, variable_cost, fixed_cost, quantity)`.
    pub fn values(&self) -> (f64, f64, f64, u64) {
        match self {
            Self::Default => (50.0, 20.0, 60_000.0, 2000),
            Self::FurnitureFactory => (800.0, 320.0, 240_000.0, 600),
            Self::ClothingStore => (120.0, 72.0, 96_000.0, 4000),
            Self::AccountingConsultancy => (300.0, 60.0, 180_000.0, 1200),
            Self::Restaurant => (45.0, 18.0, 126_000.0, 7500),
        }
    }

    /// Validated inputs for this case in `currency`.
    pub fn inputs(&self, currency: Currency) -> Result<ScenarioInputs, InputError> {
        let (price, variable_cost, fixed_cost, quantity) = self.values();
        ScenarioInputs::new(price, variable_cost, fixed_cost, quantity, currency)
    }
}

impl fmt::Display for PredefinedCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredefinedCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|case| case.id() == wanted)
            .ok_or_else(|| {
                let ids: Vec<&str> = Self::ALL.iter().map(|c| c.id()).collect();
                format!("Unknown case: {}. Supported: {}", s, ids.join(", "))
            })
    }
}
