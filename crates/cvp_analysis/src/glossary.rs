//! Glossary of CVP terms.
//!
//! Short definitions of the accounting vocabulary used in reports and
//! interpretations.

use std::fmt;
use std::str::FromStr;

/// A defined CVP term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlossaryTerm {
    /// Cost-volume-profit analysis
    CvpAnalysis,
    /// Contribution margin
    ContributionMargin,
    /// Break-even point
    BreakEvenPoint,
    /// Fixed costs
    FixedCosts,
    /// Variable costs
    VariableCosts,
    /// Margin of safety
    SafetyMargin,
    /// Operating leverage
    OperatingLeverage,
}

impl GlossaryTerm {
    /// All terms in display order.
    pub const ALL: [GlossaryTerm; 7] = [
        GlossaryTerm::CvpAnalysis,
        GlossaryTerm::ContributionMargin,
        GlossaryTerm::BreakEvenPoint,
        GlossaryTerm::FixedCosts,
        GlossaryTerm::VariableCosts,
        GlossaryTerm::SafetyMargin,
        GlossaryTerm::OperatingLeverage,
    ];

    /// Kebab-case identifier accepted by `FromStr`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CvpAnalysis => "cvp-analysis",
            Self::ContributionMargin => "contribution-margin",
            Self::BreakEvenPoint => "break-even-point",
            Self::FixedCosts => "fixed-costs",
            Self::VariableCosts => "variable-costs",
            Self::SafetyMargin => "safety-margin",
            Self::OperatingLeverage => "operating-leverage",
        }
    }

    /// Get term name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CvpAnalysis => "CVP Analysis",
            Self::ContributionMargin => "Contribution Margin",
            Self::BreakEvenPoint => "Break-Even Point",
            Self::FixedCosts => "Fixed Costs",
            Self::VariableCosts => "Variable Costs",
            Self::SafetyMargin => "Safety Margin",
            Self::OperatingLeverage => "Operating Leverage",
        }
    }

    /// Get definition.
    pub fn definition(&self) -> &'static str {
        match self {
            Self::CvpAnalysis => {
                "Study of how costs, production or sales volume and profit relate. \
                 Supports decisions on pricing, product mix and cost structure."
            }
            Self::ContributionMargin => {
                "Selling price minus unit variable cost. The amount each unit sold \
                 contributes towards covering fixed costs and generating profit."
            }
            Self::BreakEvenPoint => {
                "Activity level where total revenue equals total cost, so profit is zero. \
                 Above it the business makes a profit."
            }
            Self::FixedCosts => {
                "Costs that do not vary with production volume, such as rent, \
                 administrative salaries and depreciation."
            }
            Self::VariableCosts => {
                "Costs that vary in proportion to production volume, such as raw \
                 materials and sales commissions."
            }
            Self::SafetyMargin => {
                "Difference between current sales volume and the break-even point. \
                 Shows how far sales can fall before the business makes a loss."
            }
            Self::OperatingLeverage => {
                "How strongly a change in sales affects operating profit. High leverage \
                 means small changes in sales cause large changes in profit."
            }
        }
    }
}

impl fmt::Display for GlossaryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlossaryTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|term| term.id() == wanted || term.name().to_lowercase() == wanted)
            .ok_or_else(|| {
                let ids: Vec<&str> = Self::ALL.iter().map(|t| t.id()).collect();
                format!("Unknown term: {}. Supported: {}", s, ids.join(", "))
            })
    }
}
