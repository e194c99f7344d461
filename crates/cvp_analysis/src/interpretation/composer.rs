//! Profit-position and margin-quality classification.
//!
//! Two independent branches, both of which may fire:
//! - profit position: below break-even (with the unit gap), above or at
//!   break-even (with the safety margin), or break-even unreachable
//! - margin quality: low below the low threshold, high above the high
//!   threshold, unclassified in between

use cvp_core::types::BreakEven;
use serde::{Deserialize, Serialize};

use crate::metrics::{ComputedMetrics, SafetyMargin};

/// Default percentage below which the contribution margin is low.
pub const DEFAULT_LOW_MARGIN_PERCENT: f64 = 30.0;

/// Default percentage above which the contribution margin is high.
pub const DEFAULT_HIGH_MARGIN_PERCENT: f64 = 60.0;

/// Contribution-margin percentage thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarginThresholds {
    /// Strictly below this is a low margin
    pub low: f64,
    /// Strictly above this is a high margin
    pub high: f64,
}

impl Default for MarginThresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_MARGIN_PERCENT,
            high: DEFAULT_HIGH_MARGIN_PERCENT,
        }
    }
}

impl MarginThresholds {
    /// Classifies a contribution-margin percentage.
    pub fn classify(&self, contribution_margin_percent: f64) -> Option<MarginQuality> {
        if contribution_margin_percent < self.low {
            Some(MarginQuality::Low)
        } else if contribution_margin_percent > self.high {
            Some(MarginQuality::High)
        } else {
            None
        }
    }
}

/// Where the sales quantity sits relative to break-even.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfitPosition {
    /// Quantity is short of break-even.
    BelowBreakEven {
        /// Units still needed to reach break-even
        gap_units: f64,
    },
    /// Quantity meets or exceeds break-even.
    AboveBreakEven {
        /// Units above break-even
        safety_margin_units: f64,
        /// Safety margin relative to break-even units, in percent
        safety_margin_percent: Option<f64>,
    },
    /// Price does not exceed variable cost; no volume breaks even.
    BreakEvenUnreachable,
}

/// Contribution-margin quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginQuality {
    /// Margin below the low threshold
    Low,
    /// Margin above the high threshold
    High,
}

/// Flat tag view of an interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationTag {
    /// Operating at a loss below break-even
    BelowBreakEven,
    /// Operating at or above break-even
    AboveBreakEven,
    /// Break-even cannot be reached
    BreakEvenUnreachable,
    /// Contribution margin is low
    LowMargin,
    /// Contribution margin is high
    HighMargin,
}

/// Classification result with the numbers a renderer interpolates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Quantity the interpretation refers to
    pub quantity: u64,
    /// Profit at that quantity (negative for a loss)
    pub profit: f64,
    /// Contribution margin percentage
    pub contribution_margin_percent: f64,
    /// Profit-position branch
    pub position: ProfitPosition,
    /// Margin-quality branch; `None` when unremarkable
    pub margin_quality: Option<MarginQuality>,
}

impl Interpretation {
    /// Tags that fired, position first.
    pub fn tags(&self) -> Vec<InterpretationTag> {
        let mut tags = vec![match self.position {
            ProfitPosition::BelowBreakEven { .. } => InterpretationTag::BelowBreakEven,
            ProfitPosition::AboveBreakEven { .. } => InterpretationTag::AboveBreakEven,
            ProfitPosition::BreakEvenUnreachable => InterpretationTag::BreakEvenUnreachable,
        }];
        match self.margin_quality {
            Some(MarginQuality::Low) => tags.push(InterpretationTag::LowMargin),
            Some(MarginQuality::High) => tags.push(InterpretationTag::HighMargin),
            None => {}
        }
        tags
    }
}

/// Stateless classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpretationComposer {
    thresholds: MarginThresholds,
}

impl InterpretationComposer {
    /// Composer using `thresholds` for margin quality.
    pub fn new(thresholds: MarginThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> MarginThresholds {
        self.thresholds
    }

    /// Classifies `metrics` computed at `quantity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvp_analysis::interpretation::{InterpretationComposer, InterpretationTag};
    /// use cvp_analysis::metrics::ComputedMetrics;
    /// use cvp_analysis::scenarios::AdjustedInputs;
    /// use cvp_core::types::{Currency, ScenarioInputs};
    ///
    /// let inputs = ScenarioInputs::new(800.0, 320.0, 240_000.0, 600, Currency::BRL).unwrap();
    /// let metrics = ComputedMetrics::compute(&AdjustedInputs::base(&inputs), 600);
    /// let interp = InterpretationComposer::default().compose(&metrics, 600);
    ///
    /// assert_eq!(interp.tags(), vec![InterpretationTag::AboveBreakEven]);
    /// ```
    pub fn compose(&self, metrics: &ComputedMetrics, quantity: u64) -> Interpretation {
        let position = match metrics.break_even_units {
            BreakEven::Unreachable => ProfitPosition::BreakEvenUnreachable,
            BreakEven::Reachable(units) if (quantity as f64) < units => {
                ProfitPosition::BelowBreakEven {
                    gap_units: units - quantity as f64,
                }
            }
            reachable => match SafetyMargin::compute(quantity, reachable) {
                Some(margin) => ProfitPosition::AboveBreakEven {
                    safety_margin_units: margin.units,
                    safety_margin_percent: margin.percent,
                },
                None => ProfitPosition::BreakEvenUnreachable,
            },
        };

        Interpretation {
            quantity,
            profit: metrics.profit,
            contribution_margin_percent: metrics.contribution_margin_percent,
            position,
            margin_quality: self.thresholds.classify(metrics.contribution_margin_percent),
        }
    }
}
