//! Curve sampling.

use cvp_core::math::formulas::{cost_total, profit, revenue_total};
use tracing::debug;

use super::error::CurveError;
use super::series::{Curve, CurvePoint};
use crate::scenarios::AdjustedInputs;

/// Default number of samples per curve.
pub const DEFAULT_SAMPLES: usize = 100;

/// The plotted range extends to this multiple of the reference quantity.
pub const RANGE_MULTIPLIER: f64 = 1.5;

const MIN_SAMPLES: usize = 2;

/// Samples revenue, cost and profit on an evenly spaced quantity grid.
///
/// # Examples
///
/// ```
/// use cvp_analysis::curve::CurveGenerator;
/// use cvp_analysis::scenarios::AdjustedInputs;
/// use cvp_core::types::{Currency, ScenarioInputs};
///
/// let inputs = ScenarioInputs::new(800.0, 320.0, 240_000.0, 600, Currency::BRL).unwrap();
/// let curve = CurveGenerator::default()
///     .generate(&AdjustedInputs::base(&inputs), 750.0)
///     .unwrap();
///
/// assert_eq!(curve.len(), 100);
/// assert_eq!(curve.points()[0].quantity, 0.0);
/// assert_eq!(curve.max_quantity(), Some(1125.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveGenerator {
    samples: usize,
}

impl Default for CurveGenerator {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl CurveGenerator {
    /// Generator producing `samples` points per curve.
    ///
    /// # Errors
    ///
    /// `CurveError::InsufficientSamples` if `samples < 2`.
    pub fn new(samples: usize) -> Result<Self, CurveError> {
        if samples < MIN_SAMPLES {
            return Err(CurveError::InsufficientSamples {
                got: samples,
                need: MIN_SAMPLES,
            });
        }
        Ok(Self { samples })
    }

    /// Number of samples per curve.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Samples `[0, 1.5 * reference_quantity]` inclusive.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidRange` if `reference_quantity` is not positive and finite.
    pub fn generate(
        &self,
        adjusted: &AdjustedInputs,
        reference_quantity: f64,
    ) -> Result<Curve, CurveError> {
        if !reference_quantity.is_finite() || reference_quantity <= 0.0 {
            return Err(CurveError::InvalidRange(reference_quantity));
        }

        let upper = RANGE_MULTIPLIER * reference_quantity;
        let last = self.samples - 1;
        let denom = last as f64;
        let cm = adjusted.contribution_margin();

        let points = (0..self.samples)
            .map(|i| {
                // pin the endpoint so the last sample is exactly `upper`
                let q = if i == last {
                    upper
                } else {
                    upper * i as f64 / denom
                };
                CurvePoint {
                    quantity: q,
                    revenue: revenue_total(q, adjusted.price),
                    cost: cost_total(q, adjusted.variable_cost, adjusted.fixed_cost),
                    profit: profit(q, cm, adjusted.fixed_cost),
                }
            })
            .collect();

        debug!(samples = self.samples, upper, "Generated CVP curve");
        Ok(Curve::new(points, adjusted.price))
    }
}
