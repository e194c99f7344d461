//! Sampled curve data.

use cvp_core::math::formulas::revenue_total;
use cvp_core::types::BreakEven;
use serde::{Deserialize, Serialize};

/// One sample of the revenue, cost and profit lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Quantity sold
    pub quantity: f64,
    /// Total revenue at `quantity`
    pub revenue: f64,
    /// Total cost at `quantity`
    pub cost: f64,
    /// Operating profit at `quantity`
    pub profit: f64,
}

/// Break-even location on the chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenMarker {
    /// Break-even quantity
    pub quantity: f64,
    /// Revenue (equal to total cost) at break-even
    pub revenue: f64,
}

/// Ordered samples in strictly ascending quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<CurvePoint>,
    price: f64,
}

impl Curve {
    pub(crate) fn new(points: Vec<CurvePoint>, price: f64) -> Self {
        Self { points, price }
    }

    /// All samples, ascending in quantity.
    #[inline]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest sampled quantity.
    pub fn max_quantity(&self) -> Option<f64> {
        self.points.last().map(|p| p.quantity)
    }

    /// Index of the sample whose quantity is closest to `target`.
    ///
    /// Minimises `|quantity - target|`; on a tie the lower index wins.
    /// Returns `None` only for an empty curve.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvp_analysis::curve::CurveGenerator;
    /// use cvp_analysis::scenarios::AdjustedInputs;
    /// use cvp_core::types::{Currency, ScenarioInputs};
    ///
    /// let inputs = ScenarioInputs::new(50.0, 20.0, 60_000.0, 2000, Currency::BRL).unwrap();
    /// let curve = CurveGenerator::new(11)
    ///     .unwrap()
    ///     .generate(&AdjustedInputs::base(&inputs), 2000.0)
    ///     .unwrap();
    ///
    /// // samples every 300 units from 0 to 3000
    /// assert_eq!(curve.nearest_index(1240.0), Some(4));
    /// assert_eq!(curve.nearest_index(-50.0), Some(0));
    /// assert_eq!(curve.nearest_index(1e9), Some(10));
    /// ```
    pub fn nearest_index(&self, target: f64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let upper = self.points.partition_point(|p| p.quantity < target);
        if upper == 0 {
            return Some(0);
        }
        if upper == self.points.len() {
            return Some(upper - 1);
        }
        let below = target - self.points[upper - 1].quantity;
        let above = self.points[upper].quantity - target;
        if below <= above {
            Some(upper - 1)
        } else {
            Some(upper)
        }
    }

    /// Sample whose quantity is closest to `target`.
    pub fn nearest(&self, target: f64) -> Option<&CurvePoint> {
        self.nearest_index(target).map(|i| &self.points[i])
    }

    /// Index of the sample nearest to break-even; `None` when unreachable.
    pub fn break_even_index(&self, break_even: BreakEven<f64>) -> Option<usize> {
        break_even.value().and_then(|units| self.nearest_index(units))
    }

    /// Exact break-even location (not snapped to a sample); `None` when unreachable.
    pub fn break_even_marker(&self, break_even: BreakEven<f64>) -> Option<BreakEvenMarker> {
        break_even.value().map(|units| BreakEvenMarker {
            quantity: units,
            revenue: revenue_total(units, self.price),
        })
    }
}
