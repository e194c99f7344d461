//! Revenue, cost and profit curves for charting.
//!
//! Provides:
//! - `CurveGenerator`: samples N evenly spaced points over `[0, 1.5 x reference]`
//! - `Curve` / `CurvePoint`: the ordered sample sequence with nearest-sample lookup
//! - `reference_quantity`: chooses the reference quantity from current, simulated and break-even volumes
//!
//! Revenue, cost and profit are affine in quantity, so every point is computed
//! directly from the closed-form formulas; there is no interpolation.

mod error;
pub mod generator;
pub mod reference;
pub mod series;

pub use error::CurveError;
pub use generator::{CurveGenerator, DEFAULT_SAMPLES, RANGE_MULTIPLIER};
pub use reference::{reference_quantity, simulation_upper_bound, FALLBACK_REFERENCE_QUANTITY};
pub use series::{BreakEvenMarker, Curve, CurvePoint};
