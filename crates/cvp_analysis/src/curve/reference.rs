//! Reference quantity selection for the plotted range.

use cvp_core::types::BreakEven;

use super::generator::RANGE_MULTIPLIER;

/// Break-even units are scaled by this factor when picking the reference.
const BREAK_EVEN_HEADROOM: f64 = 1.5;

/// Reference quantity used when every candidate volume is zero.
pub const FALLBACK_REFERENCE_QUANTITY: f64 = 100.0;

/// Lower bound of the simulation slider's upper limit.
const MIN_SIMULATION_UPPER_BOUND: u64 = 100;

/// Reference quantity for the curve: the largest of the current quantity,
/// the simulated quantity and 1.5 times break-even units.
///
/// An unreachable break-even is left out, so the range falls back to the
/// sales volumes. The same holds for a break-even so large that the plotted
/// range would overflow. If the result is zero, [`FALLBACK_REFERENCE_QUANTITY`] is used.
///
/// # Examples
///
/// ```
/// use cvp_analysis::curve::reference_quantity;
/// use cvp_core::types::BreakEven;
///
/// assert_eq!(reference_quantity(2000, 2000, BreakEven::Reachable(2000.0)), 3000.0);
/// assert_eq!(reference_quantity(600, 800, BreakEven::Unreachable), 800.0);
/// ```
pub fn reference_quantity(current: u64, simulated: u64, break_even: BreakEven<f64>) -> f64 {
    let volumes = current.max(simulated) as f64;
    let reference = match break_even {
        BreakEven::Reachable(units)
            if (units * BREAK_EVEN_HEADROOM * RANGE_MULTIPLIER).is_finite() =>
        {
            volumes.max(units * BREAK_EVEN_HEADROOM)
        }
        _ => volumes,
    };
    if reference > 0.0 {
        reference
    } else {
        FALLBACK_REFERENCE_QUANTITY
    }
}

/// Upper limit for quantity simulation: the largest of twice break-even
/// units (truncated), the current quantity and 100.
pub fn simulation_upper_bound(current: u64, break_even: BreakEven<f64>) -> u64 {
    let twice_break_even = break_even
        .value()
        .map(|units| (units * 2.0) as u64)
        .unwrap_or(0);
    twice_break_even.max(current).max(MIN_SIMULATION_UPPER_BOUND)
}
