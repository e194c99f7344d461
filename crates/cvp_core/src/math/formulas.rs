//! Closed-form cost-volume-profit formulas.
//!
//! Every function here is pure, O(1) and total: identical inputs always give
//! bit-identical outputs, and no input produces a panic or a division fault.
//! They are generic over [`Float`] so the same code serves `f64` reporting and
//! `f32` plotting buffers.
//!
//! ## Formulas
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | contribution margin (unit) | `p - v` |
//! | contribution margin (%) | `100 * cm / p`, `0` when `p <= 0` |
//! | break-even (units) | `F / cm` when `cm > 0`, else unreachable |
//! | break-even (value) | `units * p` |
//! | revenue | `q * p` |
//! | cost | `F + q * v` |
//! | profit | `q * cm - F` |
//!
//! Revenue, cost and profit are affine in the quantity `q`.

use num_traits::Float;

use crate::types::BreakEven;

/// Contribution margin per unit: `price - variable_cost`.
///
/// Zero or negative results are legitimate and signal unviable unit economics.
///
/// # Examples
///
/// ```
/// use cvp_core::math::formulas::contribution_margin;
///
/// assert_eq!(contribution_margin(50.0, 20.0), 30.0);
/// assert_eq!(contribution_margin(10.0, 10.0), 0.0);
/// ```
#[inline]
pub fn contribution_margin<T: Float>(price: T, variable_cost: T) -> T {
    price - variable_cost
}

/// Contribution margin as a percentage of price.
///
/// Returns zero when `price <= 0`.
///
/// # Examples
///
/// ```
/// use cvp_core::math::formulas::contribution_margin_percent;
///
/// assert_eq!(contribution_margin_percent(30.0, 50.0), 60.0);
/// assert_eq!(contribution_margin_percent(30.0, 0.0), 0.0);
/// ```
#[inline]
pub fn contribution_margin_percent<T: Float>(contribution_margin: T, price: T) -> T {
    if price <= T::zero() {
        return T::zero();
    }
    hundred::<T>() * contribution_margin / price
}

/// Break-even quantity in units: `fixed_cost / contribution_margin`.
///
/// Returns [`BreakEven::Unreachable`] when `contribution_margin <= 0` or when
/// the quotient overflows the float range.
///
/// # Examples
///
/// ```
/// use cvp_core::math::formulas::break_even_units;
/// use cvp_core::types::BreakEven;
///
/// assert_eq!(break_even_units(60_000.0, 30.0), BreakEven::Reachable(2000.0));
/// assert_eq!(break_even_units(60_000.0, 0.0), BreakEven::Unreachable);
/// ```
#[inline]
pub fn break_even_units<T: Float>(fixed_cost: T, contribution_margin: T) -> BreakEven<T> {
    if contribution_margin <= T::zero() {
        return BreakEven::Unreachable;
    }
    let units = fixed_cost / contribution_margin;
    if !units.is_finite() {
        return BreakEven::Unreachable;
    }
    BreakEven::Reachable(units)
}

/// Break-even revenue: `break_even_units * price`.
///
/// Unreachable break-even stays unreachable.
///
/// # Examples
///
/// ```
/// use cvp_core::math::formulas::break_even_value;
/// use cvp_core::types::BreakEven;
///
/// assert_eq!(
///     break_even_value(BreakEven::Reachable(2000.0), 50.0),
///     BreakEven::Reachable(100_000.0)
/// );
/// ```
#[inline]
pub fn break_even_value<T: Float>(break_even_units: BreakEven<T>, price: T) -> BreakEven<T> {
    break_even_units.map(|units| units * price)
}

/// Operating profit at `quantity`: `quantity * contribution_margin - fixed_cost`.
#[inline]
pub fn profit<T: Float>(quantity: T, contribution_margin: T, fixed_cost: T) -> T {
    quantity * contribution_margin - fixed_cost
}

/// Total revenue at `quantity`: `quantity * price`.
#[inline]
pub fn revenue_total<T: Float>(quantity: T, price: T) -> T {
    quantity * price
}

/// Total cost at `quantity`: `fixed_cost + quantity * variable_cost`.
#[inline]
pub fn cost_total<T: Float>(quantity: T, variable_cost: T, fixed_cost: T) -> T {
    fixed_cost + quantity * variable_cost
}

#[inline]
fn hundred<T: Float>() -> T {
    T::from(100.0).unwrap_or_else(T::one)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Contribution margin
    // ========================================

    #[test]
    fn test_contribution_margin() {
        assert_eq!(contribution_margin(50.0, 20.0), 30.0);
        assert_eq!(contribution_margin(800.0, 320.0), 480.0);
        assert_eq!(contribution_margin(10.0, 12.0), -2.0);
    }

    #[test]
    fn test_contribution_margin_percent() {
        assert_relative_eq!(contribution_margin_percent(30.0, 50.0), 60.0);
        assert_relative_eq!(contribution_margin_percent(48.0, 120.0), 40.0);
        assert_eq!(contribution_margin_percent(10.0, 0.0), 0.0);
        assert_eq!(contribution_margin_percent(10.0, -1.0), 0.0);
    }

    // ========================================
    // Break-even
    // ========================================

    #[test]
    fn test_break_even_units_reachable() {
        assert_eq!(break_even_units(60_000.0, 30.0), BreakEven::Reachable(2000.0));
        assert_eq!(break_even_units(240_000.0, 480.0), BreakEven::Reachable(500.0));
        assert_eq!(break_even_units(0.0, 5.0), BreakEven::Reachable(0.0));
    }

    #[test]
    fn test_break_even_units_degenerate_margin() {
        assert_eq!(break_even_units(60_000.0, 0.0), BreakEven::Unreachable);
        assert_eq!(break_even_units(60_000.0, -3.0), BreakEven::Unreachable);
        // zero fixed cost with zero margin is still unreachable, not 0/0
        assert_eq!(break_even_units(0.0, 0.0), BreakEven::Unreachable);
    }

    #[test]
    fn test_break_even_units_overflow() {
        assert_eq!(break_even_units(1.0e308, 0.5), BreakEven::Unreachable);
        assert_eq!(break_even_units(f64::MAX, 1.0e-10), BreakEven::Unreachable);
        assert_eq!(break_even_units(1.0e308, 1.0), BreakEven::Reachable(1.0e308));
    }

    #[test]
    fn test_break_even_value() {
        assert_eq!(
            break_even_value(BreakEven::Reachable(500.0), 800.0),
            BreakEven::Reachable(400_000.0)
        );
        assert_eq!(
            break_even_value(BreakEven::Unreachable, 800.0),
            BreakEven::Unreachable
        );
    }

    // ========================================
    // Totals
    // ========================================

    #[test]
    fn test_totals_at_break_even_quantity() {
        let q = 2000.0;
        assert_eq!(revenue_total(q, 50.0), 100_000.0);
        assert_eq!(cost_total(q, 20.0, 60_000.0), 100_000.0);
        assert_eq!(profit(q, 30.0, 60_000.0), 0.0);
    }

    #[test]
    fn test_profit_furniture_factory() {
        assert_eq!(profit(600.0, 480.0, 240_000.0), 48_000.0);
    }

    #[test]
    fn test_zero_quantity() {
        assert_eq!(revenue_total(0.0, 50.0), 0.0);
        assert_eq!(cost_total(0.0, 20.0, 60_000.0), 60_000.0);
        assert_eq!(profit(0.0, 30.0, 60_000.0), -60_000.0);
    }

    #[test]
    fn test_deterministic() {
        let a: f64 = profit(1234.5, 17.25, 9_876.0);
        let b: f64 = profit(1234.5, 17.25, 9_876.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_with_f32() {
        assert_eq!(contribution_margin(5.0_f32, 2.0), 3.0);
        assert_eq!(break_even_units(30.0_f32, 3.0), BreakEven::Reachable(10.0));
    }
}
