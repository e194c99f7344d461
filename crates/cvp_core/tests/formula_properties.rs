//! Property tests for the closed-form CVP formulas.

use approx::assert_abs_diff_eq;
use cvp_core::math::formulas::{
    break_even_units, break_even_value, contribution_margin, contribution_margin_percent,
    cost_total, profit, revenue_total,
};
use cvp_core::types::BreakEven;
use proptest::prelude::*;

/// Strategy for (price, variable_cost) with `0 <= variable_cost <= price`.
fn unit_economics() -> impl Strategy<Value = (f64, f64)> {
    (0.01_f64..10_000.0, 0.0_f64..=1.0).prop_map(|(price, share)| (price, price * share))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_contribution_margin_identity((price, vc) in unit_economics()) {
        let cm = contribution_margin(price, vc);
        prop_assert_eq!(cm, price - vc);
        prop_assert_eq!(contribution_margin_percent(cm, price), 100.0 * (price - vc) / price);
    }

    #[test]
    fn test_profit_vanishes_at_break_even(
        (price, vc) in unit_economics(),
        fixed_cost in 0.0_f64..10_000_000.0,
    ) {
        let cm = contribution_margin(price, vc);
        match break_even_units(fixed_cost, cm) {
            BreakEven::Reachable(units) => {
                prop_assert!(cm > 0.0);
                let p = profit(units, cm, fixed_cost);
                prop_assert!(p.abs() <= 1e-9 * fixed_cost.max(1.0), "profit {} at break-even", p);
            }
            BreakEven::Unreachable => prop_assert!(cm <= 0.0),
        }
    }

    #[test]
    fn test_break_even_value_is_units_times_price(
        (price, vc) in unit_economics(),
        fixed_cost in 0.0_f64..10_000_000.0,
    ) {
        let units = break_even_units(fixed_cost, contribution_margin(price, vc));
        let value = break_even_value(units, price);
        prop_assert_eq!(value.value(), units.value().map(|u| u * price));
    }

    #[test]
    fn test_profit_is_revenue_minus_cost(
        (price, vc) in unit_economics(),
        fixed_cost in 0.0_f64..1_000_000.0,
        quantity in 0_u32..100_000,
    ) {
        let q = f64::from(quantity);
        let via_margin = profit(q, contribution_margin(price, vc), fixed_cost);
        let via_totals = revenue_total(q, price) - cost_total(q, vc, fixed_cost);
        assert_abs_diff_eq!(via_margin, via_totals, epsilon = 1e-6 * (q * price).max(fixed_cost).max(1.0));
    }
}

#[test]
fn test_scenario_exactly_at_break_even() {
    let cm = contribution_margin(50.0, 20.0);
    assert_eq!(cm, 30.0);
    assert_eq!(contribution_margin_percent(cm, 50.0), 60.0);

    let units = break_even_units(60_000.0, cm);
    assert_eq!(units, BreakEven::Reachable(2000.0));
    assert_eq!(break_even_value(units, 50.0), BreakEven::Reachable(100_000.0));

    assert_eq!(revenue_total(2000.0, 50.0), 100_000.0);
    assert_eq!(cost_total(2000.0, 20.0, 60_000.0), 100_000.0);
    assert_eq!(profit(2000.0, cm, 60_000.0), 0.0);
}

#[test]
fn test_scenario_furniture_factory() {
    let cm = contribution_margin(800.0, 320.0);
    assert_eq!(cm, 480.0);
    assert_eq!(break_even_units(240_000.0, cm), BreakEven::Reachable(500.0));
    assert_eq!(profit(600.0, cm, 240_000.0), 48_000.0);
}

#[test]
fn test_scenario_zero_margin_is_unreachable() {
    let cm = contribution_margin(10.0, 10.0);
    assert_eq!(cm, 0.0);
    assert_eq!(break_even_units(5_000.0, cm), BreakEven::Unreachable);
    assert_eq!(break_even_value(break_even_units(5_000.0, cm), 10.0), BreakEven::Unreachable);
}
