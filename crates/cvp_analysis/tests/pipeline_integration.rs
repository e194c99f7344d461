//! Integration tests for the analysis pipeline.
//!
//! # Test Categories
//!
//! 1. **Concrete scenarios**: known inputs with hand-computed results
//! 2. **Scenario variants**: Base identity and comparison ordering
//! 3. **Curve properties**: shape and exact linearity for arbitrary inputs
//! 4. **Predefined cases**: every built-in case runs end to end

use approx::assert_relative_eq;
use cvp_analysis::curve::{reference_quantity, CurveGenerator};
use cvp_analysis::interpretation::{
    InterpretationRenderer, InterpretationTag, JsonRenderer, PlainTextRenderer, ProfitPosition,
};
use cvp_analysis::pipeline::{AnalysisConfig, AnalysisRequest, CvpAnalyzer};
use cvp_analysis::scenarios::{adjust, AdjustedInputs, PredefinedCase, ScenarioVariant};
use cvp_core::math::formulas::{cost_total, profit, revenue_total};
use cvp_core::types::{BreakEven, Currency, ScenarioInputs};
use proptest::prelude::*;

fn inputs(price: f64, vc: f64, fc: f64, q: u64) -> ScenarioInputs {
    ScenarioInputs::new(price, vc, fc, q, Currency::BRL).unwrap()
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_scenario_exactly_at_break_even() {
    let analysis = CvpAnalyzer::default()
        .analyze(&AnalysisRequest::new(inputs(50.0, 20.0, 60_000.0, 2000)))
        .unwrap();
    let m = analysis.metrics;

    assert_eq!(m.contribution_margin_unit, 30.0);
    assert_eq!(m.contribution_margin_percent, 60.0);
    assert_eq!(m.break_even_units, BreakEven::Reachable(2000.0));
    assert_eq!(m.break_even_value, BreakEven::Reachable(100_000.0));
    assert_eq!(m.revenue_total, 100_000.0);
    assert_eq!(m.cost_total, 100_000.0);
    assert_eq!(m.profit, 0.0);

    match analysis.interpretation.position {
        ProfitPosition::AboveBreakEven {
            safety_margin_units,
            safety_margin_percent,
        } => {
            assert_eq!(safety_margin_units, 0.0);
            assert_eq!(safety_margin_percent, Some(0.0));
        }
        other => panic!("Expected AboveBreakEven, got {:?}", other),
    }
}

#[test]
fn test_scenario_furniture_factory() {
    let analysis = CvpAnalyzer::default()
        .analyze(&AnalysisRequest::new(inputs(800.0, 320.0, 240_000.0, 600)))
        .unwrap();

    assert_eq!(analysis.metrics.contribution_margin_unit, 480.0);
    assert_eq!(analysis.metrics.break_even_units, BreakEven::Reachable(500.0));
    assert_eq!(analysis.metrics.profit, 48_000.0);

    let additional = analysis.additional.unwrap();
    let margin = additional.safety_margin.unwrap();
    assert_eq!(margin.units, 100.0);
    assert_relative_eq!(margin.percent.unwrap(), 20.0);
    assert_relative_eq!(additional.operating_leverage.unwrap(), 6.0);
}

#[test]
fn test_scenario_degenerate_margin() {
    let analysis = CvpAnalyzer::default()
        .analyze(&AnalysisRequest::new(inputs(10.0, 10.0, 5_000.0, 300)))
        .unwrap();

    assert_eq!(analysis.metrics.contribution_margin_unit, 0.0);
    assert_eq!(analysis.metrics.break_even_units, BreakEven::Unreachable);
    assert_eq!(analysis.metrics.break_even_value, BreakEven::Unreachable);
    assert_eq!(
        analysis.interpretation.tags(),
        vec![InterpretationTag::BreakEvenUnreachable, InterpretationTag::LowMargin]
    );
    assert_eq!(analysis.report.rows()[6].value, "unreachable");

    let text = analysis.narrative(&PlainTextRenderer).unwrap();
    assert!(!text.contains("more units"));
}

#[test]
fn test_both_interpretation_branches_fire() {
    // Accounting consultancy: 80% margin, 1200 sold vs 750 break-even
    let inputs = PredefinedCase::AccountingConsultancy
        .inputs(Currency::USD)
        .unwrap();
    let analysis = CvpAnalyzer::default()
        .analyze(&AnalysisRequest::new(inputs))
        .unwrap();

    assert_eq!(
        analysis.interpretation.tags(),
        vec![InterpretationTag::AboveBreakEven, InterpretationTag::HighMargin]
    );
    let json = analysis.narrative(&JsonRenderer).unwrap();
    assert!(json.contains("\"high_margin\""));
}

#[test]
fn test_custom_thresholds() {
    let config = AnalysisConfig {
        thresholds: cvp_analysis::interpretation::MarginThresholds {
            low: 70.0,
            high: 90.0,
        },
        ..AnalysisConfig::default()
    };
    let analysis = CvpAnalyzer::new(config)
        .unwrap()
        .analyze(&AnalysisRequest::new(inputs(50.0, 20.0, 60_000.0, 2000)))
        .unwrap();
    assert!(analysis
        .interpretation
        .tags()
        .contains(&InterpretationTag::LowMargin));
}

#[test]
fn test_analysis_serializes_to_json() {
    let analysis = CvpAnalyzer::default()
        .analyze(
            &AnalysisRequest::new(inputs(800.0, 320.0, 240_000.0, 600))
                .with_simulated_quantity(700),
        )
        .unwrap();
    let value = serde_json::to_value(&analysis).unwrap();

    assert_eq!(value["currency"], "BRL");
    assert_eq!(value["metrics"]["break_even_units"]["reachable"], 500.0);
    assert_eq!(value["simulated_quantity"], 700);
    assert_eq!(value["delta"]["profit"], 48_000.0);
}

// ============================================================================
// Scenario Variants
// ============================================================================

#[test]
fn test_pessimistic_variant_can_become_unreachable() {
    let tight = inputs(10.0, 9.8, 100.0, 50);
    let analysis = CvpAnalyzer::default()
        .analyze(&AnalysisRequest::new(tight).with_variant(ScenarioVariant::Pessimistic))
        .unwrap();
    assert_eq!(analysis.metrics.break_even_units, BreakEven::Unreachable);
    assert!(analysis.metrics.contribution_margin_unit < 0.0);
}

#[test]
fn test_comparison_ranks_variants() {
    for case in PredefinedCase::ALL {
        let inputs = case.inputs(Currency::BRL).unwrap();
        let rows = CvpAnalyzer::default().compare(&inputs);
        assert!(rows[1].metrics.profit > rows[0].metrics.profit, "{}", case);
        assert!(rows[2].metrics.profit < rows[0].metrics.profit, "{}", case);
    }
}

// ============================================================================
// Predefined Cases
// ============================================================================

#[test]
fn test_every_case_runs_end_to_end() {
    let analyzer = CvpAnalyzer::default();
    for case in PredefinedCase::ALL {
        for currency in Currency::ALL {
            let inputs = case.inputs(currency).unwrap();
            let analysis = analyzer.analyze(&AnalysisRequest::new(inputs)).unwrap();
            assert_eq!(analysis.curve.len(), 100);
            assert_eq!(analysis.report.rows().len(), 11);
            assert!(PlainTextRenderer
                .render(&analysis.interpretation, currency)
                .is_ok());
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn arb_inputs() -> impl Strategy<Value = ScenarioInputs> {
    (1.0f64..1_000.0, 0.0f64..=1.0, 0.0f64..1_000_000.0, 0u64..100_000).prop_map(
        |(price, vc_ratio, fc, q)| {
            ScenarioInputs::new(price, price * vc_ratio, fc, q, Currency::BRL).unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_base_variant_is_identity(inputs in arb_inputs()) {
        let a = adjust(&inputs, ScenarioVariant::Base);
        prop_assert_eq!(a.price.to_bits(), inputs.price().to_bits());
        prop_assert_eq!(a.variable_cost.to_bits(), inputs.variable_cost().to_bits());
        prop_assert_eq!(a.fixed_cost.to_bits(), inputs.fixed_cost().to_bits());
    }

    #[test]
    fn prop_curve_shape(inputs in arb_inputs(), samples in 2usize..300, simulated in 0u64..100_000) {
        let adjusted = AdjustedInputs::base(&inputs);
        let be = cvp_core::math::formulas::break_even_units(
            adjusted.fixed_cost,
            adjusted.contribution_margin(),
        );
        let reference = reference_quantity(inputs.quantity(), simulated, be);
        let curve = CurveGenerator::new(samples).unwrap().generate(&adjusted, reference).unwrap();
        let pts = curve.points();

        prop_assert_eq!(pts.len(), samples);
        prop_assert_eq!(pts[0].quantity, 0.0);
        prop_assert_eq!(pts[samples - 1].quantity, 1.5 * reference);
        prop_assert!(pts.windows(2).all(|w| w[0].quantity < w[1].quantity));
    }

    #[test]
    fn prop_curve_matches_formulas(inputs in arb_inputs(), samples in 2usize..200) {
        let adjusted = AdjustedInputs::base(&inputs);
        let curve = CurveGenerator::new(samples)
            .unwrap()
            .generate(&adjusted, 1_000.0)
            .unwrap();
        let cm = adjusted.contribution_margin();

        for p in curve.points() {
            prop_assert_eq!(p.profit, profit(p.quantity, cm, adjusted.fixed_cost));
            prop_assert_eq!(p.revenue, revenue_total(p.quantity, adjusted.price));
            prop_assert_eq!(
                p.cost,
                cost_total(p.quantity, adjusted.variable_cost, adjusted.fixed_cost)
            );
        }
    }

    #[test]
    fn prop_nearest_index_minimises_distance(inputs in arb_inputs(), target in -100.0f64..2_000.0) {
        let curve = CurveGenerator::new(57)
            .unwrap()
            .generate(&AdjustedInputs::base(&inputs), 1_000.0)
            .unwrap();
        let idx = curve.nearest_index(target).unwrap();
        let best = (target - curve.points()[idx].quantity).abs();
        prop_assert!(curve.points().iter().all(|p| (target - p.quantity).abs() >= best));
    }
}
