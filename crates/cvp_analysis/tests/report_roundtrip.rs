//! Report export and parse-back.
//!
//! Parsing an exported report must recover each metric within the precision
//! it was written with: 2 decimals for money, 1 for percentages, 0 for units.

use cvp_analysis::metrics::ComputedMetrics;
use cvp_analysis::report::{ParsedReport, ReportField, ReportTable, ValueKind};
use cvp_analysis::scenarios::{adjust, ScenarioVariant};
use cvp_core::types::{Currency, ScenarioInputs};
use proptest::prelude::*;

fn tolerance(kind: ValueKind, value: f64) -> f64 {
    let half_step = 0.5 * 10f64.powi(-(kind.decimals() as i32));
    half_step + value.abs() * 1e-12
}

fn expected(
    field: ReportField,
    price: f64,
    vc: f64,
    fc: f64,
    q: u64,
    m: &ComputedMetrics,
) -> Option<f64> {
    match field {
        ReportField::Price => Some(price),
        ReportField::VariableCost => Some(vc),
        ReportField::FixedCost => Some(fc),
        ReportField::Quantity => Some(q as f64),
        ReportField::ContributionMarginUnit => Some(m.contribution_margin_unit),
        ReportField::ContributionMarginPercent => Some(m.contribution_margin_percent),
        ReportField::BreakEvenUnits => m.break_even_units.value(),
        ReportField::BreakEvenValue => m.break_even_value.value(),
        ReportField::Revenue => Some(m.revenue_total),
        ReportField::Cost => Some(m.cost_total),
        ReportField::Profit => Some(m.profit),
    }
}

fn assert_round_trip(inputs: &ScenarioInputs, variant: ScenarioVariant) {
    let adjusted = adjust(inputs, variant);
    let q = inputs.quantity();
    let metrics = ComputedMetrics::compute(&adjusted, q);
    let table = ReportTable::new(&adjusted, q, &metrics, inputs.currency());

    let csv = table.to_csv().unwrap();
    let parsed = ParsedReport::from_csv(&csv, inputs.currency()).unwrap();

    for field in ReportField::ALL {
        let want = expected(
            field,
            adjusted.price,
            adjusted.variable_cost,
            adjusted.fixed_cost,
            q,
            &metrics,
        );
        let got = parsed.value(field);
        match (want, got) {
            (Some(w), Some(g)) => assert!(
                (w - g).abs() <= tolerance(field.kind(), w),
                "{}: wrote {}, read {}",
                field.label(),
                w,
                g
            ),
            (None, None) => {}
            _ => panic!("{}: expected {:?}, got {:?}", field.label(), want, got),
        }
    }
}

#[test]
fn test_round_trip_concrete_cases() {
    for currency in Currency::ALL {
        let inputs = ScenarioInputs::new(50.0, 20.0, 60_000.0, 2000, currency).unwrap();
        for variant in ScenarioVariant::ALL {
            assert_round_trip(&inputs, variant);
        }
    }
}

#[test]
fn test_round_trip_unreachable() {
    let inputs = ScenarioInputs::new(10.0, 10.0, 5_000.0, 100, Currency::GBP).unwrap();
    assert_round_trip(&inputs, ScenarioVariant::Base);
}

#[test]
fn test_write_csv_to_file_buffer() {
    let inputs = ScenarioInputs::new(45.0, 18.0, 126_000.0, 7500, Currency::EUR).unwrap();
    let adjusted = adjust(&inputs, ScenarioVariant::Base);
    let metrics = ComputedMetrics::compute(&adjusted, 7500);
    let table = ReportTable::from_inputs(&inputs, &metrics);

    let mut buffer = std::io::Cursor::new(Vec::new());
    table.write_csv(&mut buffer).unwrap();
    let text = String::from_utf8(buffer.into_inner()).unwrap();

    assert_eq!(text, table.to_csv().unwrap());
    assert!(text.contains("Profit/Loss,€ 76500.00"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_report_round_trip(
        price in 0.01f64..10_000.0,
        vc_ratio in 0.0f64..=1.0,
        fc in 0.0f64..10_000_000.0,
        q in 0u64..1_000_000,
    ) {
        let inputs = ScenarioInputs::new(price, price * vc_ratio, fc, q, Currency::USD).unwrap();
        assert_round_trip(&inputs, ScenarioVariant::Base);
    }
}
