//! End-to-end CVP analysis.
//!
//! One call to [`CvpAnalyzer::analyze`] runs every stage on an immutable
//! request snapshot:
//!
//! ```text
//! ScenarioInputs ─► adjust ─► ComputedMetrics ─┬─► Curve
//!                                              ├─► Interpretation
//!                                              └─► ReportTable
//! ```
//!
//! The analyzer holds only configuration, so it can be reused across requests.

use cvp_core::types::{BreakEven, Currency, ScenarioInputs};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::curve::{
    reference_quantity, simulation_upper_bound, BreakEvenMarker, Curve, CurveGenerator,
    DEFAULT_SAMPLES,
};
use crate::error::{AnalysisError, Result};
use crate::interpretation::{
    Interpretation, InterpretationComposer, InterpretationRenderer, MarginThresholds,
};
use crate::metrics::{AdditionalMetrics, ComputedMetrics, MarginBreakdown, SimulationDelta};
use crate::report::ReportTable;
use crate::scenarios::{
    adjust, compare_scenarios, AdjustedInputs, PercentChanges, ScenarioComparison,
    ScenarioVariant,
};

/// Analyzer settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Samples per curve (at least 2)
    pub curve_samples: usize,
    /// Margin-quality thresholds
    pub thresholds: MarginThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            curve_samples: DEFAULT_SAMPLES,
            thresholds: MarginThresholds::default(),
        }
    }
}

/// One analysis request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisRequest {
    /// Validated base inputs
    pub inputs: ScenarioInputs,
    /// Scenario variant to apply
    pub variant: ScenarioVariant,
    /// Quantity to simulate instead of the quantity sold
    pub simulated_quantity: Option<u64>,
}

impl AnalysisRequest {
    /// Base-variant request without simulation.
    pub fn new(inputs: ScenarioInputs) -> Self {
        Self {
            inputs,
            variant: ScenarioVariant::Base,
            simulated_quantity: None,
        }
    }

    /// Sets the scenario variant.
    pub fn with_variant(mut self, variant: ScenarioVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the simulated quantity.
    pub fn with_simulated_quantity(mut self, quantity: u64) -> Self {
        self.simulated_quantity = Some(quantity);
        self
    }

    /// Simulated quantity, falling back to the quantity sold.
    pub fn effective_quantity(&self) -> u64 {
        self.simulated_quantity.unwrap_or_else(|| self.inputs.quantity())
    }
}

/// Everything derived from one request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CvpAnalysis {
    /// Currency of monetary values
    pub currency: Currency,
    /// Price and costs after the scenario adjustment
    pub adjusted: AdjustedInputs,
    /// Adjustment relative to the base inputs
    pub changes: PercentChanges,
    /// Quantity sold
    pub quantity: u64,
    /// Metrics at the quantity sold
    pub metrics: ComputedMetrics,
    /// Simulated quantity (equal to `quantity` without simulation)
    pub simulated_quantity: u64,
    /// Metrics at the simulated quantity
    pub simulated_metrics: ComputedMetrics,
    /// Simulated minus current totals; `None` when the quantities coincide
    pub delta: Option<SimulationDelta>,
    /// Safety margin and operating leverage at the simulated quantity
    pub additional: Option<AdditionalMetrics>,
    /// Unit price composition
    pub breakdown: MarginBreakdown,
    /// Sampled revenue, cost and profit lines
    pub curve: Curve,
    /// Exact break-even point on the chart
    pub break_even_marker: Option<BreakEvenMarker>,
    /// Classification at the simulated quantity
    pub interpretation: Interpretation,
    /// Export rows at the simulated quantity
    pub report: ReportTable,
    /// Upper limit for the quantity simulation range
    pub simulation_upper_bound: u64,
}

impl CvpAnalysis {
    /// Renders the interpretation with `renderer`.
    pub fn narrative<R: InterpretationRenderer + ?Sized>(&self, renderer: &R) -> Result<String> {
        Ok(renderer.render(&self.interpretation, self.currency)?)
    }

    /// Report as CSV text.
    pub fn report_csv(&self) -> Result<String> {
        Ok(self.report.to_csv()?)
    }
}

/// Runs the analysis pipeline.
///
/// # Examples
///
/// ```
/// use cvp_analysis::pipeline::{AnalysisConfig, AnalysisRequest, CvpAnalyzer};
/// use cvp_core::types::{BreakEven, Currency, ScenarioInputs};
///
/// let analyzer = CvpAnalyzer::new(AnalysisConfig::default()).unwrap();
/// let inputs = ScenarioInputs::new(800.0, 320.0, 240_000.0, 600, Currency::BRL).unwrap();
/// let analysis = analyzer.analyze(&AnalysisRequest::new(inputs)).unwrap();
///
/// assert_eq!(analysis.metrics.break_even_units, BreakEven::Reachable(500.0));
/// assert_eq!(analysis.metrics.profit, 48_000.0);
/// assert_eq!(analysis.curve.len(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CvpAnalyzer {
    config: AnalysisConfig,
    generator: CurveGenerator,
    composer: InterpretationComposer,
}

impl Default for CvpAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            generator: CurveGenerator::default(),
            composer: InterpretationComposer::default(),
        }
    }
}

impl CvpAnalyzer {
    /// Analyzer for `config`.
    ///
    /// # Errors
    ///
    /// - `AnalysisError::Curve` if `curve_samples < 2`
    /// - `AnalysisError::InvalidThresholds` if the thresholds are not finite or `low > high`
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let MarginThresholds { low, high } = config.thresholds;
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(AnalysisError::InvalidThresholds { low, high });
        }

        Ok(Self {
            config,
            generator: CurveGenerator::new(config.curve_samples)?,
            composer: InterpretationComposer::new(config.thresholds),
        })
    }

    /// Settings in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Runs every stage for `request`.
    ///
    /// # Errors
    ///
    /// `AnalysisError::SimulationOutOfRange` if the simulated quantity exceeds
    /// [`simulation_upper_bound`], and `AnalysisError::Curve` if the plotted
    /// range is invalid.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<CvpAnalysis> {
        let inputs = &request.inputs;
        let quantity = inputs.quantity();
        let simulated_quantity = request.effective_quantity();

        let adjusted = adjust(inputs, request.variant);
        let changes = adjusted.percent_change_from(inputs);
        debug!(
            variant = %request.variant,
            price = adjusted.price,
            variable_cost = adjusted.variable_cost,
            fixed_cost = adjusted.fixed_cost,
            "Adjusted inputs"
        );

        let metrics = ComputedMetrics::compute(&adjusted, quantity);
        let simulated_metrics = ComputedMetrics::compute(&adjusted, simulated_quantity);
        let break_even = metrics.break_even_units;
        if break_even == BreakEven::Unreachable {
            warn!(
                contribution_margin = metrics.contribution_margin_unit,
                "Break-even is unreachable at this contribution margin"
            );
        }

        let upper_bound = simulation_upper_bound(quantity, break_even);
        if simulated_quantity > upper_bound {
            return Err(AnalysisError::SimulationOutOfRange {
                quantity: simulated_quantity,
                max: upper_bound,
            });
        }

        let reference = reference_quantity(quantity, simulated_quantity, break_even);
        let curve = self.generator.generate(&adjusted, reference)?;
        let break_even_marker = curve.break_even_marker(break_even);

        let interpretation = self.composer.compose(&simulated_metrics, simulated_quantity);
        let report = ReportTable::new(
            &adjusted,
            simulated_quantity,
            &simulated_metrics,
            inputs.currency(),
        );

        debug!(
            quantity,
            simulated_quantity,
            reference,
            tags = ?interpretation.tags(),
            "Analysis complete"
        );

        Ok(CvpAnalysis {
            currency: inputs.currency(),
            adjusted,
            changes,
            quantity,
            metrics,
            simulated_quantity,
            simulated_metrics,
            delta: SimulationDelta::between(
                &metrics,
                quantity,
                &simulated_metrics,
                simulated_quantity,
            ),
            additional: AdditionalMetrics::compute(&simulated_metrics, simulated_quantity),
            breakdown: MarginBreakdown::from(&adjusted),
            curve,
            break_even_marker,
            interpretation,
            report,
            simulation_upper_bound: upper_bound,
        })
    }

    /// Every scenario variant at the quantity sold.
    pub fn compare(&self, inputs: &ScenarioInputs) -> Vec<ScenarioComparison> {
        debug!(quantity = inputs.quantity(), "Comparing scenarios");
        compare_scenarios(inputs, inputs.quantity())
    }
}
