//! # cvp_analysis: Cost-Volume-Profit Analysis Pipeline
//!
//! Scenario adjustment, curve sampling, interpretation and report export
//! built on the formulas in `cvp_core`.
//!
//! This crate provides:
//! - Scenario variants (Base, Optimistic, Pessimistic) and predefined business cases
//! - Computed metrics, safety margin and operating leverage
//! - Revenue/cost/profit curves with nearest-sample lookup
//! - Tagged interpretation with pluggable text and JSON renderers
//! - Two-column CSV report export and parse-back
//! - Glossary of CVP terms
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            cvp_analysis                 │
//! ├─────────────────────────────────────────┤
//! │  scenarios/      - variants, cases,     │
//! │                    comparison           │
//! │  metrics         - ComputedMetrics      │
//! │  curve/          - CurveGenerator       │
//! │  interpretation/ - composer, renderers  │
//! │  report/         - CSV serializer       │
//! │  pipeline        - CvpAnalyzer          │
//! │  glossary        - GlossaryTerm         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │              cvp_core                   │
//! │  formulas, BreakEven, ScenarioInputs    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use cvp_analysis::interpretation::{InterpretationTag, PlainTextRenderer};
//! use cvp_analysis::pipeline::{AnalysisConfig, AnalysisRequest, CvpAnalyzer};
//! use cvp_analysis::scenarios::PredefinedCase;
//! use cvp_core::types::Currency;
//!
//! let inputs = PredefinedCase::FurnitureFactory.inputs(Currency::BRL).unwrap();
//! let analyzer = CvpAnalyzer::new(AnalysisConfig::default()).unwrap();
//! let analysis = analyzer
//!     .analyze(&AnalysisRequest::new(inputs).with_simulated_quantity(400))
//!     .unwrap();
//!
//! assert_eq!(analysis.interpretation.tags(), vec![InterpretationTag::BelowBreakEven]);
//! assert!(analysis.narrative(&PlainTextRenderer).unwrap().contains("sell 100 more units"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curve;
pub mod error;
pub mod glossary;
pub mod interpretation;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod scenarios;

pub use error::AnalysisError;
pub use glossary::GlossaryTerm;
pub use pipeline::{AnalysisConfig, AnalysisRequest, CvpAnalysis, CvpAnalyzer};
