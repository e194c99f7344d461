//! Qualitative interpretation of computed metrics.
//!
//! Classification and rendering are separate steps:
//! - `InterpretationComposer` turns metrics into a tagged `Interpretation`
//! - an `InterpretationRenderer` turns that into text (`PlainTextRenderer`) or JSON (`JsonRenderer`)

pub mod composer;
pub mod render;

pub use composer::{
    Interpretation, InterpretationComposer, InterpretationTag, MarginQuality, MarginThresholds,
    ProfitPosition,
};
pub use render::{InterpretationRenderer, JsonRenderer, PlainTextRenderer, RenderError};
