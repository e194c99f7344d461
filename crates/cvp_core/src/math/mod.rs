//! Mathematical building blocks for CVP analysis.
//!
//! - `formulas`: closed-form contribution margin, break-even and profit formulas

pub mod formulas;

/// Re-export of the numeric trait the formulas are generic over.
pub use num_traits::Float;
