//! Break-even result type.
//!
//! Break-even is only finite when each unit contributes something towards
//! fixed costs. Rather than encoding the degenerate case as a floating-point
//! infinity, it is a separate variant so that every consumer has to handle it.

use num_traits::Float;

/// Break-even quantity (or revenue) for a scenario.
///
/// # Variants
/// - `Reachable(x)`: finite break-even level `x`
/// - `Unreachable`: contribution margin is zero or negative, no finite level exists
///
/// # Examples
///
/// ```
/// use cvp_core::types::BreakEven;
///
/// let be = BreakEven::Reachable(2000.0_f64);
/// assert_eq!(be.value(), Some(2000.0));
/// assert_eq!(be.map(|units| units * 50.0), BreakEven::Reachable(100_000.0));
///
/// let never: BreakEven<f64> = BreakEven::Unreachable;
/// assert!(!never.is_reachable());
/// assert_eq!(never.map(|units| units * 50.0), BreakEven::Unreachable);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BreakEven<T: Float> {
    /// Finite break-even level.
    Reachable(T),
    /// No finite break-even exists.
    Unreachable,
}

impl<T: Float> BreakEven<T> {
    /// Returns `true` for a finite break-even.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, BreakEven::Reachable(_))
    }

    /// Finite level, or `None` when unreachable.
    #[inline]
    pub fn value(&self) -> Option<T> {
        match self {
            BreakEven::Reachable(v) => Some(*v),
            BreakEven::Unreachable => None,
        }
    }

    /// Applies `f` to a reachable level; `Unreachable` propagates unchanged.
    #[inline]
    pub fn map<F>(self, f: F) -> BreakEven<T>
    where
        F: FnOnce(T) -> T,
    {
        match self {
            BreakEven::Reachable(v) => BreakEven::Reachable(f(v)),
            BreakEven::Unreachable => BreakEven::Unreachable,
        }
    }

    /// Returns `true` when the break-even level lies strictly above `quantity`.
    ///
    /// An unreachable break-even exceeds every quantity.
    #[inline]
    pub fn exceeds(&self, quantity: T) -> bool {
        match self {
            BreakEven::Reachable(v) => quantity < *v,
            BreakEven::Unreachable => true,
        }
    }
}
