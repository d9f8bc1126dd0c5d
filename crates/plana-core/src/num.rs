//! Numeric bounds for shape dimensions
//!
//! Every shape is generic over its floating-point representation. `ShapeFloat`
//! collects the bounds the builders need into a single alias, so `f32` and
//! `f64` shapes share one implementation. π comes from `FloatConst` and is
//! therefore exact for each representation.

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// A trait alias for floating-point types usable as shape dimensions.
///
/// Implemented for every type satisfying the bounds, in practice `f32` and
/// `f64`.
pub trait ShapeFloat: Float + FloatConst + Debug + Display + Send + Sync + 'static {
    /// The constant `2` in this representation.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Widen to `f64` for diagnostics. Never fails for `f32`/`f64`.
    #[inline]
    fn to_diagnostic(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Whether this value is acceptable as a length: finite and strictly
    /// positive.
    #[inline]
    fn is_valid_dimension(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

impl<T> ShapeFloat for T where T: Float + FloatConst + Debug + Display + Send + Sync + 'static {}
