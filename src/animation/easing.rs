//! Easing curves for camera transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for the transition progress curve.
///
/// The default is [`Linear`](Self::Linear): progress 0.5 lands on the exact
/// midpoint between start and target.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite curve: `c1·3t(1-t)² + c2·3(1-t)t² + t³`.
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Hermite preset with a natural ease-out feel.
    pub const EASE_OUT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    #[must_use]
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::SqrtOut => t.sqrt(),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}
