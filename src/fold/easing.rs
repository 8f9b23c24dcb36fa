//! Easing curves applied to fold playback.
//!
//! Geometry is always evaluated at a linear `t`; easing only shapes how
//! quickly an animation walks `t` from one value to another.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for fold animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Hermite smoothstep (slow start and end).
    SmoothStep,
    /// Cubic Bezier-style curve with configurable inner control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default curve: a gentle ease-out, so a fold settles into place.
    pub const DEFAULT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 5] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::SmoothStep,
        EasingFunction::DEFAULT,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.evaluate(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(EasingFunction::Linear.evaluate(-2.0), 0.0);
        assert_eq!(EasingFunction::SmoothStep.evaluate(7.0), 1.0);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.evaluate(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn smoothstep_is_symmetric() {
        let e = EasingFunction::SmoothStep;
        assert!((e.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((e.evaluate(0.2) + e.evaluate(0.8) - 1.0).abs() < 1e-6);
    }
}
