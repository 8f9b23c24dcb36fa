//! Fold interpolation: the single parameter `t` and how each piece's local
//! pose follows it.
//!
//! `t = 0` is the assembled solid, `t = 1` the flat net. Every piece of one
//! shape instance shares the same `t`; there is no per-piece fold state.

/// Eased playback of the fold parameter over time.
pub mod animator;
/// Easing curves for fold playback.
pub mod easing;
/// Per-piece motion variants and the `local_pose` interpolator.
pub mod motion;

pub use animator::FoldAnimator;
pub use easing::EasingFunction;
pub use motion::{
    local_pose, Hinge, HingeAxis, PieceMotion, RadialUnroll, SectorUnroll,
};
use serde::{Deserialize, Serialize};

/// External slider conventions the fold value may arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldScale {
    /// Already a fraction in `[0, 1]`.
    #[default]
    Fraction,
    /// Integer-style percentage in `[0, 100]`.
    Percent,
    /// Box hinge convention: slider degrees in `[0, 90]`, where the hinge
    /// angle shown is `90 - value`.
    HingeDegrees,
}

impl FoldScale {
    /// Slider value corresponding to the flat net.
    #[must_use]
    pub fn max(self) -> f32 {
        match self {
            Self::Fraction => 1.0,
            Self::Percent => 100.0,
            Self::HingeDegrees => 90.0,
        }
    }
}

/// Normalised fold state `t`, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct FoldParameter(f32);

impl FoldParameter {
    /// Fully assembled solid.
    pub const FOLDED: Self = Self(0.0);
    /// Fully flat net.
    pub const FLAT: Self = Self(1.0);

    /// Clamp `t` into `[0, 1]`. NaN is treated as folded.
    #[must_use]
    pub fn new(t: f32) -> Self {
        if t.is_nan() {
            Self::FOLDED
        } else {
            Self(t.clamp(0.0, 1.0))
        }
    }

    /// Normalise a slider value given in `scale`.
    #[must_use]
    pub fn from_scaled(value: f32, scale: FoldScale) -> Self {
        Self::new(value / scale.max())
    }

    /// The fraction `t`.
    #[inline]
    #[must_use]
    pub fn t(self) -> f32 {
        self.0
    }

    /// `1 - t`: how much of the fold is still applied.
    #[inline]
    #[must_use]
    pub fn remaining(self) -> f32 {
        1.0 - self.0
    }

    /// Express this fold state on a slider scale.
    #[must_use]
    pub fn to_scaled(self, scale: FoldScale) -> f32 {
        self.0 * scale.max()
    }

    /// Dihedral offset from flat of every box hinge, in degrees.
    #[must_use]
    pub fn hinge_angle_degrees(self) -> f32 {
        90.0 * self.remaining()
    }
}

impl From<f32> for FoldParameter {
    fn from(t: f32) -> Self {
        Self::new(t)
    }
}

impl From<FoldParameter> for f32 {
    fn from(fold: FoldParameter) -> Self {
        fold.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(FoldParameter::new(-0.5).t(), 0.0);
        assert_eq!(FoldParameter::new(1.5).t(), 1.0);
        assert_eq!(FoldParameter::new(f32::NAN).t(), 0.0);
    }

    #[test]
    fn slider_conventions_normalise() {
        let pct = FoldParameter::from_scaled(50.0, FoldScale::Percent);
        let deg = FoldParameter::from_scaled(45.0, FoldScale::HingeDegrees);
        assert!((pct.t() - 0.5).abs() < 1e-6);
        assert!((deg.t() - 0.5).abs() < 1e-6);
        assert_eq!(
            FoldParameter::from_scaled(100.0, FoldScale::Percent),
            FoldParameter::FLAT
        );
    }

    #[test]
    fn hinge_angle_matches_box_slider() {
        // Slider at 30 of 90 shows a 60 degree hinge.
        let fold = FoldParameter::from_scaled(30.0, FoldScale::HingeDegrees);
        assert!((fold.hinge_angle_degrees() - 60.0).abs() < 1e-4);
        assert!((fold.to_scaled(FoldScale::HingeDegrees) - 30.0).abs() < 1e-4);
    }

    #[test]
    fn deserialising_clamps() {
        let fold: FoldParameter = serde_json::from_str("3.0").unwrap();
        assert_eq!(fold, FoldParameter::FLAT);
    }
}
