//! View rotation: two Euler angles driven by pointer drags.
//!
//! The view transform is applied once, outermost, to every piece's world
//! pose. It never feeds back into local or world poses, so rotating the
//! view cannot change how pieces sit relative to each other.

/// Drag state machine.
pub mod controller;
/// Pointer input events.
pub mod event;

pub use controller::{DragState, ViewController};
pub use event::{PointerButton, PointerEvent};
use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::geometry::Pose;

/// Yaw and pitch in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Rotation about the horizontal screen axis.
    pub pitch: f32,
}

impl ViewState {
    /// View with the given angles in degrees.
    #[must_use]
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// `RotX(pitch) · RotY(yaw)`: yaw first in the object frame, then pitch.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch.to_radians())
            * Quat::from_rotation_y(self.yaw.to_radians())
    }

    /// The view as a rotation-only pose.
    #[must_use]
    pub fn transform(&self) -> Pose {
        Pose::from_rotation(self.rotation())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn zero_view_is_identity() {
        assert!(ViewState::default()
            .transform()
            .abs_diff_eq(&Pose::IDENTITY, 1e-6));
    }

    #[test]
    fn yaw_applies_before_pitch() {
        let view = ViewState::new(90.0, 90.0);
        // Yaw takes +X to -Z, then pitch takes -Z to +Y.
        let p = view.transform().transform_point(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::Y, 1e-5), "{p}");
    }
}
