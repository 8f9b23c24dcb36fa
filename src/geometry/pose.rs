use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rigid transform: rotate, then translate.
///
/// Maps a point `p` in a child frame to `rotation * p + translation` in the
/// parent frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Orientation of the child frame inside the parent frame.
    pub rotation: Quat,
    /// Origin of the child frame expressed in the parent frame.
    pub translation: Vec3,
}

impl Pose {
    /// The identity pose.
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Pose from explicit rotation and translation.
    #[must_use]
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Pure rotation about the frame origin.
    #[must_use]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self::new(rotation, Vec3::ZERO)
    }

    /// Pure translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(Quat::IDENTITY, translation)
    }

    /// `self ∘ child`: express `child` (given in this pose's frame) in the
    /// frame this pose lives in.
    #[must_use]
    pub fn compose(&self, child: &Self) -> Self {
        Self {
            rotation: (self.rotation * child.rotation).normalize(),
            translation: self.rotation * child.translation + self.translation,
        }
    }

    /// Inverse transform, so that `p.inverse().compose(&p)` is identity.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    /// Map a point from the local frame into the parent frame.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// Map a direction (no translation) into the parent frame.
    #[inline]
    #[must_use]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * vector
    }

    /// Local +Z (the outline normal) in the parent frame.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// 4x4 matrix form for renderers.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rotation.is_finite() && self.translation.is_finite()
    }

    /// Approximate equality of the transforms (not of the quaternions, which
    /// carry a sign ambiguity).
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z].iter().all(|p| {
            self.transform_point(*p)
                .abs_diff_eq(other.transform_point(*p), max_abs_diff)
        })
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
