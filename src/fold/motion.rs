use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::FoldParameter;
use crate::geometry::Pose;
use crate::shape::Piece;

/// Local axis, in the parent frame, about which a piece swings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HingeAxis {
    /// Parent-local X (horizontal edges).
    X,
    /// Parent-local Y (vertical edges and the solid's long axis).
    Y,
    /// Parent-local Z (sector sweep in the net plane).
    Z,
}

impl HingeAxis {
    /// Unit vector along the axis.
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Right-handed rotation of `angle` radians about the axis.
    #[must_use]
    pub fn rotation(self, angle: f32) -> Quat {
        match self {
            Self::X => Quat::from_rotation_x(angle),
            Self::Y => Quat::from_rotation_y(angle),
            Self::Z => Quat::from_rotation_z(angle),
        }
    }
}

/// A piece swinging about a straight edge of its parent.
///
/// Flat, the piece's centre sits at `pivot + offset`; the swing angle is
/// `folded_angle * (1 - t)`, so it closes at `t = 0` and lies coplanar with
/// the parent at `t = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hinge {
    /// A point on the hinge line, in the parent frame.
    pub pivot: Vec3,
    /// Direction of the hinge line.
    pub axis: HingeAxis,
    /// Piece origin relative to `pivot` when flat.
    pub offset: Vec3,
    /// Signed swing in radians at `t = 0`.
    pub folded_angle: f32,
}

impl Hinge {
    fn pose(&self, fold: FoldParameter) -> Pose {
        let rotation = self.axis.rotation(self.folded_angle * fold.remaining());
        Pose::new(rotation, self.pivot + rotation * self.offset)
    }
}

/// One rectangular slice of a cylinder's lateral surface.
///
/// In the assembly frame the slice is turned about the long axis by
/// `offset * step_angle * (1 - t)`, pushed out by `radius * (1 - t)` and
/// slid sideways by `offset * segment_width * t`, so the ring opens into a
/// flat strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialUnroll {
    /// Angular width of one slice in radians (`2π / N`).
    pub step_angle: f32,
    /// Cylinder radius.
    pub radius: f32,
    /// Width of one slice in the net.
    pub segment_width: f32,
    /// Signed index relative to the reference slice.
    pub offset: i32,
    /// Offset of the parent slice; `None` for the root slice.
    pub anchor: Option<i32>,
}

impl RadialUnroll {
    fn assembly_pose(&self, offset: i32, fold: FoldParameter) -> Pose {
        let k = offset as f32;
        let rotation = Quat::from_rotation_y(k * self.step_angle * fold.remaining());
        let slide = Vec3::X * (k * self.segment_width * fold.t());
        let outward = Vec3::Z * (self.radius * fold.remaining());
        Pose::new(rotation, slide + rotation * outward)
    }

    fn pose(&self, fold: FoldParameter) -> Pose {
        relative_to_anchor(self.anchor, fold, self.offset, |o, f| {
            self.assembly_pose(o, f)
        })
    }
}

/// One triangular slice of a cone's lateral surface, hanging from the apex.
///
/// In the assembly frame: turned about the cone axis by
/// `offset * axial_step * (1 - t)`, tilted out by `tilt * (1 - t)`, and
/// swept around the apex in the net plane by `offset * sweep_step * t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorUnroll {
    /// Apex position in the assembly frame.
    pub apex: Vec3,
    /// Angle between neighbouring slices around the axis (`2π / N`).
    pub axial_step: f32,
    /// Tilt of each slice away from the axis when assembled.
    pub tilt: f32,
    /// Angle between neighbouring slices in the flat sector.
    pub sweep_step: f32,
    /// Signed index relative to the reference slice.
    pub offset: i32,
    /// Offset of the parent slice; `None` for the root slice.
    pub anchor: Option<i32>,
}

impl SectorUnroll {
    fn assembly_pose(&self, offset: i32, fold: FoldParameter) -> Pose {
        let k = offset as f32;
        let rotation = Quat::from_rotation_y(k * self.axial_step * fold.remaining())
            * Quat::from_rotation_x(-self.tilt * fold.remaining())
            * Quat::from_rotation_z(k * self.sweep_step * fold.t());
        Pose::new(rotation, self.apex)
    }

    fn pose(&self, fold: FoldParameter) -> Pose {
        relative_to_anchor(self.anchor, fold, self.offset, |o, f| {
            self.assembly_pose(o, f)
        })
    }
}

/// Turn an assembly-frame pose into one relative to the parent slice.
fn relative_to_anchor(
    anchor: Option<i32>,
    fold: FoldParameter,
    offset: i32,
    assembly: impl Fn(i32, FoldParameter) -> Pose,
) -> Pose {
    let own = assembly(offset, fold);
    match anchor {
        Some(parent) => assembly(parent, fold).inverse().compose(&own),
        None => own,
    }
}

/// How a piece moves with the fold parameter, one variant per family of
/// pose math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PieceMotion {
    /// Constant pose regardless of `t` (the box root).
    Fixed(Pose),
    /// Dihedral swing about a parent edge (box faces, caps).
    Hinge(Hinge),
    /// Cylinder slice unrolling from ring to strip.
    RadialUnroll(RadialUnroll),
    /// Cone slice unrolling from cone to sector.
    SectorUnroll(SectorUnroll),
}

impl PieceMotion {
    /// Pose relative to the parent frame at `fold`.
    #[must_use]
    pub fn local_pose(&self, fold: FoldParameter) -> Pose {
        match self {
            Self::Fixed(pose) => *pose,
            Self::Hinge(hinge) => hinge.pose(fold),
            Self::RadialUnroll(slice) => slice.pose(fold),
            Self::SectorUnroll(slice) => slice.pose(fold),
        }
    }
}

/// Pose of `piece` relative to its parent at `fold`.
///
/// Pure: the same inputs always give the same pose.
#[must_use]
pub fn local_pose(piece: &Piece, fold: FoldParameter) -> Pose {
    piece.motion.local_pose(fold)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use super::*;

    #[test]
    fn hinge_closes_at_zero_and_opens_flat() {
        let hinge = Hinge {
            pivot: Vec3::new(0.0, 50.0, 0.0),
            axis: HingeAxis::X,
            offset: Vec3::new(0.0, 30.0, 0.0),
            folded_angle: FRAC_PI_2,
        };
        let folded = hinge.pose(FoldParameter::FOLDED);
        let flat = hinge.pose(FoldParameter::FLAT);
        assert!(folded
            .translation
            .abs_diff_eq(Vec3::new(0.0, 50.0, 30.0), 1e-4));
        assert!(flat.translation.abs_diff_eq(Vec3::new(0.0, 80.0, 0.0), 1e-4));
        assert!(flat.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn radial_slice_moves_from_ring_to_row() {
        let slice = RadialUnroll {
            step_angle: TAU / 20.0,
            radius: 40.0,
            segment_width: 13.0,
            offset: 5,
            anchor: None,
        };
        let folded = slice.pose(FoldParameter::FOLDED);
        let flat = slice.pose(FoldParameter::FLAT);
        // Quarter turn around the ring: outward +Z becomes +X.
        assert!(folded
            .translation
            .abs_diff_eq(Vec3::new(40.0, 0.0, 0.0), 1e-3));
        assert!(flat.translation.abs_diff_eq(Vec3::new(65.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn anchored_slice_composes_back_to_assembly_pose() {
        let parent = RadialUnroll {
            step_angle: PI / 6.0,
            radius: 12.0,
            segment_width: 6.0,
            offset: 1,
            anchor: Some(0),
        };
        let child = RadialUnroll {
            offset: 2,
            anchor: Some(1),
            ..parent
        };
        let fold = FoldParameter::new(0.37);
        let root = parent.assembly_pose(0, fold);
        let world = root.compose(&parent.pose(fold)).compose(&child.pose(fold));
        assert!(world.abs_diff_eq(&child.assembly_pose(2, fold), 1e-4));
    }

    #[test]
    fn sector_slice_keeps_apex_fixed() {
        let slice = SectorUnroll {
            apex: Vec3::new(0.0, 70.0, 0.0),
            axial_step: TAU / 12.0,
            tilt: 0.3,
            sweep_step: 0.17,
            offset: -3,
            anchor: None,
        };
        for t in [0.0, 0.25, 0.8, 1.0] {
            let pose = slice.pose(FoldParameter::new(t));
            assert!(pose.transform_point(Vec3::ZERO).abs_diff_eq(slice.apex, 1e-5));
        }
    }

    #[test]
    fn motion_is_deterministic() {
        let motion = PieceMotion::SectorUnroll(SectorUnroll {
            apex: Vec3::ZERO,
            axial_step: 0.5,
            tilt: 0.2,
            sweep_step: 0.1,
            offset: 4,
            anchor: Some(3),
        });
        let fold = FoldParameter::new(0.61);
        assert_eq!(motion.local_pose(fold), motion.local_pose(fold));
    }
}
