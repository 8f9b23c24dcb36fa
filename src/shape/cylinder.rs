//! Cylinder net: a ring of rectangular slices that unrolls into a strip,
//! with two circular caps hinged off the middle slice.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use super::piece::{PieceId, PieceKind, PieceRole, PieceSpec, PieceStyle};
use super::{lateral_parent, ShapeClass};
use crate::error::NetError;
use crate::fold::{Hinge, HingeAxis, PieceMotion, RadialUnroll};
use crate::geometry::Outline;
use crate::options::RoundPalette;

/// Parametric cylinder, sized by its flattened net.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderGeometry {
    /// Number of lateral slices (even, at least 4, dividing 360).
    pub segments: u32,
    /// Height of the lateral surface.
    pub height: f32,
    /// Total width of the unrolled lateral strip (the circumference).
    pub net_width: f32,
}

impl CylinderGeometry {
    /// Radius whose circumference equals the strip width.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.net_width / TAU
    }

    /// Width of one slice in the net.
    #[must_use]
    pub fn segment_width(&self) -> f32 {
        self.net_width / self.segments as f32
    }

    /// Angular width of one slice in degrees.
    #[must_use]
    pub fn segment_angle_degrees(&self) -> f32 {
        360.0 / self.segments as f32
    }

    /// Index of the slice that stays put and carries the caps.
    #[must_use]
    pub fn reference_segment(&self) -> u32 {
        self.segments / 2
    }

    /// Catalog id of the top cap.
    #[must_use]
    pub fn top_cap(&self) -> PieceId {
        PieceId(self.segments as usize)
    }

    /// Catalog id of the bottom cap.
    #[must_use]
    pub fn bottom_cap(&self) -> PieceId {
        PieceId(self.segments as usize + 1)
    }

    fn validate(&self) -> Result<(), NetError> {
        let _ = super::segment_count(ShapeClass::Cylinder, self.segments)?;
        if 360 % self.segments != 0 {
            return Err(NetError::InvalidSegmentCount {
                shape: ShapeClass::Cylinder,
                count: self.segments,
                reason: "must divide 360 evenly",
            });
        }
        let _ = super::positive("cylinder.height", self.height)?;
        let _ = super::positive("cylinder.net_width", self.net_width)?;
        Ok(())
    }
}

/// Lateral slices `0..N` followed by the top and bottom caps.
pub(crate) fn pieces(
    geom: &CylinderGeometry,
    palette: &RoundPalette,
) -> Result<Vec<PieceSpec>, NetError> {
    geom.validate()?;

    let n = geom.segments;
    let reference = geom.reference_segment();
    let radius = geom.radius();
    let width = geom.segment_width();
    let step_angle = TAU / n as f32;

    let mut specs: Vec<PieceSpec> = (0..n)
        .map(|i| {
            let offset = i as i32 - reference as i32;
            let parent = lateral_parent(i, reference);
            PieceSpec {
                kind: PieceKind::LateralSegment,
                role: PieceRole::Lateral { index: i },
                outline: Outline::Rect {
                    width,
                    height: geom.height,
                },
                parent: parent.map(|p| PieceId(p as usize)),
                hinge_axis: parent.map(|_| HingeAxis::Y),
                motion: PieceMotion::RadialUnroll(RadialUnroll {
                    step_angle,
                    radius,
                    segment_width: width,
                    offset,
                    anchor: parent.map(|p| p as i32 - reference as i32),
                }),
                style: PieceStyle::plain(palette.lateral_color(i)),
            }
        })
        .collect();

    let half_height = geom.height * 0.5;
    let cap = |role, sign: f32, label| PieceSpec {
        kind: PieceKind::Cap,
        role,
        outline: Outline::Disc { radius },
        parent: Some(PieceId(reference as usize)),
        hinge_axis: Some(HingeAxis::X),
        motion: PieceMotion::Hinge(Hinge {
            pivot: Vec3::Y * (sign * half_height),
            axis: HingeAxis::X,
            offset: Vec3::Y * (sign * radius),
            folded_angle: -sign * FRAC_PI_2,
        }),
        style: PieceStyle::labelled(palette.cap, label),
    };
    specs.push(cap(PieceRole::TopCap, 1.0, "顶面"));
    specs.push(cap(PieceRole::BottomCap, -1.0, "底面"));
    Ok(specs)
}
