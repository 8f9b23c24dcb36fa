//! Cube and cuboid nets.
//!
//! Both share one hinge topology. The back face is the root; top, bottom,
//! left and right hinge off its edges, and the front face hinges off the
//! far edge of the bottom face, so unfolding runs edge to edge down one
//! column instead of opening as a flat star.
//!
//! Every face folds toward +Z. Closed, the box spans x in [-W/2, W/2],
//! y in [-H/2, H/2] and z in [0, D], with the back face at z = 0.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::piece::{PieceId, PieceKind, PieceRole, PieceSpec, PieceStyle};
use crate::error::NetError;
use crate::fold::{Hinge, HingeAxis, PieceMotion};
use crate::geometry::{Outline, Pose};
use crate::options::BoxPalette;

/// Catalog index of the back (root) face.
pub const BACK: PieceId = PieceId(0);
/// Catalog index of the top face.
pub const TOP: PieceId = PieceId(1);
/// Catalog index of the bottom face.
pub const BOTTOM: PieceId = PieceId(2);
/// Catalog index of the front face (child of the bottom face).
pub const FRONT: PieceId = PieceId(3);
/// Catalog index of the left face.
pub const LEFT: PieceId = PieceId(4);
/// Catalog index of the right face.
pub const RIGHT: PieceId = PieceId(5);

/// Box dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    /// Extent along X.
    pub width: f32,
    /// Extent along Y.
    pub height: f32,
    /// Extent along Z once folded.
    pub depth: f32,
}

impl BoxDimensions {
    /// Cube with edge length `edge`.
    #[must_use]
    pub fn cube(edge: f32) -> Self {
        Self {
            width: edge,
            height: edge,
            depth: edge,
        }
    }
}

/// Parent link of one face.
struct Link {
    parent: Option<PieceId>,
    hinge_axis: Option<HingeAxis>,
    motion: PieceMotion,
}

fn hinge(
    parent: PieceId,
    axis: HingeAxis,
    pivot: Vec3,
    offset: Vec3,
    folded_angle: f32,
) -> Link {
    Link {
        parent: Some(parent),
        hinge_axis: Some(axis),
        motion: PieceMotion::Hinge(Hinge {
            pivot,
            axis,
            offset,
            folded_angle,
        }),
    }
}

fn face(
    role: PieceRole,
    width: f32,
    height: f32,
    link: Link,
    style: PieceStyle,
) -> PieceSpec {
    PieceSpec {
        kind: PieceKind::Face,
        role,
        outline: Outline::Rect { width, height },
        parent: link.parent,
        hinge_axis: link.hinge_axis,
        motion: link.motion,
        style,
    }
}

/// Six faces in catalog order: back, top, bottom, front, left, right.
///
/// Labels follow the lesson's face numbering (1, 2, 3, 6, 4, 5), so
/// opposite faces share a colour.
pub(crate) fn pieces(
    dims: BoxDimensions,
    palette: &BoxPalette,
) -> Result<Vec<PieceSpec>, NetError> {
    let w = super::positive("box.width", dims.width)?;
    let h = super::positive("box.height", dims.height)?;
    let d = super::positive("box.depth", dims.depth)?;
    let (hw, hh, hd) = (w * 0.5, h * 0.5, d * 0.5);

    let root = Link {
        parent: None,
        hinge_axis: None,
        motion: PieceMotion::Fixed(Pose::IDENTITY),
    };
    Ok(vec![
        face(PieceRole::Back, w, h, root, PieceStyle::labelled(palette.front, "1")),
        face(
            PieceRole::Top,
            w,
            d,
            hinge(BACK, HingeAxis::X, Vec3::Y * hh, Vec3::Y * hd, FRAC_PI_2),
            PieceStyle::labelled(palette.top, "2"),
        ),
        face(
            PieceRole::Bottom,
            w,
            d,
            hinge(BACK, HingeAxis::X, Vec3::NEG_Y * hh, Vec3::NEG_Y * hd, -FRAC_PI_2),
            PieceStyle::labelled(palette.top, "3"),
        ),
        face(
            PieceRole::Front,
            w,
            h,
            hinge(BOTTOM, HingeAxis::X, Vec3::NEG_Y * hd, Vec3::NEG_Y * hh, -FRAC_PI_2),
            PieceStyle::labelled(palette.front, "6"),
        ),
        face(
            PieceRole::Left,
            d,
            h,
            hinge(BACK, HingeAxis::Y, Vec3::NEG_X * hw, Vec3::NEG_X * hd, FRAC_PI_2),
            PieceStyle::labelled(palette.side, "4"),
        ),
        face(
            PieceRole::Right,
            d,
            h,
            hinge(BACK, HingeAxis::Y, Vec3::X * hw, Vec3::X * hd, -FRAC_PI_2),
            PieceStyle::labelled(palette.side, "5"),
        ),
    ])
}
