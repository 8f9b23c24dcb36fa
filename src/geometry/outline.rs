use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Number of rim vertices used when a disc is handed out as a polygon.
pub const DISC_SEGMENTS: usize = 32;

/// Flat 2D shape of a piece, lying in its local XY plane.
///
/// Rectangles and discs are centred on the local origin. Triangles have
/// their apex at the origin and their base edge toward local -Y, which is
/// how a cone's lateral strip hangs from its apex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outline {
    /// Axis-aligned rectangle.
    Rect {
        /// Extent along local X.
        width: f32,
        /// Extent along local Y.
        height: f32,
    },
    /// Isosceles triangle hanging from its apex.
    Triangle {
        /// Length of the base edge.
        base: f32,
        /// Distance from apex to the base edge.
        height: f32,
    },
    /// Circle.
    Disc {
        /// Disc radius.
        radius: f32,
    },
}

impl Outline {
    /// Boundary vertices in local coordinates, counter-clockwise seen from
    /// +Z. Discs are sampled as a [`DISC_SEGMENTS`]-gon.
    #[must_use]
    pub fn local_vertices(&self) -> Vec<Vec3> {
        match *self {
            Self::Rect { width, height } => {
                let (hw, hh) = (width * 0.5, height * 0.5);
                vec![
                    Vec3::new(-hw, -hh, 0.0),
                    Vec3::new(hw, -hh, 0.0),
                    Vec3::new(hw, hh, 0.0),
                    Vec3::new(-hw, hh, 0.0),
                ]
            }
            Self::Triangle { base, height } => vec![
                Vec3::ZERO,
                Vec3::new(-base * 0.5, -height, 0.0),
                Vec3::new(base * 0.5, -height, 0.0),
            ],
            Self::Disc { radius } => (0..DISC_SEGMENTS)
                .map(|i| {
                    let a = TAU * i as f32 / DISC_SEGMENTS as f32;
                    Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
                })
                .collect(),
        }
    }
}
