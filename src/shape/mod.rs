//! Shape geometry catalog.
//!
//! Turns a [`ShapeClass`] plus configured dimensions into the immutable
//! list of pieces and the hinge tree that links them. Each shape family
//! owns its own pose math through the [`PieceMotion`](crate::fold::PieceMotion)
//! variant its pieces carry.

/// Cube and cuboid faces.
pub mod box_net;
/// Cone slices and base.
pub mod cone;
/// Cylinder slices and caps.
pub mod cylinder;
/// Piece attributes.
pub mod piece;

use std::fmt;
use std::str::FromStr;

pub use box_net::BoxDimensions;
pub use cone::ConeGeometry;
pub use cylinder::CylinderGeometry;
pub use piece::{Piece, PieceId, PieceKind, PieceRole, PieceStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NetError;
use crate::hinge::HingeTree;
use crate::options::{ColorOptions, GeometryOptions};

/// The five solids of the lesson.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeClass {
    /// Six equal square faces.
    Cube,
    /// Six rectangular faces, opposite faces equal.
    Cuboid,
    /// Two discs joined by a curved strip.
    Cylinder,
    /// Non-developable; has no net.
    Sphere,
    /// Disc base rising to an apex.
    Cone,
}

/// Static lesson card for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeInfo {
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Short emoji shown on the card.
    pub emoji: &'static str,
    /// Distinguishing features, in display order.
    pub characteristics: &'static [&'static str],
}

impl ShapeClass {
    /// All shapes in lesson order.
    pub const ALL: [Self; 5] = [
        Self::Cube,
        Self::Cuboid,
        Self::Cylinder,
        Self::Sphere,
        Self::Cone,
    ];

    /// Whether the surface can be flattened without stretching.
    #[must_use]
    pub fn is_developable(self) -> bool {
        !matches!(self, Self::Sphere)
    }

    /// Lowercase identifier used in options files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Cuboid => "cuboid",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
            Self::Cone => "cone",
        }
    }

    /// Lesson card for this shape.
    #[must_use]
    pub fn info(self) -> ShapeInfo {
        match self {
            Self::Cube => ShapeInfo {
                name: "正方体 (Cube)",
                description: "方方正正，六个面都一样大。",
                emoji: "🧊",
                characteristics: &["6个平平的面", "每个面都是正方形", "有8个角"],
            },
            Self::Cuboid => ShapeInfo {
                name: "长方体 (Cuboid)",
                description: "长长方方，相对的面一样大。",
                emoji: "📦",
                characteristics: &["6个平平的面", "相对的面大小一样", "有8个角"],
            },
            Self::Cylinder => ShapeInfo {
                name: "圆柱体 (Cylinder)",
                description: "上下一样粗，横放能滚动。",
                emoji: "🔋",
                characteristics: &["上下两个圆面", "身体是曲面", "容易滚动"],
            },
            Self::Sphere => ShapeInfo {
                name: "球体 (Sphere)",
                description: "圆圆滚滚，哪里都能滚。",
                emoji: "⚽",
                characteristics: &["没有平平的面", "到处都能滚动", "没有角"],
            },
            Self::Cone => ShapeInfo {
                name: "圆锥体 (Cone)",
                description: "头尖尖，底圆圆。",
                emoji: "🎉",
                characteristics: &["底面是圆形", "有一个尖尖的头", "侧面是曲面"],
            },
        }
    }
}

impl fmt::Display for ShapeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeClass {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NetError::UnknownShape(s.to_owned()))
    }
}

/// One solid's pieces and hinge tree, derived once from static dimensions.
#[derive(Debug, Clone)]
pub struct ShapeInstance {
    shape: ShapeClass,
    tree: HingeTree,
}

impl ShapeInstance {
    /// Build the catalog output for `shape`.
    ///
    /// Fails for the sphere and for configurations that break a shape's
    /// segment-count or dimension rules.
    pub fn build(
        shape: ShapeClass,
        geometry: &GeometryOptions,
        colors: &ColorOptions,
    ) -> Result<Self, NetError> {
        let specs = match shape {
            ShapeClass::Cube => box_net::pieces(
                BoxDimensions::cube(geometry.cube_edge),
                &colors.cube,
            )?,
            ShapeClass::Cuboid => {
                box_net::pieces(geometry.cuboid_dimensions(), &colors.cuboid)?
            }
            ShapeClass::Cylinder => {
                cylinder::pieces(&geometry.cylinder(), &colors.cylinder)?
            }
            ShapeClass::Cone => cone::pieces(&geometry.cone(), &colors.cone)?,
            ShapeClass::Sphere => return Err(NetError::NonDevelopable(shape)),
        };

        let pieces = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Piece::from_spec(PieceId(i), shape, spec))
            .collect();
        let tree = HingeTree::new(pieces)?;
        log::debug!(
            "built {shape}: {} pieces, hinge depth {}",
            tree.pieces().len(),
            tree.max_depth()
        );
        Ok(Self { shape, tree })
    }

    /// Build with default dimensions and colours.
    pub fn with_defaults(shape: ShapeClass) -> Result<Self, NetError> {
        Self::build(shape, &GeometryOptions::default(), &ColorOptions::default())
    }

    /// Shape class of this instance.
    #[must_use]
    pub fn shape(&self) -> ShapeClass {
        self.shape
    }

    /// Hinge tree over the pieces.
    #[must_use]
    pub fn tree(&self) -> &HingeTree {
        &self.tree
    }

    /// Pieces in catalog order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        self.tree.pieces()
    }
}

/// Reject non-finite and non-positive dimensions.
pub(crate) fn positive(name: &'static str, value: f32) -> Result<f32, NetError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(NetError::InvalidDimension { name, value })
    }
}

/// Largest accepted lateral segment count for cylinders and cones.
pub const MAX_SEGMENTS: u32 = 120;

/// Segment counts must be even and at least 4 so the reference slice
/// `N / 2` sits in the middle of the strip.
pub(crate) fn segment_count(shape: ShapeClass, count: u32) -> Result<u32, NetError> {
    let reason = if count < 4 {
        "must be at least 4"
    } else if count > MAX_SEGMENTS {
        "must be at most 120"
    } else if count % 2 != 0 {
        "must be even"
    } else {
        return Ok(count);
    };
    Err(NetError::InvalidSegmentCount {
        shape,
        count,
        reason,
    })
}

/// Neighbour of lateral slice `i` one step closer to `reference`, or
/// `None` for the reference slice itself.
pub(crate) fn lateral_parent(i: u32, reference: u32) -> Option<u32> {
    match i.cmp(&reference) {
        std::cmp::Ordering::Less => Some(i + 1),
        std::cmp::Ordering::Greater => Some(i - 1),
        std::cmp::Ordering::Equal => None,
    }
}
