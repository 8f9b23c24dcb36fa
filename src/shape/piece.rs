use std::fmt;

use serde::{Deserialize, Serialize};

use super::ShapeClass;
use crate::fold::{FoldParameter, HingeAxis, PieceMotion};
use crate::geometry::{Outline, Pose};

/// Stable index of a piece inside its shape instance (catalog order).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PieceId(pub usize);

impl PieceId {
    /// Position in the instance's piece list.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a piece is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    /// Flat polyhedron face.
    Face,
    /// Angular slice of a curved lateral surface.
    LateralSegment,
    /// Circular end cap.
    Cap,
}

/// Named position of a piece within its solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum PieceRole {
    /// Box face the net grows from.
    Back,
    /// Box face above the back face.
    Top,
    /// Box face below the back face.
    Bottom,
    /// Box face opposite the back face, hinged off the bottom face.
    Front,
    /// Box face left of the back face.
    Left,
    /// Box face right of the back face.
    Right,
    /// Lateral slice of a cylinder or cone.
    Lateral {
        /// Slice index around the axis.
        index: u32,
    },
    /// Upper cylinder cap.
    TopCap,
    /// Lower cylinder cap.
    BottomCap,
    /// Cone base.
    BaseCap,
}

impl fmt::Display for PieceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => f.write_str("back"),
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
            Self::Front => f.write_str("front"),
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Lateral { index } => write!(f, "lateral {index}"),
            Self::TopCap => f.write_str("top cap"),
            Self::BottomCap => f.write_str("bottom cap"),
            Self::BaseCap => f.write_str("base cap"),
        }
    }
}

/// Visual attributes handed through to the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceStyle {
    /// Linear RGBA fill.
    pub color: [f32; 4],
    /// Text drawn on the piece, if any.
    pub label: Option<String>,
}

impl PieceStyle {
    /// Unlabelled piece.
    #[must_use]
    pub fn plain(color: [f32; 4]) -> Self {
        Self { color, label: None }
    }

    /// Piece carrying `label`.
    #[must_use]
    pub fn labelled(color: [f32; 4], label: &str) -> Self {
        Self {
            color,
            label: Some(label.to_owned()),
        }
    }
}

/// Everything a catalog builder specifies about a piece; the id and the
/// endpoint poses are filled in by `Piece::from_spec`.
#[derive(Debug, Clone)]
pub(crate) struct PieceSpec {
    pub(crate) kind: PieceKind,
    pub(crate) role: PieceRole,
    pub(crate) outline: Outline,
    pub(crate) parent: Option<PieceId>,
    pub(crate) hinge_axis: Option<HingeAxis>,
    pub(crate) motion: PieceMotion,
    pub(crate) style: PieceStyle,
}

/// The atomic transformable unit of a shape.
///
/// A piece knows only its pose relative to its parent. World poses are
/// resolved by the [`HingeTree`](crate::hinge::HingeTree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Stable index (catalog order).
    pub id: PieceId,
    /// Shape this piece belongs to.
    pub shape: ShapeClass,
    /// Face, lateral segment or cap.
    pub kind: PieceKind,
    /// Named position within the solid.
    pub role: PieceRole,
    /// Flat outline in the local XY plane.
    pub outline: Outline,
    /// Parent piece; `None` only for the root.
    pub parent: Option<PieceId>,
    /// Axis, in the parent frame, the piece turns about; `None` for the
    /// root.
    pub hinge_axis: Option<HingeAxis>,
    /// Local pose at `t = 0`.
    pub folded_pose: Pose,
    /// Local pose at `t = 1`.
    pub unfolded_pose: Pose,
    /// How the local pose follows `t`.
    pub motion: PieceMotion,
    /// Colour and label.
    pub style: PieceStyle,
}

impl Piece {
    pub(crate) fn from_spec(id: PieceId, shape: ShapeClass, spec: PieceSpec) -> Self {
        Self {
            id,
            shape,
            kind: spec.kind,
            role: spec.role,
            outline: spec.outline,
            parent: spec.parent,
            hinge_axis: spec.hinge_axis,
            folded_pose: spec.motion.local_pose(FoldParameter::FOLDED),
            unfolded_pose: spec.motion.local_pose(FoldParameter::FLAT),
            motion: spec.motion,
            style: spec.style,
        }
    }

    /// Whether this is the tree root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
