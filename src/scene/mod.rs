//! Renderer-facing frame description.
//!
//! A [`Scene`] is the only thing a renderer needs: one [`ScenePiece`] per
//! piece with its outline, final pose, colour and label. It serializes to
//! JSON for out-of-process renderers.

mod emitter;

pub use emitter::emit;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::fold::FoldParameter;
use crate::geometry::{Outline, Pose};
use crate::shape::{PieceId, PieceKind, PieceRole, ShapeClass, ShapeInstance};
use crate::view::ViewState;

/// One drawable piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePiece {
    /// Catalog id.
    pub id: PieceId,
    /// Named position within the solid.
    pub role: PieceRole,
    /// Face, lateral segment or cap.
    pub kind: PieceKind,
    /// Flat outline in the piece's local XY plane.
    pub outline: Outline,
    /// `view ∘ world`: local frame to view frame.
    pub pose: Pose,
    /// Linear RGBA fill.
    pub color: [f32; 4],
    /// Text drawn on the piece, if any.
    pub label: Option<String>,
}

impl ScenePiece {
    /// Outline vertices in the view frame. Discs come out as a 32-gon.
    #[must_use]
    pub fn world_vertices(&self) -> Vec<Vec3> {
        self.outline
            .local_vertices()
            .into_iter()
            .map(|v| self.pose.transform_point(v))
            .collect()
    }

    /// Outline centre (local origin) in the view frame.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.pose.translation
    }
}

/// A complete frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Shape being shown.
    pub shape: ShapeClass,
    /// Fold state the frame was computed at.
    #[serde(rename = "t")]
    pub fold: FoldParameter,
    /// View angles applied to every pose.
    pub view: ViewState,
    /// Pieces in catalog order; empty for the sphere.
    pub pieces: Vec<ScenePiece>,
}

impl Scene {
    /// Emit the frame for `instance`.
    #[must_use]
    pub fn build(instance: &ShapeInstance, fold: FoldParameter, view: ViewState) -> Self {
        Self {
            shape: instance.shape(),
            fold,
            view,
            pieces: emit(instance, fold, &view),
        }
    }

    /// Frame for a shape with no net: no pieces.
    #[must_use]
    pub fn empty(shape: ShapeClass, fold: FoldParameter, view: ViewState) -> Self {
        Self {
            shape,
            fold,
            view,
            pieces: Vec::new(),
        }
    }

    /// Axis-aligned bounds of every vertex, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        self.pieces
            .iter()
            .flat_map(ScenePiece::world_vertices)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
