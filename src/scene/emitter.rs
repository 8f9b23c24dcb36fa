use crate::fold::FoldParameter;
use crate::shape::ShapeInstance;
use crate::view::ViewState;

use super::ScenePiece;

/// Drawable pieces of `instance` at `fold`, seen through `view`.
///
/// One entry per piece in catalog order. Each final pose is
/// `view ∘ world(piece, fold)`; nothing is culled or depth sorted.
#[must_use]
pub fn emit(instance: &ShapeInstance, fold: FoldParameter, view: &ViewState) -> Vec<ScenePiece> {
    let view_pose = view.transform();
    let world = instance.tree().world_poses(fold);
    let pieces: Vec<ScenePiece> = instance
        .pieces()
        .iter()
        .zip(world)
        .map(|(piece, world)| ScenePiece {
            id: piece.id,
            role: piece.role,
            kind: piece.kind,
            outline: piece.outline,
            pose: view_pose.compose(&world),
            color: piece.style.color,
            label: piece.style.label.clone(),
        })
        .collect();
    log::debug!(
        "emitted {} pieces for {} at t = {:.3}",
        pieces.len(),
        instance.shape(),
        fold.t()
    );
    pieces
}
