//! Hinge tree: parent links between pieces and world-pose resolution.
//!
//! `world(p, t) = world(parent(p), t) ∘ local(p, t)`, with the root's world
//! pose equal to its local pose. The breadth-first resolution order is
//! computed once, so each frame is a single linear pass.

use std::collections::VecDeque;

use crate::error::NetError;
use crate::fold::{local_pose, FoldParameter};
use crate::geometry::Pose;
use crate::shape::{Piece, PieceId};

/// Validated rooted tree over one shape instance's pieces.
#[derive(Debug, Clone)]
pub struct HingeTree {
    pieces: Vec<Piece>,
    root: PieceId,
    children: Vec<Vec<PieceId>>,
    depth: Vec<u32>,
    order: Vec<PieceId>,
}

impl HingeTree {
    /// Validate parent links and precompute the resolution order.
    ///
    /// Ids must equal list positions, exactly one piece may lack a parent,
    /// and every piece must be reachable from that root.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, NetError> {
        if let Some((i, p)) = pieces.iter().enumerate().find(|(i, p)| p.id.index() != *i) {
            return Err(NetError::MalformedHingeTree(format!(
                "piece at position {i} has id {}",
                p.id
            )));
        }

        let mut roots = pieces.iter().filter(|p| p.is_root());
        let root = match (roots.next(), roots.next()) {
            (Some(root), None) => root.id,
            (None, _) => {
                return Err(NetError::MalformedHingeTree("no root piece".into()));
            }
            (Some(a), Some(b)) => {
                return Err(NetError::MalformedHingeTree(format!(
                    "multiple roots: {} and {}",
                    a.id, b.id
                )));
            }
        };

        let mut children = vec![Vec::new(); pieces.len()];
        for piece in &pieces {
            if let Some(parent) = piece.parent {
                let Some(siblings) = children.get_mut(parent.index()) else {
                    return Err(NetError::MalformedHingeTree(format!(
                        "{} refers to missing parent {parent}",
                        piece.id
                    )));
                };
                siblings.push(piece.id);
            }
        }

        let mut depth = vec![0; pieces.len()];
        let mut order = Vec::with_capacity(pieces.len());
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &child in &children[id.index()] {
                depth[child.index()] = depth[id.index()] + 1;
                queue.push_back(child);
            }
        }
        // With one root and in-range parents, a shortfall means a cycle.
        if order.len() != pieces.len() {
            return Err(NetError::MalformedHingeTree(format!(
                "{} of {} pieces unreachable from root {root}",
                pieces.len() - order.len(),
                pieces.len()
            )));
        }

        Ok(Self {
            pieces,
            root,
            children,
            depth,
            order,
        })
    }

    /// Pieces in catalog order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Piece with `id`, if present.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// The one piece without a parent.
    #[must_use]
    pub fn root(&self) -> PieceId {
        self.root
    }

    /// Direct children of `id`, in catalog order.
    #[must_use]
    pub fn children(&self, id: PieceId) -> &[PieceId] {
        self.children.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// Hinge count between `id` and the root.
    #[must_use]
    pub fn depth(&self, id: PieceId) -> Option<u32> {
        self.depth.get(id.index()).copied()
    }

    /// Longest root-to-leaf hinge chain.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.depth.iter().copied().max().unwrap_or(0)
    }

    /// Parent-before-child order used to resolve world poses.
    #[must_use]
    pub fn resolution_order(&self) -> &[PieceId] {
        &self.order
    }

    /// World pose of every piece at `fold`, indexed by piece id.
    #[must_use]
    pub fn world_poses(&self, fold: FoldParameter) -> Vec<Pose> {
        let mut world = vec![Pose::IDENTITY; self.pieces.len()];
        for &id in &self.order {
            let piece = &self.pieces[id.index()];
            let local = local_pose(piece, fold);
            world[id.index()] = match piece.parent {
                Some(parent) => world[parent.index()].compose(&local),
                None => local,
            };
        }
        world
    }

    /// World pose of a single piece, walking only its ancestor chain.
    #[must_use]
    pub fn world_pose(&self, id: PieceId, fold: FoldParameter) -> Option<Pose> {
        let mut piece = self.get(id)?;
        let mut pose = local_pose(piece, fold);
        while let Some(parent) = piece.parent {
            piece = self.get(parent)?;
            pose = local_pose(piece, fold).compose(&pose);
        }
        Some(pose)
    }
}
