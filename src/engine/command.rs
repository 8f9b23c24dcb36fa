//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a slider, a shape
//! picker, a button or a programmatic call, is represented as a
//! `NetCommand`. Pointer drags go through
//! [`NetEngine::handle_event`](super::NetEngine::handle_event) instead,
//! since they carry per-sample deltas rather than intent.

use serde::{Deserialize, Serialize};

use crate::fold::{FoldParameter, FoldScale};
use crate::shape::ShapeClass;

/// A discrete request to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum NetCommand {
    /// Switch to another solid, discarding fold, view and animation state.
    SelectShape {
        /// Shape to show.
        shape: ShapeClass,
    },
    /// Jump the fold slider to `value`, read in `scale`. Cancels playback.
    SetFold {
        /// Raw slider value.
        value: f32,
        /// Convention the value is expressed in.
        #[serde(default)]
        scale: FoldScale,
    },
    /// Play the fold toward `target` with the configured easing.
    AnimateFold {
        /// Fold state to end at.
        target: FoldParameter,
    },
    /// Return the view to the shape's initial angles.
    ResetView,
}

impl NetCommand {
    /// Fold fully open.
    #[must_use]
    pub fn unfold() -> Self {
        Self::AnimateFold {
            target: FoldParameter::FLAT,
        }
    }

    /// Fold fully closed.
    #[must_use]
    pub fn fold() -> Self {
        Self::AnimateFold {
            target: FoldParameter::FOLDED,
        }
    }
}
