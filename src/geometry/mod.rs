//! Rigid poses and the flat outlines they place.

/// Flat piece outlines (rectangle, triangle, disc).
pub mod outline;
/// Rotation + translation transform and its composition.
pub mod pose;

pub use outline::{Outline, DISC_SEGMENTS};
pub use pose::Pose;
