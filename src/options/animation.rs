use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fold::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Fold playback parameters.
pub struct AnimationOptions {
    /// Seconds for a full fold or unfold.
    #[schemars(title = "Fold Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub fold_duration_secs: f32,
    /// Curve applied to playback progress.
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Playback duration for a full sweep. Negative or NaN values play
    /// instantly.
    #[must_use]
    pub fn fold_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.fold_duration_secs).unwrap_or(Duration::ZERO)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            fold_duration_secs: 1.5,
            easing: EasingFunction::DEFAULT,
        }
    }
}
