use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::shape::ShapeClass;
use crate::view::ViewState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View", inline)]
#[serde(default)]
/// Drag rotation and per-shape starting angles, in degrees.
pub struct ViewOptions {
    /// Degrees of rotation per pixel of pointer travel.
    #[schemars(title = "Drag Sensitivity", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub sensitivity: f32,
    /// Initial yaw for cube, cuboid and cylinder.
    #[schemars(title = "Initial Yaw", range(min = -180.0, max = 180.0))]
    pub initial_yaw: f32,
    /// Initial pitch for cube, cuboid and cylinder.
    #[schemars(title = "Initial Pitch", range(min = -90.0, max = 90.0))]
    pub initial_pitch: f32,
    /// Initial yaw for the cone.
    #[schemars(title = "Cone Initial Yaw", range(min = -180.0, max = 180.0))]
    pub cone_initial_yaw: f32,
    /// Initial pitch for the cone.
    #[schemars(title = "Cone Initial Pitch", range(min = -90.0, max = 90.0))]
    pub cone_initial_pitch: f32,
}

impl ViewOptions {
    /// Starting view for `shape`.
    #[must_use]
    pub fn initial_view(&self, shape: ShapeClass) -> ViewState {
        match shape {
            ShapeClass::Cone => ViewState::new(self.cone_initial_yaw, self.cone_initial_pitch),
            _ => ViewState::new(self.initial_yaw, self.initial_pitch),
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            initial_yaw: 30.0,
            initial_pitch: -20.0,
            cone_initial_yaw: 0.0,
            cone_initial_pitch: -30.0,
        }
    }
}
