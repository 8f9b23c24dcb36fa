use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::shape::{BoxDimensions, ConeGeometry, CylinderGeometry};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Static dimensions of every shape, in net units.
pub struct GeometryOptions {
    /// Cube edge length.
    #[schemars(title = "Cube Edge", range(min = 10.0, max = 400.0))]
    pub cube_edge: f32,
    /// Cuboid extent along X.
    #[schemars(title = "Cuboid Width", range(min = 10.0, max = 400.0))]
    pub cuboid_width: f32,
    /// Cuboid extent along Y.
    #[schemars(title = "Cuboid Height", range(min = 10.0, max = 400.0))]
    pub cuboid_height: f32,
    /// Cuboid extent along Z once folded.
    #[schemars(title = "Cuboid Depth", range(min = 10.0, max = 400.0))]
    pub cuboid_depth: f32,
    /// Cylinder lateral slices; even, at least 4 and dividing 360.
    #[schemars(title = "Cylinder Segments", range(min = 4, max = 120))]
    pub cylinder_segments: u32,
    /// Cylinder height.
    #[schemars(title = "Cylinder Height", range(min = 10.0, max = 400.0))]
    pub cylinder_height: f32,
    /// Width of the unrolled cylinder strip.
    #[schemars(title = "Cylinder Net Width", range(min = 10.0, max = 1000.0))]
    pub cylinder_net_width: f32,
    /// Cone lateral slices; even and at least 4.
    #[schemars(title = "Cone Segments", range(min = 4, max = 120))]
    pub cone_segments: u32,
    /// Cone apex-to-base height.
    #[schemars(title = "Cone Height", range(min = 10.0, max = 400.0))]
    pub cone_height: f32,
    /// Cone base radius.
    #[schemars(title = "Cone Base Radius", range(min = 5.0, max = 200.0))]
    pub cone_base_radius: f32,
}

impl GeometryOptions {
    /// Cuboid dimensions.
    #[must_use]
    pub fn cuboid_dimensions(&self) -> BoxDimensions {
        BoxDimensions {
            width: self.cuboid_width,
            height: self.cuboid_height,
            depth: self.cuboid_depth,
        }
    }

    /// Cylinder parameters.
    #[must_use]
    pub fn cylinder(&self) -> CylinderGeometry {
        CylinderGeometry {
            segments: self.cylinder_segments,
            height: self.cylinder_height,
            net_width: self.cylinder_net_width,
        }
    }

    /// Cone parameters.
    #[must_use]
    pub fn cone(&self) -> ConeGeometry {
        ConeGeometry {
            segments: self.cone_segments,
            height: self.cone_height,
            base_radius: self.cone_base_radius,
        }
    }
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            cube_edge: 100.0,
            cuboid_width: 100.0,
            cuboid_height: 150.0,
            cuboid_depth: 60.0,
            cylinder_segments: 20,
            cylinder_height: 140.0,
            cylinder_net_width: 260.0,
            cone_segments: 12,
            cone_height: 140.0,
            cone_base_radius: 50.0,
        }
    }
}
