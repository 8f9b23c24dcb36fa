use serde::{Deserialize, Serialize};

const RED_500: [f32; 3] = [0.937, 0.267, 0.267];
const BLUE_500: [f32; 3] = [0.231, 0.510, 0.965];
const BLUE_400: [f32; 3] = [0.376, 0.647, 0.980];
const GREEN_400: [f32; 3] = [0.290, 0.871, 0.502];
const YELLOW_400: [f32; 3] = [0.980, 0.800, 0.082];
const PURPLE_500: [f32; 3] = [0.659, 0.333, 0.969];

const fn rgba([r, g, b]: [f32; 3], a: f32) -> [f32; 4] {
    [r, g, b, a]
}

/// Face colours for a cube or cuboid. Opposite faces share a colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoxPalette {
    /// Back and front faces.
    pub front: [f32; 4],
    /// Left and right faces.
    pub side: [f32; 4],
    /// Top and bottom faces.
    pub top: [f32; 4],
}

impl BoxPalette {
    /// Cuboid variant: blue front/back instead of red.
    #[must_use]
    pub fn cuboid() -> Self {
        Self {
            front: rgba(BLUE_500, 0.9),
            ..Self::default()
        }
    }
}

impl Default for BoxPalette {
    fn default() -> Self {
        Self {
            front: rgba(RED_500, 0.9),
            side: rgba(GREEN_400, 0.9),
            top: rgba(YELLOW_400, 0.9),
        }
    }
}

/// Colours for a segmented solid: one lateral hue with alternating alpha
/// so neighbouring slices stay distinguishable, and one cap colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoundPalette {
    /// RGB shared by every lateral slice.
    pub lateral: [f32; 3],
    /// Alpha for even and odd slice indices.
    pub lateral_alpha: [f32; 2],
    /// RGBA for the caps.
    pub cap: [f32; 4],
}

impl RoundPalette {
    /// Blue strip with yellow caps.
    #[must_use]
    pub fn cylinder() -> Self {
        Self {
            lateral: BLUE_400,
            lateral_alpha: [0.8, 0.9],
            cap: rgba(YELLOW_400, 1.0),
        }
    }

    /// Purple sector with a green base.
    #[must_use]
    pub fn cone() -> Self {
        Self {
            lateral: PURPLE_500,
            lateral_alpha: [0.8, 0.9],
            cap: rgba(GREEN_400, 1.0),
        }
    }

    /// RGBA of lateral slice `index`.
    #[must_use]
    pub fn lateral_color(&self, index: u32) -> [f32; 4] {
        rgba(self.lateral, self.lateral_alpha[(index % 2) as usize])
    }
}

impl Default for RoundPalette {
    fn default() -> Self {
        Self::cylinder()
    }
}

/// Per-shape colour palettes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Cube faces.
    pub cube: BoxPalette,
    /// Cuboid faces.
    pub cuboid: BoxPalette,
    /// Cylinder slices and caps.
    pub cylinder: RoundPalette,
    /// Cone slices and base.
    pub cone: RoundPalette,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            cube: BoxPalette::default(),
            cuboid: BoxPalette::cuboid(),
            cylinder: RoundPalette::cylinder(),
            cone: RoundPalette::cone(),
        }
    }
}
