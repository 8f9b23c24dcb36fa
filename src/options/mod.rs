//! Centralized shape, view and playback options with TOML preset support.
//!
//! Dimensions, colour palettes, drag sensitivity and fold playback are
//! consolidated here. Options serialize to/from TOML so lesson variants can
//! be stored as presets.

mod animation;
mod colors;
mod geometry;
mod view;

use std::path::Path;

pub use animation::AnimationOptions;
pub use colors::{BoxPalette, ColorOptions, RoundPalette};
pub use geometry::GeometryOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::ViewOptions;

use crate::error::NetError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[geometry]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Shape dimensions and segment counts.
    pub geometry: GeometryOptions,
    /// Drag rotation and starting angles.
    pub view: ViewOptions,
    /// Colour palettes.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Fold playback.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NetError> {
        let content = std::fs::read_to_string(path).map_err(NetError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, NetError> {
        toml::from_str(content).map_err(|e| NetError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NetError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NetError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NetError::Io)?;
        }
        std::fs::write(path, content).map_err(NetError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::EasingFunction;
    use crate::shape::ShapeClass;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[geometry]
cone_segments = 16
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.geometry.cone_segments, 16);
        // Everything else should be default
        assert_eq!(opts.geometry.cylinder_segments, 20);
        assert_eq!(opts.view.sensitivity, 0.5);
        assert_eq!(opts.colors, ColorOptions::default());
    }

    #[test]
    fn easing_is_tagged_by_kind() {
        let toml_str = r#"
[animation]
fold_duration_secs = 0.5

[animation.easing]
kind = "smooth_step"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.easing, EasingFunction::SmoothStep);
        assert_eq!(opts.animation.fold_duration().as_millis(), 500);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[geometry\ncube_edge = 1").unwrap_err();
        assert!(matches!(err, NetError::OptionsParse(_)));
    }

    #[test]
    fn cone_starts_from_its_own_angles() {
        let view = ViewOptions::default();
        let cone = view.initial_view(ShapeClass::Cone);
        let cube = view.initial_view(ShapeClass::Cube);
        assert_eq!((cone.yaw, cone.pitch), (0.0, -30.0));
        assert_eq!((cube.yaw, cube.pitch), (30.0, -20.0));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("netfold-opts-{}", std::process::id()));
        let path = dir.join("lesson.toml");
        let mut opts = Options::default();
        opts.geometry.cube_edge = 80.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["lesson".to_owned()]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("view"));
        assert!(props.contains_key("animation"));
        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));

        let geometry = &props["geometry"]["properties"];
        assert!(geometry.get("cone_base_radius").is_some());
    }
}
