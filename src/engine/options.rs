//! Options methods for NetEngine

use std::path::Path;

use super::{build_instance, NetEngine};
use crate::error::NetError;
use crate::options::Options;

impl NetEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Replace options and rebuild the current shape from them.
    ///
    /// Fold state and view angles are kept. On error nothing changes.
    pub fn set_options(&mut self, new: Options) -> Result<(), NetError> {
        self.instance = build_instance(&new, self.shape)?;
        self.view.sensitivity = new.view.sensitivity;
        self.options = new;
        self.active_preset = None;
        Ok(())
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(opts)) {
            Ok(()) => {
                log::info!("Loaded preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}
