//! Engine configuration resource.
//!
//! Manages engine settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [assets]
//! particle_definitions = ./assets/particles.json
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_DEFINITIONS_PATH: &str = "./assets/particles.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration resource.
///
/// Stores render resolution, window settings, and asset paths. Values come
/// from the INI file when present, defaults otherwise.
#[derive(Resource, Debug, Clone)]
pub struct EngineConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the particle definitions JSON file.
    pub definitions_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            definitions_path: PathBuf::from(DEFAULT_DEFINITIONS_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Load values from `config_path`, keeping defaults for missing keys.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(self.config_path.to_string_lossy().as_ref())?;

        if let Ok(Some(v)) = ini.getuint("render", "width") {
            self.render_width = v as u32;
        }
        if let Ok(Some(v)) = ini.getuint("render", "height") {
            self.render_height = v as u32;
        }
        if let Ok(Some(v)) = ini.getuint("window", "width") {
            self.window_width = v as u32;
        }
        if let Ok(Some(v)) = ini.getuint("window", "height") {
            self.window_height = v as u32;
        }
        if let Ok(Some(v)) = ini.getuint("window", "target_fps") {
            self.target_fps = v as u32;
        }
        if let Some(v) = ini.get("assets", "particle_definitions") {
            self.definitions_path = PathBuf::from(v);
        }

        info!("configuration loaded from {}", self.config_path.display());
        Ok(())
    }

    /// Write the current values to `config_path`.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.set("render", "width", Some(self.render_width.to_string()));
        ini.set("render", "height", Some(self.render_height.to_string()));
        ini.set("window", "width", Some(self.window_width.to_string()));
        ini.set("window", "height", Some(self.window_height.to_string()));
        ini.set("window", "target_fps", Some(self.target_fps.to_string()));
        ini.set(
            "assets",
            "particle_definitions",
            Some(self.definitions_path.to_string_lossy().into_owned()),
        );
        ini.write(self.config_path.to_string_lossy().as_ref())
            .map_err(|e| format!("failed to write {}: {e}", self.config_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let config = EngineConfig::new();
        assert_eq!(config.render_width, DEFAULT_RENDER_WIDTH);
        assert_eq!(config.render_height, DEFAULT_RENDER_HEIGHT);
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut config = EngineConfig::new();
        config.config_path = PathBuf::from("./definitely_not_here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.render_width, DEFAULT_RENDER_WIDTH);
    }
}
