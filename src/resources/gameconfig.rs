//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 320
//! height = 200
//! unit_size = 8
//!
//! [window]
//! width = 1280
//! height = 800
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [simulation]
//! ticks_per_second = 15
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 320;
const DEFAULT_RENDER_HEIGHT: u32 = 200;
const DEFAULT_UNIT_SIZE: u32 = 8;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_TICKS_PER_SECOND: u32 = 15;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores render resolution, window settings and the simulation tick rate.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Pixels per world unit.
    pub unit_size: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second for presentation.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Gameplay frames per second. Behaviors advance once per tick.
    pub ticks_per_second: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            unit_size: DEFAULT_UNIT_SIZE,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }
        if let Some(unit) = config.getuint("render", "unit_size").ok().flatten() {
            self.unit_size = (unit as u32).max(1);
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [simulation] section
        if let Some(tps) = config.getuint("simulation", "ticks_per_second").ok().flatten() {
            self.ticks_per_second = (tps as u32).max(1);
        }

        info!(
            "Loaded config: {}x{} render ({} px/unit), {}x{} window, fps={}, vsync={}, fullscreen={}, tps={}",
            self.render_width,
            self.render_height,
            self.unit_size,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.ticks_per_second
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));
        config.set("render", "unit_size", Some(self.unit_size.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        config.set(
            "simulation",
            "ticks_per_second",
            Some(self.ticks_per_second.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Seconds per gameplay tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }

    /// Viewport size in world units for the current render resolution.
    pub fn view_units(&self) -> (i32, i32) {
        let unit = self.unit_size.max(1);
        (
            (self.render_width / unit) as i32,
            (self.render_height / unit) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hazardengine_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.ticks_per_second, 15);
        assert_eq!(config.view_units(), (40, 25));
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.render_width, 320);
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let path = temp_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.unit_size = 16;
        saved.ticks_per_second = 30;
        saved.fullscreen = true;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let path = temp_path("partial");
        std::fs::write(&path, "[simulation]\nticks_per_second = 0\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.ticks_per_second, 1);
        assert_eq!(config.window_width, 1280);
    }
}
