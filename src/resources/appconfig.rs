//! Application configuration resource.
//!
//! Flip-book and posterizer settings loaded from an INI configuration file.
//! Defaults are usable as is, so a missing file or key is never fatal.
//!
//! # Configuration File Format
//!
//! ```ini
//! [flipbook]
//! sample_interval = 0.05
//! sequence_duration = 1.2
//! ease_out_power = 4
//! prompt = painting
//! strength = 0.5
//! guidance = 1.25
//! resource_dir = StableDiffusion
//!
//! [posterizer]
//! enabled = true
//! levels = 4
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::flipbook::FlipBook;
use crate::components::posterizer::PosterizerController;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
///
/// Changes to this resource are pushed onto the matching components by
/// [`apply_config_changes`].
///
/// [`apply_config_changes`]: crate::systems::appconfig::apply_config_changes
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Flip-book sequence settings.
    pub flipbook: FlipBook,
    /// Posterizer settings.
    pub posterizer: PosterizerController,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            flipbook: FlipBook::default(),
            posterizer: PosterizerController::default(),
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
    /// Missing values retain their current values. Values are not validated
    /// here; an unusable flip-book configuration is reported when its timing
    /// is computed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config)?;

        info!(
            "Loaded config: interval={}s, duration={}s, ease_out={}, posterizer={} ({} levels)",
            self.flipbook.sample_interval,
            self.flipbook.sequence_duration,
            self.flipbook.ease_out_power,
            self.posterizer.enabled,
            self.posterizer.levels
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        // [flipbook] section
        if let Some(v) = config.getfloat("flipbook", "sample_interval")? {
            self.flipbook.sample_interval = v;
        }
        if let Some(v) = config.getfloat("flipbook", "sequence_duration")? {
            self.flipbook.sequence_duration = v;
        }
        if let Some(v) = config.getfloat("flipbook", "ease_out_power")? {
            self.flipbook.ease_out_power = v;
        }
        if let Some(v) = config.get("flipbook", "prompt") {
            self.flipbook.prompt = v;
        }
        if let Some(v) = config.getfloat("flipbook", "strength")? {
            self.flipbook.strength = v as f32;
        }
        if let Some(v) = config.getfloat("flipbook", "guidance")? {
            self.flipbook.guidance = v as f32;
        }
        if let Some(v) = config.get("flipbook", "resource_dir") {
            self.flipbook.resource_dir = v;
        }

        // [posterizer] section
        if let Some(v) = config.getbool("posterizer", "enabled")? {
            self.posterizer.enabled = v;
        }
        if let Some(v) = config.getuint("posterizer", "levels")? {
            self.posterizer.levels = v.min(u32::MAX as u64) as u32;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let fb = &self.flipbook;

        // [flipbook] section
        config.set("flipbook", "sample_interval", Some(fb.sample_interval.to_string()));
        config.set(
            "flipbook",
            "sequence_duration",
            Some(fb.sequence_duration.to_string()),
        );
        config.set("flipbook", "ease_out_power", Some(fb.ease_out_power.to_string()));
        config.set("flipbook", "prompt", Some(fb.prompt.clone()));
        config.set("flipbook", "strength", Some(fb.strength.to_string()));
        config.set("flipbook", "guidance", Some(fb.guidance.to_string()));
        config.set("flipbook", "resource_dir", Some(fb.resource_dir.clone()));

        // [posterizer] section
        config.set(
            "posterizer",
            "enabled",
            Some(self.posterizer.enabled.to_string()),
        );
        config.set(
            "posterizer",
            "levels",
            Some(self.posterizer.levels.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_components() {
        let config = AppConfig::new();
        assert_eq!(config.flipbook, FlipBook::default());
        assert_eq!(config.posterizer, PosterizerController::default());
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn partial_ini_keeps_defaults() {
        let mut config = AppConfig::new();
        config
            .load_from_str("[flipbook]\nease_out_power = 2\nprompt = watercolor\n")
            .unwrap();
        assert_eq!(config.flipbook.ease_out_power, 2.0);
        assert_eq!(config.flipbook.prompt, "watercolor");
        assert_eq!(config.flipbook.sample_interval, 0.05);
        assert!(config.posterizer.enabled);
    }

    #[test]
    fn posterizer_section() {
        let mut config = AppConfig::new();
        config
            .load_from_str("[posterizer]\nenabled = false\nlevels = 8\n")
            .unwrap();
        assert!(!config.posterizer.enabled);
        assert_eq!(config.posterizer.levels, 8);
    }

    #[test]
    fn malformed_number_is_an_error() {
        let mut config = AppConfig::new();
        assert!(
            config
                .load_from_str("[flipbook]\nsample_interval = fast\n")
                .is_err()
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = AppConfig::with_path("/nonexistent/dcamfx/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.flipbook, FlipBook::default());
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("dcamfx_config_{}.ini", std::process::id()));
        let mut saved = AppConfig::with_path(&path);
        saved.flipbook.sequence_duration = 2.5;
        saved.flipbook.prompt = "ink sketch".to_string();
        saved.posterizer.levels = 3;
        saved.save_to_file().unwrap();

        let mut loaded = AppConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.flipbook.sequence_duration, 2.5);
        assert_eq!(loaded.flipbook.prompt, "ink sketch");
        assert_eq!(loaded.posterizer.levels, 3);
    }
}
