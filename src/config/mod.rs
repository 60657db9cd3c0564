//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings cover the tool and style a
//! drawing surface starts with and the canvas background.
//!
//! If no config file exists, sensible defaults are used automatically. The file is
//! only ever read; drawings themselves are never written to disk.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use crate::input::MAX_STROKE_WIDTH;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "freehand-line"
/// stroke_color = "black"
/// fill_color = [255, 200, 0]
/// stroke_width = 2
/// fill_shapes = true
///
/// [canvas]
/// background_color = "white"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting tool and style
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas appearance
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1 - 100
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_STROKE_WIDTH).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {}, clamping to 1-{} range",
                self.drawing.stroke_width,
                MAX_STROKE_WIDTH
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1, MAX_STROKE_WIDTH);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, ORANGE, RED, WHITE};
    use crate::input::{DrawingSurface, Tool};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.drawing.stroke_width, 2);
        assert_eq!(config.drawing.default_tool, Tool::FreehandLine);
        assert!(config.drawing.fill_shapes);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
            [drawing]
            default_tool = "oval"
            stroke_color = "red"
            fill_color = [255, 200, 0]
            "#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Oval);
        assert_eq!(config.drawing.stroke_color.to_color(), RED);
        assert_eq!(config.drawing.fill_color.to_color(), ORANGE);
        assert_eq!(config.drawing.stroke_width, 2);
        assert_eq!(config.canvas.background_color.to_color(), WHITE);
    }

    #[test]
    fn out_of_range_stroke_width_is_clamped() {
        let zero = write_config("[drawing]\nstroke_width = 0\n");
        assert_eq!(Config::load_from(zero.path()).unwrap().drawing.stroke_width, 1);

        let huge = write_config("[drawing]\nstroke_width = 5000\n");
        assert_eq!(
            Config::load_from(huge.path()).unwrap().drawing.stroke_width,
            MAX_STROKE_WIDTH
        );
    }

    #[test]
    fn invalid_toml_reports_path() {
        let file = write_config("[drawing\nstroke_width = 3");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn surface_starts_with_configured_style() {
        let file = write_config(
            r#"
            [drawing]
            default_tool = "rectangle"
            stroke_width = 7
            fill_shapes = false

            [canvas]
            background_color = "black"
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();
        let surface = DrawingSurface::from_config(&config);

        assert_eq!(surface.current_tool(), Tool::Rectangle);
        assert_eq!(surface.current_stroke_width(), 7);
        assert_eq!(surface.current_stroke_color(), BLACK);
        assert_eq!(surface.current_fill_color(), WHITE);
        assert!(!surface.fill_enabled());
        assert_eq!(surface.background_color(), BLACK);
        assert!(surface.canvas().is_empty());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("drawing"));
        assert!(schema.contains("background_color"));
    }
}
