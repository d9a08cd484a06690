//! Configuration file support for waymeasure.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/waymeasure/config.toml`. Settings
//! include pen defaults, grid and canvas appearance, measurement label
//! formatting, performance tuning, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::StatusPosition;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CanvasConfig, DrawingConfig, GridConfig, HelpOverlayStyle, MeasurementConfig,
    PerformanceConfig, StatusBarStyle, UiConfig,
};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use enums::ColorSpec;
#[allow(unused_imports)]
pub use keybindings::KeybindingError;

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not specified
/// in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_thickness = 2.0
///
/// [grid]
/// spacing = 20.0
///
/// [canvas]
/// width = 1140
/// height = 700
///
/// [measurement]
/// unit = "px"
/// precision = 1
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct Config {
    /// Pen and label defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Reference grid appearance
    #[serde(default)]
    pub grid: GridConfig,

    /// Canvas sheet size and colors
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Measurement label formatting
    #[serde(default)]
    pub measurement: MeasurementConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcut assignments
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Ensures that user-provided config values won't cause rendering issues.
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `label_font_size`: 8.0 - 72.0
    /// - `grid.spacing`: 4.0 - 200.0
    /// - `canvas.width`/`canvas.height`: 200 - 8192
    /// - `measurement.precision`: 0 - 3
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 20.0);
        }

        // Label font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.drawing.label_font_size) {
            log::warn!(
                "Invalid label_font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.label_font_size
            );
            self.drawing.label_font_size = self.drawing.label_font_size.clamp(8.0, 72.0);
        }

        // Grid spacing: 4.0 - 200.0
        if !(4.0..=200.0).contains(&self.grid.spacing) {
            log::warn!(
                "Invalid grid spacing {:.1}, clamping to 4.0-200.0 range",
                self.grid.spacing
            );
            self.grid.spacing = self.grid.spacing.clamp(4.0, 200.0);
        }

        // Canvas dimensions: 200 - 8192
        if !(200..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 200-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(200, 8192);
        }
        if !(200..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 200-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(200, 8192);
        }

        // Label precision: 0 - 3 decimals
        if self.measurement.precision > 3 {
            log::warn!(
                "Invalid measurement precision {}, clamping to 0-3 range",
                self.measurement.precision
            );
            self.measurement.precision = 3;
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        // Color arrays: every component in 0.0-1.0
        clamp_rgba("grid.color", &mut self.grid.color);
        clamp_rgba("canvas.background", &mut self.canvas.background);
        clamp_rgba("canvas.scrim", &mut self.canvas.scrim);
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/waymeasure/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("waymeasure");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/waymeasure/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/waymeasure/config.toml`. Creates the parent directory if it
    /// doesn't exist. This method is kept for future use (e.g., runtime config
    /// editing).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

fn clamp_rgba(name: &str, rgba: &mut [f64; 4]) {
    for (i, component) in rgba.iter_mut().enumerate() {
        if !(0.0..=1.0).contains(component) {
            log::warn!(
                "Invalid {}[{}] = {:.3}, clamping to 0.0-1.0",
                name,
                i,
                component
            );
            *component = component.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_config_yields_defaults() {
        let file = write_config("");
        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.canvas.width, 1140);
        assert_eq!(config.canvas.height, 700);
        assert_eq!(config.grid.spacing, 20.0);
        assert_eq!(config.measurement.unit, "px");
        assert!(config.ui.show_status_bar);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let file = write_config(
            r#"
            [drawing]
            default_thickness = 99.0

            [grid]
            spacing = 1.0

            [canvas]
            width = 50

            [measurement]
            precision = 9

            [performance]
            buffer_count = 10
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.drawing.default_thickness, 20.0);
        assert_eq!(config.grid.spacing, 4.0);
        assert_eq!(config.canvas.width, 200);
        assert_eq!(config.measurement.precision, 3);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let file = write_config("[drawing\ndefault_thickness = 2.0");
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn color_arrays_clamp_components() {
        let file = write_config(
            r#"
            [grid]
            color = [2.0, -1.0, 0.5, 1.0]
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.grid.color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn custom_keybindings_round_trip() {
        let file = write_config(
            r#"
            [keybindings]
            exit = ["Ctrl+D"]
            "#,
        );
        let config = Config::load_from(file.path()).unwrap();
        let map = config.keybindings.build_action_map().unwrap();

        let ctrl_d = KeyBinding::parse("Ctrl+D").unwrap();
        assert_eq!(map.get(&ctrl_d), Some(&Action::Exit));

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), None);
    }
}
