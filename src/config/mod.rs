//! Configuration file support for indexcard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/indexcard/config.toml`. Settings include the starting font and
//! pen, the card scale, keystroke sound preferences, and the initial window size.
//!
//! If no config file exists, the catalog defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CardConfig, SoundConfig, WindowConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::CueSink;
use crate::catalog;
use crate::input::CardState;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [card]
/// font = "Courier Prime"
/// pen = "Ballpoint Pen"
/// scale = 1.0
///
/// [sound]
/// enabled = true
///
/// [window]
/// width = 1024.0
/// height = 640.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting font, pen and card scale
    #[serde(default)]
    pub card: CardConfig,

    /// Keystroke sound settings
    #[serde(default)]
    pub sound: SoundConfig,

    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced with the nearest valid value (or the catalog
    /// default) and a warning is logged.
    ///
    /// Validated values:
    /// - `card.font`: must name a catalog font
    /// - `card.pen`: must name a catalog pen
    /// - `card.scale`: 0.5 - 2.0
    /// - `window.width`: 320 - 7680
    /// - `window.height`: 240 - 4320
    pub fn validate_and_clamp(&mut self) {
        if catalog::find_font(&self.card.font).is_none() {
            log::warn!(
                "Unknown font '{}', falling back to '{}'",
                self.card.font,
                catalog::default_font().name
            );
            self.card.font = catalog::default_font().name.to_string();
        }

        if catalog::find_pen(&self.card.pen).is_none() {
            log::warn!(
                "Unknown pen '{}', falling back to '{}'",
                self.card.pen,
                catalog::default_pen().name
            );
            self.card.pen = catalog::default_pen().name.to_string();
        }

        // Scale: 0.5 - 2.0
        if !(0.5..=2.0).contains(&self.card.scale) {
            log::warn!(
                "Invalid card scale {:.2}, clamping to 0.5-2.0 range",
                self.card.scale
            );
            self.card.scale = if self.card.scale.is_nan() {
                1.0
            } else {
                self.card.scale.clamp(0.5, 2.0)
            };
        }

        if !(320.0..=7680.0).contains(&self.window.width) {
            log::warn!(
                "Invalid window width {:.0}, clamping to 320-7680 range",
                self.window.width
            );
            self.window.width = if self.window.width.is_nan() {
                1024.0
            } else {
                self.window.width.clamp(320.0, 7680.0)
            };
        }

        if !(240.0..=4320.0).contains(&self.window.height) {
            log::warn!(
                "Invalid window height {:.0}, clamping to 240-4320 range",
                self.window.height
            );
            self.window.height = if self.window.height.is_nan() {
                640.0
            } else {
                self.window.height.clamp(240.0, 4320.0)
            };
        }
    }

    /// Builds a card with this configuration's starting selections.
    ///
    /// Names that are not catalog entries fall back to the catalog defaults.
    pub fn build_card_state(&self, cues: Box<dyn CueSink>) -> CardState {
        let font = catalog::find_font(&self.card.font).unwrap_or_else(catalog::default_font);
        let pen = catalog::find_pen(&self.card.pen).unwrap_or_else(catalog::default_pen);
        CardState::with_defaults(font, pen, self.sound.enabled, self.card.scale, cues)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/indexcard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("indexcard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
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

    /// Loads configuration from an explicit path, or returns defaults if the
    /// file does not exist. Loaded values are validated and clamped.
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

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
