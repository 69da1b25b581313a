//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Card defaults.
///
/// Controls how the card looks when the window first opens. Users can change
/// font and pen at runtime from the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CardConfig {
    /// Starting font, by name ("Courier Prime") or font stack
    /// ("Courier Prime, monospace"). Must be a catalog entry.
    #[serde(default = "default_font")]
    pub font: String,

    /// Starting pen by name ("Ballpoint Pen", "Fountain Pen", "Pencil", "Marker")
    #[serde(default = "default_pen")]
    pub pen: String,

    /// Static scale factor applied to the card (valid range: 0.5 - 2.0)
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            font: default_font(),
            pen: default_pen(),
            scale: default_scale(),
        }
    }
}

/// Keystroke sound settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SoundConfig {
    /// Play a pen sound on every keystroke
    #[serde(default = "default_sound_enabled")]
    pub enabled: bool,

    /// Directory with replacement sounds (pen.wav, fountainpen.wav, pencil.wav,
    /// marker.wav). Files missing from the directory keep the built-in sound.
    #[serde(default)]
    pub sounds_dir: Option<PathBuf>,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
            sounds_dir: None,
        }
    }
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WindowConfig {
    /// Initial window width in logical pixels (valid range: 320 - 7680)
    #[serde(default = "default_window_width")]
    pub width: f32,

    /// Initial window height in logical pixels (valid range: 240 - 4320)
    #[serde(default = "default_window_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_font() -> String {
    "Courier Prime".to_string()
}

fn default_pen() -> String {
    "Ballpoint Pen".to_string()
}

fn default_scale() -> f32 {
    1.0
}

fn default_sound_enabled() -> bool {
    true
}

fn default_window_width() -> f32 {
    1024.0
}

fn default_window_height() -> f32 {
    640.0
}
