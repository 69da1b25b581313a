//! Pen selection.

use crate::audio::SoundRef;
use crate::draw::{Color, color::BLACK};
use crate::util;

/// Stroke weight a pen lays down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    /// CSS keyword for this weight.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simulated writing tool.
///
/// The pen decides how text on the card looks (ink color, opacity, weight)
/// and which sound each keystroke makes. Pens are catalog data; selecting a
/// pen only changes which descriptor is current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenDescriptor {
    /// Unique key and display name (e.g., "Ballpoint Pen")
    pub name: &'static str,
    /// Ink color as a CSS color name
    pub color: &'static str,
    /// Ink opacity in (0, 1]
    pub opacity: f32,
    /// Stroke weight
    pub font_weight: FontWeight,
    /// Sound asset played per keystroke
    pub sound: SoundRef,
}

impl PenDescriptor {
    /// Resolves the ink color with the pen's opacity applied.
    ///
    /// Unknown color names render black.
    pub fn ink(&self) -> Color {
        util::name_to_color(self.color)
            .unwrap_or_else(|| {
                log::warn!("Unknown ink color '{}', using black", self.color);
                BLACK
            })
            .with_alpha(f64::from(self.opacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::GRAY;

    #[test]
    fn test_ink_applies_opacity() {
        let pencil = PenDescriptor {
            name: "Pencil",
            color: "gray",
            opacity: 0.5,
            font_weight: FontWeight::Normal,
            sound: SoundRef::Pencil,
        };
        assert_eq!(pencil.ink(), GRAY.with_alpha(0.5));
    }

    #[test]
    fn test_ink_unknown_color_is_black() {
        let odd = PenDescriptor {
            name: "Odd",
            color: "chartreuse-ish",
            opacity: 1.0,
            font_weight: FontWeight::Bold,
            sound: SoundRef::Marker,
        };
        assert_eq!(odd.ink(), BLACK);
    }

    #[test]
    fn test_font_weight_display() {
        assert_eq!(FontWeight::Bold.to_string(), "bold");
        assert_eq!(FontWeight::Normal.as_str(), "normal");
    }
}
