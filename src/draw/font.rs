//! Font descriptor for the card's text surfaces.

/// Browser default root font size, used to resolve `rem` size tokens.
pub const ROOT_FONT_PX: f32 = 16.0;

/// One selectable typeface.
///
/// Describes the font stack and display size applied to both the title and
/// the body of the card. Descriptors live in the static catalog and are
/// never built at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Display name shown in the font picker (e.g., "Courier Prime")
    pub name: &'static str,

    /// Font stack identifier (e.g., "Courier Prime, monospace")
    pub family: &'static str,

    /// Display size token (e.g., "1rem", "1.6rem", "18px")
    pub size: &'static str,
}

impl FontDescriptor {
    /// Returns the first entry of the font stack, the face actually requested
    /// from the system before generic fallbacks.
    pub fn primary_family(&self) -> &'static str {
        self.family
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or(self.family)
    }

    /// Resolves the size token to logical pixels.
    ///
    /// Supports `rem`, `em` and `px` suffixes; a bare number is read as pixels.
    /// Unparseable tokens fall back to the root size.
    pub fn size_px(&self, root_px: f32) -> f32 {
        parse_size_token(self.size, root_px).unwrap_or_else(|| {
            log::warn!("Unparseable font size '{}', using {root_px}px", self.size);
            root_px
        })
    }
}

fn parse_size_token(token: &str, root_px: f32) -> Option<f32> {
    let token = token.trim();
    let (number, scale) = if let Some(value) = token.strip_suffix("rem") {
        (value, root_px)
    } else if let Some(value) = token.strip_suffix("em") {
        (value, root_px)
    } else if let Some(value) = token.strip_suffix("px") {
        (value, 1.0)
    } else {
        (token, 1.0)
    };

    number
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .map(|value| value * scale)
}
