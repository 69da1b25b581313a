//! RGBA color type and the named ink colors used by the pen catalog.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use indexcard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let faded = red.with_alpha(0.7);
/// assert_eq!(faded.a, 0.7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with its alpha replaced.
    ///
    /// Pen opacity is applied this way so that ink and the paper underneath
    /// blend the same way the CSS `opacity` property would.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

// ============================================================================
// Ink colors (CSS named colors)
// ============================================================================

/// CSS `black`
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// CSS `blue`
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// CSS `gray` (128, 128, 128)
pub const GRAY: Color = Color {
    r: 128.0 / 255.0,
    g: 128.0 / 255.0,
    b: 128.0 / 255.0,
    a: 1.0,
};

/// CSS `red`
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Card paper.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Window background behind the card (Tailwind `indigo-800`).
pub const INDIGO: Color = Color {
    r: 55.0 / 255.0,
    g: 48.0 / 255.0,
    b: 163.0 / 255.0,
    a: 1.0,
};

/// Ruled lines under the title (Tailwind `red-600`).
pub const RULE_RED: Color = Color {
    r: 220.0 / 255.0,
    g: 38.0 / 255.0,
    b: 38.0 / 255.0,
    a: 1.0,
};
