//! Render projection for the card.
//!
//! Turns [`CardState`] into the data a host needs to draw the widget: the
//! ink style shared by both text fields, the remaining-characters label, and
//! whether controls sit in a sidebar or a footer.

use crate::draw::{Color, font::ROOT_FONT_PX};
use crate::input::{CardState, FontWeight};

/// Heading shown above the controls.
pub const HEADING: &str = "Index Cards Demo";

/// Width (logical pixels) at and above which controls move into a sidebar.
pub const SIDEBAR_BREAKPOINT: f32 = 768.0;

/// Line height of the body rows (1.75rem).
pub const BODY_LINE_HEIGHT_PX: f32 = 1.75 * ROOT_FONT_PX;

/// Visible rows in the body field.
pub const BODY_ROWS: u16 = 7;

/// Where the selection controls are placed relative to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Column of controls left of the card (wide windows)
    Sidebar,
    /// Controls stacked under the card (narrow windows)
    Footer,
}

impl Layout {
    /// Picks the layout for a window of the given logical width.
    pub fn for_width(width: f32) -> Self {
        if width >= SIDEBAR_BREAKPOINT {
            Layout::Sidebar
        } else {
            Layout::Footer
        }
    }
}

/// Text styling applied to both card fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkStyle {
    /// Font stack identifier
    pub family: &'static str,
    /// Font size token
    pub size: &'static str,
    /// Resolved font size in logical pixels
    pub size_px: f32,
    /// CSS color name of the ink
    pub color_name: &'static str,
    /// Ink color with opacity applied
    pub color: Color,
    /// Ink opacity
    pub opacity: f32,
    /// Stroke weight
    pub weight: FontWeight,
}

impl InkStyle {
    /// Builds the style for the current font and pen.
    pub fn from_state(state: &CardState) -> Self {
        let font = state.current_font();
        let pen = state.current_pen();
        Self {
            family: font.family,
            size: font.size,
            size_px: font.size_px(ROOT_FONT_PX),
            color_name: pen.color,
            color: pen.ink(),
            opacity: pen.opacity,
            weight: pen.font_weight,
        }
    }

    /// The inline style declarations for a field.
    ///
    /// # Example
    /// `font-family: Courier Prime, monospace; font-size: 1rem; color: black; opacity: 1; font-weight: normal`
    pub fn css_declarations(&self) -> String {
        format!(
            "font-family: {}; font-size: {}; color: {}; opacity: {}; font-weight: {}",
            self.family, self.size, self.color_name, self.opacity, self.weight
        )
    }
}

/// Label under the controls, e.g. "Remaining characters: 238".
pub fn remaining_label(state: &CardState) -> String {
    format!("Remaining characters: {}", state.remaining_characters())
}

/// Everything a host draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub layout: Layout,
    pub ink: InkStyle,
    pub title: String,
    pub body: String,
    pub remaining_label: String,
    pub sound_enabled: bool,
    pub scale: f32,
    /// Text size shared by both fields, scale applied
    pub text_px: f32,
    /// Body line spacing, scale applied; fixed regardless of font size
    pub body_line_height_px: f32,
    /// Height of the body surface: `BODY_ROWS` lines
    pub body_height_px: f32,
}

impl CardView {
    /// Projects `state` for a window of the given logical width.
    pub fn project(state: &CardState, window_width: f32) -> Self {
        let ink = InkStyle::from_state(state);
        let body_line_height_px = BODY_LINE_HEIGHT_PX * state.scale;
        Self {
            layout: Layout::for_width(window_width),
            text_px: ink.size_px * state.scale,
            body_line_height_px,
            body_height_px: body_line_height_px * f32::from(BODY_ROWS),
            ink,
            title: state.title().to_owned(),
            body: state.body().to_owned(),
            remaining_label: remaining_label(state),
            sound_enabled: state.sound_enabled(),
            scale: state.scale,
        }
    }
}
