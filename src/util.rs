//! Utility functions for color names and text normalisation.
//!
//! This module provides:
//! - CSS color-name lookup for pen inks
//! - Line-break stripping and character counting for the card fields

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by pen descriptors, whose colors are written as CSS names.
///
/// # Supported Names (case-insensitive)
/// - "black", "blue", "gray" / "grey", "red", "white"
///
/// # Returns
/// - `Some(Color)` if the name matches a known color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(BLACK),
        "blue" => Some(BLUE),
        "gray" | "grey" => Some(GRAY),
        "red" => Some(RED),
        "white" => Some(WHITE),
        _ => None,
    }
}

// ============================================================================
// Text Utilities
// ============================================================================

/// Returns true for characters that would start a new line in a field.
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Removes every line break from `text`.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !is_line_break(*c)).collect()
}

/// Length of `text` as the card fields count it (Unicode scalar values).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
