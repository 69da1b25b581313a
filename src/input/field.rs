//! Length-bounded, single-paragraph text fields.

use crate::util::{char_len, is_line_break, strip_line_breaks};

/// Maximum length of the title field.
pub const TITLE_MAX_CHARS: usize = 26;

/// Maximum length of the body field.
pub const BODY_MAX_CHARS: usize = 240;

/// A text surface that refuses input past its maximum length.
///
/// Like a native input with `maxlength`, the field itself enforces the limit:
/// extra characters are silently dropped rather than reported. Line breaks
/// are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    text: String,
    max_chars: usize,
}

impl BoundedText {
    pub fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            max_chars,
        }
    }

    pub fn title() -> Self {
        Self::new(TITLE_MAX_CHARS)
    }

    pub fn body() -> Self {
        Self::new(BODY_MAX_CHARS)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Characters that can still be added.
    pub fn remaining(&self) -> usize {
        self.max_chars.saturating_sub(self.len())
    }

    /// Appends one character; returns false if it was refused.
    pub fn insert(&mut self, c: char) -> bool {
        if is_line_break(c) || self.remaining() == 0 {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Appends as much of `text` as fits, with line breaks removed.
    ///
    /// Returns the number of characters accepted.
    pub fn insert_str(&mut self, text: &str) -> usize {
        let room = self.remaining();
        let accepted: String = strip_line_breaks(text).chars().take(room).collect();
        let count = char_len(&accepted);
        self.text.push_str(&accepted);
        count
    }

    /// Removes the last character; returns false if the field was empty.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Replaces the whole content.
    ///
    /// Content that is too long or contains a line break is refused and the
    /// field keeps its previous value. Returns whether the value changed.
    pub fn replace(&mut self, text: &str) -> bool {
        if text.chars().any(is_line_break) || char_len(text) > self.max_chars {
            return false;
        }
        if self.text == text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        true
    }
}
