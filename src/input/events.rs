//! Generic input event types shared by hosts and the controller.

/// Generic key representation.
///
/// Hosts map their native key codes to these values. Only the distinction
/// between `Return` and everything else matters for cues; the rest decides
/// what a key commits to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Space bar
    Space,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Cursor movement (arrows, Home, End, Page Up/Down)
    Navigation,
    /// Paste shortcut; the clipboard text arrives as one keystroke
    Paste,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Returns true for the key that would insert a line break.
    pub fn is_enter(&self) -> bool {
        matches!(self, Key::Return | Key::Char('\n') | Key::Char('\r'))
    }

    /// Maps a typed character to its key.
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => Key::Space,
            '\n' | '\r' => Key::Return,
            '\t' => Key::Tab,
            c => Key::Char(c),
        }
    }
}

/// The two text surfaces on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Single-line heading above the ruled lines
    Title,
    /// Main writing area
    Body,
}

/// What the host should do with a key after the key-down handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Let the key take its normal effect on the field
    Proceed,
    /// Swallow the key (default behavior prevented)
    Suppressed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_detection() {
        assert!(Key::Return.is_enter());
        assert!(Key::Char('\n').is_enter());
        assert!(!Key::Char('a').is_enter());
        assert!(!Key::Space.is_enter());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char(' '), Key::Space);
        assert_eq!(Key::from_char('\n'), Key::Return);
        assert_eq!(Key::from_char('x'), Key::Char('x'));
    }
}
