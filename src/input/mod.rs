//! Card input handling.
//!
//! This module turns host keyboard events into card edits and sound cues.
//! It holds the current font and pen selections, the two bounded text
//! fields, and the key-down policy shared by both fields (no line breaks,
//! one cue per keystroke).

pub mod events;
pub mod field;
pub mod pen;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Field, Key, KeyDisposition};
pub use field::{BODY_MAX_CHARS, BoundedText, TITLE_MAX_CHARS};
pub use pen::{FontWeight, PenDescriptor};
pub use state::CardState;
