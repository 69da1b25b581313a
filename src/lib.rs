//! Library exports for the indexcard widget.
//!
//! Exposes the font and pen catalogs, the card input controller, the render
//! projection and the keystroke sound layer, so hosts other than the bundled
//! window (and the integration tests) can drive a card directly.

pub mod audio;
pub mod catalog;
pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
pub use input::CardState;
