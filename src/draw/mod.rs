//! Visual primitives shared by the render projection and the window.
//!
//! - [`Color`]: RGBA color representation with the named ink colors
//! - [`FontDescriptor`]: a typeface entry of the font catalog

pub mod color;
pub mod font;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
