//! Card editor state and the selection/cue operations.

use crate::audio::{Cue, CueSink};
use crate::catalog;
use crate::draw::FontDescriptor;
use crate::input::events::Field;
use crate::input::field::BoundedText;
use crate::input::pen::PenDescriptor;

/// Main card state: the current selections, both text fields, and the cue
/// sink keystrokes play through.
///
/// One instance exists per card widget. It is only touched from the UI
/// thread, so nothing here is shared or locked; cue playback is the only
/// work that leaves the thread, and it does so detached.
pub struct CardState {
    /// Font applied to both fields (always a catalog entry)
    current_font: &'static FontDescriptor,
    /// Pen applied to both fields (always a catalog entry)
    current_pen: &'static PenDescriptor,
    /// Global mute switch for keystroke cues
    sound_enabled: bool,
    /// Length of the body text, recomputed on every body change
    body_length: usize,
    /// Title surface (max 26 characters)
    title: BoundedText,
    /// Body surface (max 240 characters)
    body: BoundedText,
    /// Static scale factor applied to the card when rendered
    pub scale: f32,
    /// Where cues go
    cues: Box<dyn CueSink>,
}

impl CardState {
    /// Creates a card with the catalog defaults: first "Typewriter" font,
    /// first pen, sound on, empty fields.
    pub fn new(cues: Box<dyn CueSink>) -> Self {
        Self::with_defaults(catalog::default_font(), catalog::default_pen(), true, 1.0, cues)
    }

    /// Creates a card with specified starting selections.
    ///
    /// # Arguments
    /// * `font` - Initial font (a catalog entry)
    /// * `pen` - Initial pen (a catalog entry)
    /// * `sound_enabled` - Whether keystroke cues start unmuted
    /// * `scale` - Card scale factor
    /// * `cues` - Sink receiving keystroke cues
    pub fn with_defaults(
        font: &'static FontDescriptor,
        pen: &'static PenDescriptor,
        sound_enabled: bool,
        scale: f32,
        cues: Box<dyn CueSink>,
    ) -> Self {
        Self {
            current_font: font,
            current_pen: pen,
            sound_enabled,
            body_length: 0,
            title: BoundedText::title(),
            body: BoundedText::body(),
            scale,
            cues,
        }
    }

    pub fn current_font(&self) -> &'static FontDescriptor {
        self.current_font
    }

    pub fn current_pen(&self) -> &'static PenDescriptor {
        self.current_pen
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Length of the body text as of the last body change.
    pub fn body_length(&self) -> usize {
        self.body_length
    }

    /// Characters left in the body field (`240 - body_length`).
    pub fn remaining_characters(&self) -> usize {
        self.body.max_chars().saturating_sub(self.body_length)
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    pub(super) fn field_mut(&mut self, field: Field) -> &mut BoundedText {
        match field {
            Field::Title => &mut self.title,
            Field::Body => &mut self.body,
        }
    }

    /// Selects a font by name or font-stack family.
    ///
    /// Names outside the catalog are ignored and the current font is kept.
    /// Returns whether the current font changed.
    pub fn select_font(&mut self, name: &str) -> bool {
        let Some(font) = catalog::find_font(name) else {
            log::debug!("Ignoring unknown font '{name}'");
            return false;
        };

        if font == self.current_font {
            return false;
        }

        self.current_font = font;
        log::debug!("Font set to {} ({})", font.name, font.size);
        true
    }

    /// Selects a pen by name.
    ///
    /// Names outside the catalog are ignored and the current pen is kept.
    /// Returns whether the current pen changed.
    pub fn select_pen(&mut self, name: &str) -> bool {
        let Some(pen) = catalog::find_pen(name) else {
            log::debug!("Ignoring unknown pen '{name}'");
            return false;
        };

        if pen == self.current_pen {
            return false;
        }

        self.current_pen = pen;
        log::debug!("Pen set to {}", pen.name);
        true
    }

    /// Flips the mute switch and returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        log::debug!(
            "Keystroke sound {}",
            if self.sound_enabled { "on" } else { "off" }
        );
        self.sound_enabled
    }

    /// Recomputes the body length from the field's committed text.
    ///
    /// The body field refuses characters past its maximum, so the length
    /// stays within bounds without any clamping here.
    pub fn on_body_change(&mut self, new_text: &str) {
        self.body_length = new_text.chars().count();
    }

    /// Creates a fresh cue for the current pen and starts it when sound is on.
    pub fn play_cue(&self) {
        let cue = Cue::new(self.current_pen.sound);
        if self.sound_enabled {
            self.cues.start(cue);
        }
    }
}
