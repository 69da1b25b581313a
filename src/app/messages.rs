use std::fmt;

use iced::widget::text_editor;
use indexcard::catalog;
use indexcard::draw::FontDescriptor;
use indexcard::input::{Key, PenDescriptor};

#[derive(Debug, Clone)]
pub enum Message {
    FontSelected(FontChoice),
    PenSelected(PenChoice),
    SoundToggled(bool),
    TitleEdited(String),
    TitleSubmitted,
    BodyAction(text_editor::Action),
    /// A key press some focused widget consumed
    KeyPressed(Key),
    WindowResized(f32),
}

/// Font picker entry. Shows the group so the flat list keeps the catalog's sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontChoice(pub &'static FontDescriptor);

impl FontChoice {
    pub fn list() -> Vec<Self> {
        catalog::fonts().map(FontChoice).collect()
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match catalog::group_of(self.0) {
            Some(group) => write!(f, "{group} · {}", self.0.name),
            None => f.write_str(self.0.name),
        }
    }
}

/// Pen picker entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenChoice(pub &'static PenDescriptor);

impl PenChoice {
    pub fn list() -> Vec<Self> {
        catalog::pens().iter().map(PenChoice).collect()
    }
}

impl fmt::Display for PenChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}
