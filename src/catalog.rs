//! Static font and pen catalogs.
//!
//! Both catalogs are plain data tables. Lookups never allocate and return
//! `'static` references, so the controller can hold "the current entry"
//! without copying descriptors around.

use crate::audio::SoundRef;
use crate::draw::FontDescriptor;
use crate::input::pen::{FontWeight, PenDescriptor};

/// A labelled group of fonts, shown as one section of the font picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontGroup {
    pub label: &'static str,
    pub options: &'static [FontDescriptor],
}

const HANDWRITING: &[FontDescriptor] = &[
    FontDescriptor {
        name: "Allura",
        family: "Allura, cursive",
        size: "2rem",
    },
    FontDescriptor {
        name: "Amatic SC",
        family: "Amatic SC, cursive",
        size: "2rem",
    },
    FontDescriptor {
        name: "Pacifico",
        family: "Pacifico, cursive",
        size: "1.6rem",
    },
    FontDescriptor {
        name: "Permanent Marker",
        family: "Permanent Marker, cursive",
        size: "1.2rem",
    },
];

const TYPEWRITER: &[FontDescriptor] = &[
    FontDescriptor {
        name: "Courier Prime",
        family: "Courier Prime, monospace",
        size: "1rem",
    },
    FontDescriptor {
        name: "Fira Mono",
        family: "Fira Mono, monospace",
        size: "1rem",
    },
    FontDescriptor {
        name: "Inconsolata",
        family: "Inconsolata, monospace",
        size: "1.1rem",
    },
    FontDescriptor {
        name: "Special Elite",
        family: "Special Elite, cursive",
        size: "1.1rem",
    },
];

static FONT_GROUPS: [FontGroup; 2] = [
    FontGroup {
        label: "Handwriting",
        options: HANDWRITING,
    },
    FontGroup {
        label: "Typewriter",
        options: TYPEWRITER,
    },
];

static PENS: [PenDescriptor; 4] = [
    PenDescriptor {
        name: "Ballpoint Pen",
        color: "black",
        opacity: 1.0,
        font_weight: FontWeight::Normal,
        sound: SoundRef::Ballpoint,
    },
    PenDescriptor {
        name: "Fountain Pen",
        color: "blue",
        opacity: 1.0,
        font_weight: FontWeight::Normal,
        sound: SoundRef::Fountain,
    },
    PenDescriptor {
        name: "Pencil",
        color: "gray",
        opacity: 0.7,
        font_weight: FontWeight::Normal,
        sound: SoundRef::Pencil,
    },
    PenDescriptor {
        name: "Marker",
        color: "red",
        opacity: 1.0,
        font_weight: FontWeight::Bold,
        sound: SoundRef::Marker,
    },
];

/// All font groups, in picker order.
pub fn font_groups() -> &'static [FontGroup] {
    &FONT_GROUPS
}

/// Every font across all groups, in picker order.
pub fn fonts() -> impl Iterator<Item = &'static FontDescriptor> {
    FONT_GROUPS.iter().flat_map(|group| group.options.iter())
}

/// The pen catalog, in picker order.
pub fn pens() -> &'static [PenDescriptor] {
    &PENS
}

/// Finds a font by display name or by font-stack family.
///
/// The family is accepted because it is the value a font picker submits;
/// the name is what a person types.
pub fn find_font(key: &str) -> Option<&'static FontDescriptor> {
    let key = key.trim();
    fonts().find(|font| font.name == key || font.family == key)
}

/// Finds a pen by name.
pub fn find_pen(name: &str) -> Option<&'static PenDescriptor> {
    let name = name.trim();
    PENS.iter().find(|pen| pen.name == name)
}

/// The label of the group containing `font`, if it is a catalog entry.
pub fn group_of(font: &FontDescriptor) -> Option<&'static str> {
    FONT_GROUPS
        .iter()
        .find(|group| group.options.contains(font))
        .map(|group| group.label)
}

/// Default font: the first "Typewriter" entry.
pub fn default_font() -> &'static FontDescriptor {
    &FONT_GROUPS[1].options[0]
}

/// Default pen: the first catalog entry.
pub fn default_pen() -> &'static PenDescriptor {
    &PENS[0]
}
