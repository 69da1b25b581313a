//! Widget appearances for the card window.

use iced::border::Radius;
use iced::widget::{container, text_editor, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use indexcard::draw::color::{INDIGO, RULE_RED, WHITE};

pub fn to_iced(color: indexcard::draw::Color) -> Color {
    Color::from_rgba(
        color.r as f32,
        color.g as f32,
        color.b as f32,
        color.a as f32,
    )
}

const SELECTION: Color = Color {
    r: 0.4,
    g: 0.5,
    b: 0.9,
    a: 0.3,
};

/// Window background.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(to_iced(INDIGO))),
        ..Default::default()
    }
}

/// White rounded panel holding the controls.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(to_iced(WHITE))),
        text_color: Some(Color::BLACK),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::from(8.0),
        },
        shadow: Shadow::default(),
    }
}

/// The card itself: white paper with a drop shadow.
pub fn paper(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(to_iced(WHITE))),
        text_color: Some(Color::BLACK),
        border: Border::default(),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 18.0,
        },
    }
}

/// One of the two red lines under the title.
pub fn rule(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(to_iced(RULE_RED))),
        ..Default::default()
    }
}

fn faded(ink: Color) -> Color {
    Color {
        a: ink.a * 0.35,
        ..ink
    }
}

/// Borderless, transparent title surface drawn in the pen's ink.
pub fn ink_input(ink: Color) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: ink,
        placeholder: faded(ink),
        value: ink,
        selection: SELECTION,
    }
}

/// Body counterpart of [`ink_input`].
pub fn ink_editor(ink: Color) -> text_editor::Style {
    text_editor::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: ink,
        placeholder: faded(ink),
        value: ink,
        selection: SELECTION,
    }
}
