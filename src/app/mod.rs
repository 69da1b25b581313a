//! Desktop window hosting one index card.

mod messages;
mod style;

use std::sync::Arc;

use iced::alignment::Horizontal;
use iced::font::{self, Font};
use iced::keyboard::{self, key::Named};
use iced::widget::text::LineHeight;
use iced::widget::text_editor::Edit;
use iced::widget::{
    Column, Space, checkbox, column, container, pick_list, row, text, text_editor, text_input,
};
use iced::{Element, Event, Length, Padding, Pixels, Size, Subscription, Task, Theme, event, window};

use indexcard::Config;
use indexcard::audio::{CuePlayer, CueSink, SilentSink, SoundBank};
use indexcard::input::{CardState, Field, FontWeight, Key, KeyDisposition, TITLE_MAX_CHARS};
use indexcard::ui::{self, CardView, Layout};
use indexcard::util::{char_len, strip_line_breaks};

use messages::{FontChoice, Message, PenChoice};
use style::to_iced;

/// Unscaled card width (16:9 card, like a landscape index card).
const CARD_WIDTH: f32 = 560.0;

/// Sidebar width in the wide layout.
const SIDEBAR_WIDTH: f32 = 256.0;

/// Padding inside the body editor.
const BODY_PADDING: f32 = 8.0;

/// Startup data for the window.
pub struct Flags {
    pub config: Config,
    /// Runtime that cue tasks are spawned on; owned by the caller
    pub runtime: tokio::runtime::Handle,
}

pub fn run(flags: Flags) -> iced::Result {
    let size = Size::new(flags.config.window.width, flags.config.window.height);

    iced::application(CardApp::title, CardApp::update, CardApp::view)
        .subscription(CardApp::subscription)
        .theme(CardApp::theme)
        .window_size(size)
        .resizable(true)
        .run_with(move || CardApp::new(flags))
}

pub struct CardApp {
    card: CardState,
    body_editor: text_editor::Content,
    window_width: f32,
    /// Field whose widget already reported the key press currently in flight
    keyed_field: Option<Field>,
}

impl CardApp {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { config, runtime } = flags;
        let cues = open_cue_sink(&config, &runtime);
        let card = config.build_card_state(cues);

        let app = Self {
            card,
            body_editor: text_editor::Content::new(),
            window_width: config.window.width,
            keyed_field: None,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Index Cards".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FontSelected(choice) => {
                self.card.select_font(choice.0.name);
            }
            Message::PenSelected(choice) => {
                self.card.select_pen(choice.0.name);
            }
            Message::SoundToggled(enabled) => {
                if enabled != self.card.sound_enabled() {
                    self.card.toggle_sound();
                }
            }
            Message::TitleEdited(value) => {
                self.keyed_field = Some(Field::Title);
                self.apply_title_edit(&value);
            }
            Message::TitleSubmitted => {
                // Enter in the title: swallowed, no cue
                self.keyed_field = Some(Field::Title);
                self.card.on_title_keystroke(Key::Return);
            }
            Message::BodyAction(action) => self.apply_body_action(action),
            Message::KeyPressed(key) => {
                // Keys that edited a field were handled with that edit. The
                // body editor reports every key it consumes, so a consumed
                // key nobody reported belongs to the title input.
                if self.keyed_field.take().is_none() {
                    self.card.on_title_keystroke(key);
                }
            }
            Message::WindowResized(width) => {
                self.window_width = width;
            }
        }

        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::resize_events().map(|(_id, size)| Message::WindowResized(size.width)),
            event::listen_with(|event, status, _window| match (event, status) {
                (
                    Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                    event::Status::Captured,
                ) => Some(Message::KeyPressed(keyboard_key(&key))),
                _ => None,
            }),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        let view = CardView::project(&self.card, self.window_width);

        let heading = text(ui::HEADING).size(24).font(Font {
            weight: font::Weight::Bold,
            ..Font::MONOSPACE
        });

        let card_area = container(self.card_view(&view)).center(Length::Fill);

        let content: Element<'_, Message> = match view.layout {
            Layout::Sidebar => {
                let sidebar = container(
                    column![heading, self.controls_view(&view)]
                        .spacing(20)
                        .width(Length::Fill),
                )
                .width(Length::Fixed(SIDEBAR_WIDTH))
                .height(Length::Fill)
                .padding(16)
                .style(style::panel);

                row![sidebar, card_area].spacing(16).into()
            }
            Layout::Footer => {
                let header = container(heading)
                    .width(Length::Fill)
                    .padding(16)
                    .style(style::panel);
                let footer = container(self.controls_view(&view).width(Length::Fill))
                    .width(Length::Fill)
                    .padding(24)
                    .style(style::panel);

                column![header, card_area, footer].spacing(16).into()
            }
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16)
            .style(style::backdrop)
            .into()
    }

    fn controls_view(&self, view: &CardView) -> Column<'_, Message> {
        let font_pick = pick_list(
            FontChoice::list(),
            Some(FontChoice(self.card.current_font())),
            Message::FontSelected,
        )
        .width(Length::Fill);

        let pen_pick = pick_list(
            PenChoice::list(),
            Some(PenChoice(self.card.current_pen())),
            Message::PenSelected,
        )
        .width(Length::Fill);

        column![
            column![text("Font:").size(14), font_pick].spacing(4),
            column![text("Pen:").size(14), pen_pick].spacing(4),
            checkbox("Sound", view.sound_enabled).on_toggle(Message::SoundToggled),
            text(view.remaining_label.clone()).size(14),
        ]
        .spacing(12)
    }

    fn card_view(&self, view: &CardView) -> Element<'_, Message> {
        let scale = view.scale;
        let face = Font {
            family: font::Family::Name(self.card.current_font().primary_family()),
            weight: match view.ink.weight {
                FontWeight::Bold => font::Weight::Bold,
                FontWeight::Normal => font::Weight::Normal,
            },
            ..Font::DEFAULT
        };
        let ink = to_iced(view.ink.color);

        let title = text_input("", self.card.title())
            .on_input(Message::TitleEdited)
            .on_submit(Message::TitleSubmitted)
            .font(face)
            .size(view.text_px)
            .padding([4, 8])
            .style(move |_theme, _status| style::ink_input(ink));

        let rule = || {
            container(Space::new(Length::Fill, Length::Fixed(2.0 * scale)))
                .width(Length::Fill)
                .style(style::rule)
        };

        let body = text_editor(&self.body_editor)
            .on_action(Message::BodyAction)
            .font(face)
            .size(view.text_px)
            .line_height(LineHeight::Absolute(Pixels(view.body_line_height_px)))
            .height(Length::Fixed(view.body_height_px + 2.0 * BODY_PADDING))
            .padding(BODY_PADDING)
            .style(move |_theme, _status| style::ink_editor(ink));

        let lines = column![
            title,
            rule(),
            Space::with_height(Length::Fixed(2.0 * scale)),
            rule(),
            body,
        ]
        .width(Length::Fill);

        container(lines)
            .width(Length::Fixed(CARD_WIDTH * scale))
            .padding(Padding {
                top: 16.0 * scale,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            })
            .align_x(Horizontal::Left)
            .style(style::paper)
            .into()
    }

    /// Runs a title input change through the key-down policy, keeping at
    /// most as much of the inserted text as fits.
    fn apply_title_edit(&mut self, value: &str) {
        let key = inferred_key(self.card.title(), value);
        if self.card.on_title_keystroke(key) == KeyDisposition::Suppressed {
            return;
        }

        let accepted = fit_title_edit(self.card.title(), value, TITLE_MAX_CHARS);
        self.card.replace_text(Field::Title, &accepted);
    }

    /// Runs one editor action through the card's key-down policy and limits.
    fn apply_body_action(&mut self, action: text_editor::Action) {
        let Some(key) = body_key(&action) else {
            // Pointer actions (click, drag, scroll) never count as keystrokes
            self.body_editor.perform(action);
            return;
        };
        self.keyed_field = Some(Field::Body);

        if self.card.on_body_keystroke(key) == KeyDisposition::Suppressed {
            return;
        }

        let selected = self
            .body_editor
            .selection()
            .map(|selection| char_len(&selection))
            .unwrap_or(0);
        let room = self.card.remaining_characters() + selected;

        let action = match action {
            text_editor::Action::Edit(Edit::Insert(_)) if room == 0 => return,
            text_editor::Action::Edit(Edit::Paste(pasted)) => {
                text_editor::Action::Edit(Edit::Paste(Arc::new(fit_paste(&pasted, room))))
            }
            other => other,
        };

        self.body_editor.perform(action);
        self.sync_body();
    }

    /// Copies the editor's text into the card, rolling the editor back if the
    /// card refuses it.
    fn sync_body(&mut self) {
        let text = strip_line_breaks(&self.body_editor.text());
        if text != self.card.body() && !self.card.replace_text(Field::Body, &text) {
            log::debug!("Body edit refused, restoring editor content");
            self.body_editor = text_editor::Content::with_text(self.card.body());
        }
    }
}

fn open_cue_sink(config: &Config, runtime: &tokio::runtime::Handle) -> Box<dyn CueSink> {
    let bank = match &config.sound.sounds_dir {
        Some(dir) => SoundBank::with_overrides(dir).unwrap_or_else(|err| {
            log::warn!("{err}; using built-in sounds");
            SoundBank::embedded()
        }),
        None => SoundBank::embedded(),
    };

    match CuePlayer::new(runtime, bank) {
        Ok(player) => Box::new(player),
        Err(err) => {
            log::warn!("{err}; keystroke sounds disabled");
            Box::new(SilentSink)
        }
    }
}

/// The part of a text input change that differs between `old` and `new`.
struct Splice {
    /// Unchanged leading characters
    prefix: usize,
    /// Unchanged trailing characters
    suffix: usize,
    /// Characters of `old` replaced by the edit
    removed: usize,
    inserted: String,
}

fn splice(old: &str, new: &str) -> Splice {
    let old_len = char_len(old);
    let new_len = char_len(new);

    let prefix = old
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old
        .chars()
        .rev()
        .zip(new.chars().rev())
        .take_while(|(a, b)| a == b)
        .count()
        .min(old_len.min(new_len) - prefix);

    Splice {
        prefix,
        suffix,
        removed: old_len - prefix - suffix,
        inserted: new.chars().skip(prefix).take(new_len - prefix - suffix).collect(),
    }
}

/// Works out which key produced a text-input edit from the old and new values.
fn inferred_key(old: &str, new: &str) -> Key {
    let edit = splice(old, new);
    let mut inserted = edit.inserted.chars();
    match (inserted.next(), inserted.next()) {
        (None, _) if edit.removed > 0 => Key::Backspace,
        (None, _) => Key::Unknown,
        (Some(c), None) => Key::from_char(c),
        (Some(_), Some(_)) => Key::Paste,
    }
}

/// The title value to keep after an input change: line breaks dropped and the
/// inserted text cut to the room left once the untouched text is counted.
fn fit_title_edit(old: &str, new: &str, max_chars: usize) -> String {
    let edit = splice(old, new);
    let room = max_chars.saturating_sub(edit.prefix + edit.suffix);

    let mut accepted: String = old.chars().take(edit.prefix).collect();
    accepted.push_str(&fit_paste(&edit.inserted, room));
    accepted.extend(old.chars().skip(char_len(old) - edit.suffix));
    accepted
}

/// Maps an editor action to the key that caused it; pointer actions have none.
fn body_key(action: &text_editor::Action) -> Option<Key> {
    match action {
        text_editor::Action::Edit(Edit::Insert(c)) => Some(Key::from_char(*c)),
        text_editor::Action::Edit(Edit::Enter) => Some(Key::Return),
        text_editor::Action::Edit(Edit::Backspace) => Some(Key::Backspace),
        text_editor::Action::Edit(Edit::Delete) => Some(Key::Delete),
        text_editor::Action::Edit(Edit::Paste(_)) => Some(Key::Paste),
        text_editor::Action::Move(_) | text_editor::Action::Select(_) => Some(Key::Navigation),
        _ => None,
    }
}

/// Maps a window key press to the card's key.
fn keyboard_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Character(c) => c.as_str().chars().next().map_or(Key::Unknown, Key::from_char),
        keyboard::Key::Named(named) => match named {
            Named::Enter => Key::Return,
            Named::Space => Key::Space,
            Named::Backspace => Key::Backspace,
            Named::Delete => Key::Delete,
            Named::Tab => Key::Tab,
            Named::Escape => Key::Escape,
            Named::Shift => Key::Shift,
            Named::Control => Key::Ctrl,
            Named::Alt => Key::Alt,
            Named::ArrowUp
            | Named::ArrowDown
            | Named::ArrowLeft
            | Named::ArrowRight
            | Named::Home
            | Named::End
            | Named::PageUp
            | Named::PageDown => Key::Navigation,
            _ => Key::Unknown,
        },
        keyboard::Key::Unidentified => Key::Unknown,
    }
}

/// Pasted text as the body would accept it: one line, at most `room` characters.
fn fit_paste(pasted: &str, room: usize) -> String {
    strip_line_breaks(pasted).chars().take(room).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use iced::widget::text_editor::{Action, Motion};
    use indexcard::audio::RecordingSink;

    fn app_with_sink() -> (CardApp, RecordingSink) {
        let sink = RecordingSink::new();
        let app = CardApp {
            card: CardState::new(Box::new(sink.clone())),
            body_editor: text_editor::Content::new(),
            window_width: 1024.0,
            keyed_field: None,
        };
        (app, sink)
    }

    #[test]
    fn test_inferred_key() {
        assert_eq!(inferred_key("ab", "abc"), Key::Char('c'));
        assert_eq!(inferred_key("ac", "abc"), Key::Char('b'));
        assert_eq!(inferred_key("abc", "ab"), Key::Backspace);
        assert_eq!(inferred_key("ab", "ab "), Key::Space);
        assert_eq!(inferred_key("ab", "ab"), Key::Unknown);
        assert_eq!(inferred_key("", "\nabc"), Key::Paste);
    }

    #[test]
    fn test_body_key_mapping() {
        assert_eq!(body_key(&Action::Edit(Edit::Enter)), Some(Key::Return));
        assert_eq!(body_key(&Action::Edit(Edit::Insert('x'))), Some(Key::Char('x')));
        assert_eq!(
            body_key(&Action::Edit(Edit::Paste(Arc::new("x".to_string())))),
            Some(Key::Paste)
        );
        assert_eq!(body_key(&Action::Move(Motion::Left)), Some(Key::Navigation));
        assert_eq!(body_key(&Action::Click(Point::ORIGIN)), None);
    }

    #[test]
    fn test_keyboard_key_mapping() {
        assert_eq!(keyboard_key(&keyboard::Key::Named(Named::Enter)), Key::Return);
        assert_eq!(keyboard_key(&keyboard::Key::Named(Named::ArrowLeft)), Key::Navigation);
        assert_eq!(keyboard_key(&keyboard::Key::Named(Named::Control)), Key::Ctrl);
        assert_eq!(keyboard_key(&keyboard::Key::Character("q".into())), Key::Char('q'));
        assert_eq!(keyboard_key(&keyboard::Key::Unidentified), Key::Unknown);
    }

    #[test]
    fn test_fit_paste() {
        assert_eq!(fit_paste("a\nb\nc", 10), "abc");
        assert_eq!(fit_paste("abcdef", 3), "abc");
        assert_eq!(fit_paste("abc", 0), "");
    }

    #[test]
    fn test_fit_title_edit_truncates_paste() {
        let long = "x".repeat(30);
        assert_eq!(fit_title_edit("", &long, TITLE_MAX_CHARS), "x".repeat(26));
        assert_eq!(fit_title_edit("Hi", "Hi\nthere", TITLE_MAX_CHARS), "Hithere");
        assert_eq!(fit_title_edit("abc", "abXc", 3), "abc");
        assert_eq!(fit_title_edit("ab", "aXYZb", 4), "aXYb");
        // Pasting over a selection frees the selected characters
        assert_eq!(fit_title_edit("Hello world", "Hello there", 11), "Hello there");
        assert_eq!(fit_title_edit("abc", "ab", 26), "ab");
    }

    #[test]
    fn test_title_paste_keeps_what_fits() {
        let (mut app, sink) = app_with_sink();
        let pasted = "y".repeat(30);

        let _ = app.update(Message::TitleEdited(pasted));

        assert_eq!(app.card.title(), "y".repeat(26));
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn test_title_navigation_keys_cue_once() {
        let (mut app, sink) = app_with_sink();

        // Arrow in the title: only the window reports it
        let _ = app.update(Message::KeyPressed(Key::Navigation));
        assert_eq!(sink.count(), 1);

        // Typed character: the input reports it, then the window does
        let _ = app.update(Message::TitleEdited("a".to_string()));
        let _ = app.update(Message::KeyPressed(Key::Char('a')));
        assert_eq!(sink.count(), 2);
        assert_eq!(app.card.title(), "a");

        // Enter: submitted, never cued
        let _ = app.update(Message::TitleSubmitted);
        let _ = app.update(Message::KeyPressed(Key::Return));
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_body_keys_are_not_cued_twice() {
        let (mut app, sink) = app_with_sink();

        let _ = app.update(Message::BodyAction(Action::Edit(Edit::Insert('h'))));
        let _ = app.update(Message::KeyPressed(Key::Char('h')));
        let _ = app.update(Message::BodyAction(Action::Move(Motion::Left)));
        let _ = app.update(Message::KeyPressed(Key::Navigation));

        assert_eq!(sink.count(), 2);
        assert_eq!(app.card.body(), "h");
        assert_eq!(app.card.body_length(), 1);
    }

    #[test]
    fn test_font_choice_label_includes_group() {
        let choice = FontChoice(indexcard::catalog::default_font());
        assert_eq!(choice.to_string(), "Typewriter · Courier Prime");
        assert_eq!(FontChoice::list().len(), 8);
        assert_eq!(PenChoice::list()[3].to_string(), "Marker");
    }
}
