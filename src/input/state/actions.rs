use crate::input::events::{Field, Key, KeyDisposition};

use super::CardState;

impl CardState {
    /// Key-down handler for the title field.
    ///
    /// Enter is swallowed without a sound so the title stays on one line.
    /// Every other key plays a cue before its character reaches the field,
    /// so the cue reflects intent to type even when the field is full.
    pub fn on_title_keystroke(&self, key: Key) -> KeyDisposition {
        self.keystroke(key)
    }

    /// Key-down handler for the body field.
    ///
    /// Same contract as the title: the body never takes line breaks, even
    /// though it spans several rows.
    pub fn on_body_keystroke(&self, key: Key) -> KeyDisposition {
        self.keystroke(key)
    }

    fn key_down(&self, field: Field, key: Key) -> KeyDisposition {
        match field {
            Field::Title => self.on_title_keystroke(key),
            Field::Body => self.on_body_keystroke(key),
        }
    }

    fn keystroke(&self, key: Key) -> KeyDisposition {
        if key.is_enter() {
            return KeyDisposition::Suppressed;
        }
        self.play_cue();
        KeyDisposition::Proceed
    }

    /// Processes a key press on one of the fields.
    ///
    /// Runs the field's key-down handler, then commits the key:
    /// - `Char`/`Space` insert when the field has room
    /// - `Backspace` removes the last character
    /// - other keys change nothing
    ///
    /// Body changes update the body length.
    pub fn press_key(&mut self, field: Field, key: Key) {
        if self.key_down(field, key) == KeyDisposition::Suppressed {
            return;
        }

        let target = self.field_mut(field);
        let changed = match key {
            Key::Char(c) => target.insert(c),
            Key::Space => target.insert(' '),
            Key::Backspace => target.backspace(),
            _ => false,
        };

        if changed {
            self.commit(field);
        }
    }

    /// Types `text` one key at a time.
    pub fn type_text(&mut self, field: Field, text: &str) {
        for c in text.chars() {
            self.press_key(field, Key::from_char(c));
        }
    }

    /// Pastes `text` as a single keystroke.
    ///
    /// Line breaks are dropped and the text is cut to the room left in the
    /// field. Returns the number of characters inserted.
    pub fn paste(&mut self, field: Field, text: &str) -> usize {
        self.key_down(field, Key::Paste);
        let inserted = self.field_mut(field).insert_str(text);
        if inserted > 0 {
            self.commit(field);
        }
        inserted
    }

    /// Replaces a field's content with a value edited by the host widget.
    ///
    /// For hosts that own their own text editing. Values over the field's
    /// limit or containing line breaks are refused. Returns whether the
    /// field changed.
    pub fn replace_text(&mut self, field: Field, text: &str) -> bool {
        let changed = self.field_mut(field).replace(text);
        if changed {
            self.commit(field);
        } else {
            log::trace!("Refused {field:?} value of {} chars", text.chars().count());
        }
        changed
    }

    fn commit(&mut self, field: Field) {
        if field == Field::Body {
            let text = self.body().to_owned();
            self.on_body_change(&text);
        }
    }
}
