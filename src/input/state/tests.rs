use super::*;
use crate::audio::{RecordingSink, SoundRef};
use crate::catalog;
use crate::input::{Field, FontWeight, Key, KeyDisposition};

fn create_test_card_state() -> (CardState, RecordingSink) {
    let sink = RecordingSink::new();
    let state = CardState::new(Box::new(sink.clone()));
    (state, sink)
}

#[test]
fn test_default_state() {
    let (state, sink) = create_test_card_state();
    assert_eq!(state.current_font().family, "Courier Prime, monospace");
    assert_eq!(state.current_pen().name, "Ballpoint Pen");
    assert!(state.sound_enabled());
    assert_eq!(state.body_length(), 0);
    assert_eq!(state.remaining_characters(), 240);
    assert_eq!(state.title(), "");
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_select_font_every_catalog_entry() {
    let (mut state, _) = create_test_card_state();

    for font in catalog::fonts() {
        state.select_font(font.name);
        assert_eq!(state.current_font().family, font.family);
        assert_eq!(state.current_font().size, font.size);
    }
}

#[test]
fn test_select_font_by_family() {
    let (mut state, _) = create_test_card_state();
    assert!(state.select_font("Special Elite, cursive"));
    assert_eq!(state.current_font().name, "Special Elite");
    assert_eq!(state.current_font().size, "1.1rem");
}

#[test]
fn test_select_font_unknown_is_noop() {
    let (mut state, _) = create_test_card_state();
    state.select_font("Pacifico");
    let before = *state.current_font();

    assert!(!state.select_font("Wingdings"));
    assert!(!state.select_font(""));
    assert_eq!(*state.current_font(), before);
}

#[test]
fn test_select_same_font_reports_no_change() {
    let (mut state, _) = create_test_card_state();
    assert!(!state.select_font("Courier Prime"));
}

#[test]
fn test_select_pen_every_catalog_entry() {
    let (mut state, _) = create_test_card_state();

    for pen in catalog::pens().iter().rev() {
        state.select_pen(pen.name);
        assert_eq!(state.current_pen(), pen);
    }
}

#[test]
fn test_select_pen_unknown_is_noop() {
    let (mut state, _) = create_test_card_state();
    state.select_pen("Pencil");

    assert!(!state.select_pen("Quill"));
    assert_eq!(state.current_pen().name, "Pencil");
    assert_eq!(state.current_pen().opacity, 0.7);
}

#[test]
fn test_toggle_sound_twice_restores() {
    let (mut state, _) = create_test_card_state();
    let original = state.sound_enabled();

    assert!(!state.toggle_sound());
    assert!(state.toggle_sound());
    assert_eq!(state.sound_enabled(), original);
}

#[test]
fn test_toggle_sound_leaves_selections() {
    let (mut state, _) = create_test_card_state();
    state.select_pen("Marker");
    state.type_text(Field::Body, "abc");

    state.toggle_sound();
    assert_eq!(state.current_pen().name, "Marker");
    assert_eq!(state.body_length(), 3);
}

#[test]
fn test_on_body_change_tracks_length() {
    let (mut state, _) = create_test_card_state();

    for n in [0, 1, 17, 239, 240] {
        let text = "x".repeat(n);
        state.on_body_change(&text);
        assert_eq!(state.body_length(), n);
        assert_eq!(state.remaining_characters(), 240 - n);
    }
}

#[test]
fn test_body_refuses_241st_character() {
    let (mut state, sink) = create_test_card_state();
    state.type_text(Field::Body, &"a".repeat(240));
    assert_eq!(state.body_length(), 240);

    state.press_key(Field::Body, Key::Char('b'));
    assert_eq!(state.body_length(), 240);
    assert_eq!(state.remaining_characters(), 0);
    assert!(!state.body().contains('b'));
    // The key-down cue still fired for the refused key
    assert_eq!(sink.count(), 241);
}

#[test]
fn test_title_limit_independent_of_body() {
    let (mut state, _) = create_test_card_state();
    state.type_text(Field::Title, &"t".repeat(30));

    assert_eq!(state.title().chars().count(), 26);
    assert_eq!(state.body_length(), 0);
    assert_eq!(state.remaining_characters(), 240);
}

#[test]
fn test_enter_never_inserts_or_plays() {
    let (mut state, sink) = create_test_card_state();
    state.type_text(Field::Title, "ab");
    state.type_text(Field::Body, "cd");
    let cues = sink.count();

    for field in [Field::Title, Field::Body] {
        state.press_key(field, Key::Return);
    }

    assert_eq!(state.title(), "ab");
    assert_eq!(state.body(), "cd");
    assert_eq!(state.body_length(), 2);
    assert_eq!(sink.count(), cues);
}

#[test]
fn test_keystroke_dispositions() {
    let (state, sink) = create_test_card_state();

    assert_eq!(state.on_title_keystroke(Key::Return), KeyDisposition::Suppressed);
    assert_eq!(state.on_body_keystroke(Key::Return), KeyDisposition::Suppressed);
    assert_eq!(sink.count(), 0);

    assert_eq!(state.on_title_keystroke(Key::Char('q')), KeyDisposition::Proceed);
    assert_eq!(state.on_body_keystroke(Key::Shift), KeyDisposition::Proceed);
    assert_eq!(sink.count(), 2);
}

#[test]
fn test_non_character_keys_play_without_editing() {
    let (mut state, sink) = create_test_card_state();
    state.type_text(Field::Body, "hi");

    let keys = [
        Key::Navigation,
        Key::Tab,
        Key::Escape,
        Key::Shift,
        Key::Ctrl,
        Key::Alt,
        Key::Paste,
        Key::Delete,
    ];
    for key in keys {
        state.press_key(Field::Body, key);
    }

    assert_eq!(state.body(), "hi");
    assert_eq!(sink.count(), 10);
}

#[test]
fn test_backspace_updates_body_length() {
    let (mut state, _) = create_test_card_state();
    state.type_text(Field::Body, "hello");
    state.press_key(Field::Body, Key::Backspace);

    assert_eq!(state.body(), "hell");
    assert_eq!(state.body_length(), 4);
}

#[test]
fn test_muted_keystrokes_start_nothing() {
    let (mut state, sink) = create_test_card_state();
    state.toggle_sound();

    state.type_text(Field::Title, "quiet");
    state.type_text(Field::Body, "please");

    assert_eq!(sink.count(), 0);
    assert_eq!(state.body_length(), 6);
}

#[test]
fn test_unmuted_keystroke_starts_one_cue_each() {
    let (mut state, sink) = create_test_card_state();
    state.select_pen("Fountain Pen");
    state.type_text(Field::Title, "ink");

    let cues = sink.started();
    assert_eq!(cues.len(), 3);
    assert!(
        cues.iter()
            .all(|cue| cue.sound == SoundRef::Fountain && cue.volume == 0.5)
    );
}

#[test]
fn test_cue_follows_current_pen() {
    let (mut state, sink) = create_test_card_state();
    state.press_key(Field::Body, Key::Char('a'));
    state.select_pen("Pencil");
    state.press_key(Field::Body, Key::Char('b'));

    let sounds: Vec<_> = sink.started().iter().map(|cue| cue.sound).collect();
    assert_eq!(sounds, vec![SoundRef::Ballpoint, SoundRef::Pencil]);
}

#[test]
fn test_paste_truncates_and_strips_newlines() {
    let (mut state, sink) = create_test_card_state();
    state.type_text(Field::Body, &"a".repeat(235));
    let before = sink.count();

    let inserted = state.paste(Field::Body, "one\ntwo three");
    assert_eq!(inserted, 5);
    assert_eq!(state.body_length(), 240);
    assert!(state.body().ends_with("onetw"));
    assert_eq!(sink.count(), before + 1);
}

#[test]
fn test_replace_text_refuses_overlong_and_multiline() {
    let (mut state, _) = create_test_card_state();
    assert!(state.replace_text(Field::Body, "draft"));
    assert_eq!(state.body_length(), 5);

    assert!(!state.replace_text(Field::Body, &"z".repeat(241)));
    assert!(!state.replace_text(Field::Body, "two\nlines"));
    assert_eq!(state.body(), "draft");
    assert_eq!(state.body_length(), 5);

    assert!(!state.replace_text(Field::Title, &"t".repeat(27)));
    assert!(state.replace_text(Field::Title, "Groceries"));
    assert_eq!(state.title(), "Groceries");
}

#[test]
fn test_marker_scenario() {
    let (mut state, sink) = create_test_card_state();

    assert!(state.select_pen("Marker"));
    state.type_text(Field::Body, "Hi");

    assert_eq!(state.current_pen().color, "red");
    assert_eq!(state.current_pen().font_weight, FontWeight::Bold);
    assert_eq!(state.body_length(), 2);
    assert_eq!(state.remaining_characters(), 238);

    let cues = sink.started();
    assert_eq!(cues.len(), 2);
    assert!(cues.iter().all(|cue| cue.sound == SoundRef::Marker));
}

#[test]
fn test_with_defaults_custom_start() {
    let sink = RecordingSink::new();
    let state = CardState::with_defaults(
        catalog::find_font("Allura").unwrap(),
        catalog::find_pen("Pencil").unwrap(),
        false,
        1.25,
        Box::new(sink.clone()),
    );

    assert_eq!(state.current_font().size, "2rem");
    assert_eq!(state.current_pen().color, "gray");
    assert!(!state.sound_enabled());
    assert_eq!(state.scale, 1.25);
    state.play_cue();
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_selection_reports_only_real_changes() {
    let (mut state, _) = create_test_card_state();

    assert!(!state.select_pen("Ballpoint Pen"));
    assert!(!state.select_font("Courier Prime"));
    assert!(!state.select_font("Comic Sans"));
    assert!(!state.select_pen("Crayon"));

    assert!(state.select_font("Allura"));
    assert!(!state.select_font("Allura, cursive"));
    assert!(state.select_pen("Pencil"));
    assert!(!state.select_pen("Pencil"));
    assert_eq!(state.current_pen().name, "Pencil");
}
