use indexcard::audio::{CUE_VOLUME, RecordingSink, SoundRef};
use indexcard::input::{CardState, Field, FontWeight, Key, KeyDisposition};
use indexcard::ui::{CardView, InkStyle, Layout};
use indexcard::{Config, catalog};

fn make_card() -> (CardState, RecordingSink) {
    let sink = RecordingSink::new();
    let card = CardState::new(Box::new(sink.clone()));
    (card, sink)
}

#[test]
fn marker_note_projects_bold_red_and_two_cues() {
    let (mut card, sink) = make_card();
    assert!(card.select_pen("Marker"));

    card.type_text(Field::Body, "Hi");

    let view = CardView::project(&card, 1280.0);
    assert_eq!(view.layout, Layout::Sidebar);
    assert_eq!(view.body, "Hi");
    assert_eq!(view.remaining_label, "Remaining characters: 238");
    assert_eq!(view.ink.weight, FontWeight::Bold);
    assert_eq!(view.ink.color_name, "red");

    let cues = sink.started();
    assert_eq!(cues.len(), 2);
    assert!(cues.iter().all(|cue| cue.sound == SoundRef::Marker));
    assert!(cues.iter().all(|cue| cue.volume == CUE_VOLUME));
}

#[test]
fn muted_card_still_counts_and_suppresses_enter() {
    let (mut card, sink) = make_card();
    assert!(!card.toggle_sound());

    card.type_text(Field::Body, "a\nb");
    assert_eq!(card.body(), "ab");
    assert_eq!(card.body_length(), 2);
    assert_eq!(card.on_body_keystroke(Key::Return), KeyDisposition::Suppressed);
    assert_eq!(sink.count(), 0);

    let view = CardView::project(&card, 500.0);
    assert_eq!(view.layout, Layout::Footer);
    assert!(!view.sound_enabled);
}

#[test]
fn full_body_refuses_input_but_keeps_cueing() {
    let (mut card, sink) = make_card();
    card.type_text(Field::Body, &"x".repeat(250));

    assert_eq!(card.body_length(), 240);
    assert_eq!(card.remaining_characters(), 0);
    assert_eq!(sink.count(), 250);
}

#[test]
fn every_font_changes_the_projected_style() {
    let (mut card, _sink) = make_card();
    for font in catalog::fonts() {
        card.select_font(font.name);
        let ink = InkStyle::from_state(&card);
        assert_eq!(ink.family, font.family);
        assert_eq!(ink.size, font.size);
        assert!(ink.css_declarations().contains(font.family));
    }
}

#[test]
fn config_builds_card_with_requested_selections() {
    let mut config = Config::default();
    config.card.font = "Pacifico".to_string();
    config.card.pen = "Pencil".to_string();
    config.sound.enabled = false;
    config.validate_and_clamp();

    let sink = RecordingSink::new();
    let mut card = config.build_card_state(Box::new(sink.clone()));
    assert_eq!(card.current_font().name, "Pacifico");
    assert_eq!(card.current_pen().name, "Pencil");
    assert!(!card.sound_enabled());

    card.toggle_sound();
    card.press_key(Field::Title, Key::Char('Q'));
    assert_eq!(card.title(), "Q");
    assert_eq!(sink.started()[0].sound, SoundRef::Pencil);
}
