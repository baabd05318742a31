use regform_tui::event::{Event, Key, Modifiers};
use regform_tui::input::TextInputState;

const INPUTS: [&str; 1] = ["name"];

fn key(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.into()),
        key,
        modifiers: Modifiers::new(),
    }
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key("name", Key::Char(c))).collect()
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_typing_appends_and_reports_changes() {
    let mut text = TextInputState::new();
    text.set("name", "");

    let events = text.process_events(&typed("hi"), &INPUTS);

    assert_eq!(text.get("name"), "hi");
    assert_eq!(
        events,
        vec![
            Event::Change {
                target: "name".into(),
                text: "h".into()
            },
            Event::Change {
                target: "name".into(),
                text: "hi".into()
            },
        ]
    );
}

#[test]
fn test_backspace_removes_before_cursor() {
    let mut text = TextInputState::new();
    text.set("name", "abc");

    let events = text.process_events(&[key("name", Key::Backspace)], &INPUTS);

    assert_eq!(text.get("name"), "ab");
    assert_eq!(
        events,
        vec![Event::Change {
            target: "name".into(),
            text: "ab".into()
        }]
    );
}

#[test]
fn test_backspace_at_start_is_a_noop() {
    let mut text = TextInputState::new();
    text.set("name", "abc");

    text.process_events(&[key("name", Key::Home)], &INPUTS);
    let events = text.process_events(&[key("name", Key::Backspace)], &INPUTS);

    assert_eq!(text.get("name"), "abc");
    assert!(events.is_empty());
}

#[test]
fn test_insert_in_the_middle() {
    let mut text = TextInputState::new();
    text.set("name", "ac");

    text.process_events(&[key("name", Key::Left)], &INPUTS);
    text.process_events(&[key("name", Key::Char('b'))], &INPUTS);

    assert_eq!(text.get("name"), "abc");
}

#[test]
fn test_delete_removes_at_cursor() {
    let mut text = TextInputState::new();
    text.set("name", "abc");

    text.process_events(&[key("name", Key::Home), key("name", Key::Delete)], &INPUTS);

    assert_eq!(text.get("name"), "bc");
}

#[test]
fn test_delete_at_end_is_a_noop() {
    let mut text = TextInputState::new();
    text.set("name", "abc");

    let events = text.process_events(&[key("name", Key::Delete)], &INPUTS);

    assert_eq!(text.get("name"), "abc");
    assert!(events.is_empty());
}

#[test]
fn test_cursor_stays_within_bounds() {
    let mut text = TextInputState::new();
    text.set("name", "ab");

    for _ in 0..5 {
        text.process_events(&[key("name", Key::Right)], &INPUTS);
    }
    assert_eq!(text.get_data("name").expect("input exists").cursor, 2);

    for _ in 0..5 {
        text.process_events(&[key("name", Key::Left)], &INPUTS);
    }
    assert_eq!(text.get_data("name").expect("input exists").cursor, 0);
}

#[test]
fn test_home_and_end_jump() {
    let mut text = TextInputState::new();
    text.set("name", "abc");

    text.process_events(&[key("name", Key::Home)], &INPUTS);
    assert_eq!(text.get_data("name").expect("input exists").cursor, 0);

    text.process_events(&[key("name", Key::End)], &INPUTS);
    assert_eq!(text.get_data("name").expect("input exists").cursor, 3);
}

#[test]
fn test_multibyte_characters_edit_cleanly() {
    let mut text = TextInputState::new();
    text.set("name", "");

    text.process_events(&typed("na\u{ef}ve"), &INPUTS);
    assert_eq!(text.get("name"), "na\u{ef}ve");

    // Remove 'e' and 'v', leaving the multi-byte char intact
    text.process_events(
        &[key("name", Key::Backspace), key("name", Key::Backspace)],
        &INPUTS,
    );
    assert_eq!(text.get("name"), "na\u{ef}");
}

// ============================================================================
// Event routing
// ============================================================================

#[test]
fn test_enter_submits() {
    let mut text = TextInputState::new();
    text.set("name", "x");

    let events = text.process_events(&[key("name", Key::Enter)], &INPUTS);

    assert_eq!(
        events,
        vec![Event::Submit {
            target: "name".into()
        }]
    );
}

#[test]
fn test_events_for_other_controls_pass_through() {
    let mut text = TextInputState::new();
    text.set("name", "");

    let button = key("button", Key::Enter);
    let events = text.process_events(&[button.clone()], &INPUTS);

    assert_eq!(events, vec![button]);
}

#[test]
fn test_control_chords_pass_through() {
    let mut text = TextInputState::new();
    text.set("name", "");

    let chord = Event::Key {
        target: Some("name".into()),
        key: Key::Char('c'),
        modifiers: Modifiers::ctrl(),
    };
    let events = text.process_events(&[chord.clone()], &INPUTS);

    assert_eq!(text.get("name"), "");
    assert_eq!(events, vec![chord]);
}

#[test]
fn test_untargeted_keys_pass_through() {
    let mut text = TextInputState::new();

    let stray = Event::Key {
        target: None,
        key: Key::Char('x'),
        modifiers: Modifiers::new(),
    };
    let events = text.process_events(&[stray.clone()], &INPUTS);

    assert_eq!(events, vec![stray]);
}
