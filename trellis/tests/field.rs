use std::sync::{Arc, Mutex};

use trellis::prelude::*;
use trellis_dom::{find_element, Border, Content, Element, Event, Key, Modifiers};

fn key_press(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
        modifiers: Modifiers::new(),
    }
}

fn type_str(field: &TextField, s: &str) {
    for c in s.chars() {
        field.process_event(&key_press(&field.input_id(), Key::Char(c)));
    }
}

fn text_of(root: &Element, id: &str) -> Option<String> {
    match &find_element(root, id)?.content {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}

// ============================================================================
// Value mirroring and editing
// ============================================================================

#[test]
fn test_set_value_mirrors_external_value() {
    let field = TextField::new();
    field.set_value("hello");
    assert_eq!(field.value(), "hello");
    assert_eq!(field.cursor(), 5, "cursor lands at the end");

    field.set_value("hi");
    assert_eq!(field.value(), "hi");
    assert_eq!(field.cursor(), 2);
}

#[test]
fn test_typing_edits_and_fires_on_change_once_per_edit() {
    let calls: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&calls);

    let field = TextField::new().on_change(move |value| {
        seen.lock().unwrap().push(value.to_string());
    });

    type_str(&field, "ab");
    let event = field.process_event(&key_press(&field.input_id(), Key::Backspace));

    assert_eq!(field.value(), "a");
    assert_eq!(event, Some(FieldEvent::Changed("a".to_string())));
    assert_eq!(*calls.lock().unwrap(), vec!["a", "ab", "a"]);
}

#[test]
fn test_cursor_movement_is_not_a_change() {
    let calls = Arc::new(Mutex::new(0usize));
    let seen = Arc::clone(&calls);

    let field = TextField::with_value("abc").on_change(move |_| {
        *seen.lock().unwrap() += 1;
    });

    let input = field.input_id();
    assert!(field.process_event(&key_press(&input, Key::Left)).is_none());
    assert!(field.process_event(&key_press(&input, Key::Home)).is_none());
    assert!(field.process_event(&key_press(&input, Key::End)).is_none());
    assert_eq!(*calls.lock().unwrap(), 0);
    assert_eq!(field.value(), "abc");
}

#[test]
fn test_editing_at_cursor_position() {
    let field = TextField::with_value("ac");
    let input = field.input_id();

    field.process_event(&key_press(&input, Key::Left));
    field.process_event(&key_press(&input, Key::Char('b')));
    assert_eq!(field.value(), "abc");

    field.process_event(&key_press(&input, Key::Delete));
    assert_eq!(field.value(), "ab");

    field.process_event(&key_press(&input, Key::Home));
    field.process_event(&key_press(&input, Key::Delete));
    assert_eq!(field.value(), "b");
}

#[test]
fn test_events_for_other_targets_are_ignored() {
    let field = TextField::new();
    assert!(field
        .process_event(&key_press("somewhere-else", Key::Char('x')))
        .is_none());
    assert_eq!(field.value(), "");
}

#[test]
fn test_disabled_suppresses_edits() {
    let calls = Arc::new(Mutex::new(0usize));
    let seen = Arc::clone(&calls);

    let field = TextField::with_value("keep").disabled(true).on_change(move |_| {
        *seen.lock().unwrap() += 1;
    });

    assert!(field
        .process_event(&key_press(&field.input_id(), Key::Char('x')))
        .is_none());
    assert!(field
        .process_event(&key_press(&field.input_id(), Key::Backspace))
        .is_none());
    assert_eq!(field.value(), "keep");
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_enter_submits() {
    let field = TextField::with_value("done");
    assert_eq!(
        field.process_event(&key_press(&field.input_id(), Key::Enter)),
        Some(FieldEvent::Submitted)
    );
    assert_eq!(field.value(), "done");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_label_and_helper_render() {
    let field = TextField::new().label("Email").helper_text("We never share it");
    let id = field.id_string();
    let root = field.element(false);

    assert_eq!(text_of(&root, &format!("{id}-label")).as_deref(), Some("Email"));
    assert_eq!(
        text_of(&root, &format!("{id}-helper")).as_deref(),
        Some("We never share it")
    );
    assert!(find_element(&root, &format!("{id}-error")).is_none());
}

#[test]
fn test_invalid_replaces_helper_with_error() {
    let field = TextField::new()
        .helper_text("helper")
        .error_message("bad value")
        .invalid(true);
    let id = field.id_string();
    let root = field.element(false);

    assert_eq!(
        text_of(&root, &format!("{id}-error")).as_deref(),
        Some("bad value")
    );
    assert!(find_element(&root, &format!("{id}-helper")).is_none());

    // Back to valid: helper returns, error goes
    field.set_invalid(false);
    let root = field.element(false);
    assert!(find_element(&root, &format!("{id}-error")).is_none());
    assert_eq!(text_of(&root, &format!("{id}-helper")).as_deref(), Some("helper"));
}

#[test]
fn test_invalid_without_message_shows_neither() {
    let field = TextField::new().helper_text("helper").invalid(true);
    let id = field.id_string();
    let root = field.element(false);

    assert!(find_element(&root, &format!("{id}-error")).is_none());
    assert!(find_element(&root, &format!("{id}-helper")).is_none());
}

#[test]
fn test_variants_select_border_and_background() {
    let outlined = TextField::new();
    let root = outlined.element(false);
    let input = find_element(&root, &outlined.input_id()).unwrap();
    assert_eq!(input.style.border, Border::Single);
    assert!(input.style.background.is_none());

    let filled = TextField::new().variant(FieldVariant::Filled);
    let root = filled.element(false);
    let input = find_element(&root, &filled.input_id()).unwrap();
    assert_eq!(input.style.border, Border::None);
    assert!(input.style.background.is_some());

    let ghost = TextField::new().variant(FieldVariant::Ghost);
    let root = ghost.element(false);
    let input = find_element(&root, &ghost.input_id()).unwrap();
    assert_eq!(input.style.border, Border::None);
    assert!(input.style.background.is_none());
}

#[test]
fn test_sizes_scale_padding() {
    for (size, horizontal) in [
        (FieldSize::Sm, 1),
        (FieldSize::Md, 2),
        (FieldSize::Lg, 3),
    ] {
        let field = TextField::new().size(size);
        let root = field.element(false);
        let input = find_element(&root, &field.input_id()).unwrap();
        assert_eq!(input.padding.left, horizontal);
        assert_eq!(input.padding.right, horizontal);
    }
}

#[test]
fn test_disabled_field_is_not_focusable() {
    let field = TextField::new().disabled(true);
    let root = field.element(false);
    let input = find_element(&root, &field.input_id()).unwrap();
    assert!(input.disabled);

    assert!(trellis_dom::collect_focusable(&root).is_empty());
}

#[test]
fn test_placeholder_and_value_on_input_content() {
    let field = TextField::new().placeholder("type here");
    field.set_value("abc");
    let root = field.element(true);
    let input = find_element(&root, &field.input_id()).unwrap();

    match &input.content {
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => {
            assert_eq!(value, "abc");
            assert_eq!(*cursor, 3);
            assert_eq!(placeholder.as_deref(), Some("type here"));
            assert!(*focused);
        }
        other => panic!("expected text input content, got {other:?}"),
    }
}
