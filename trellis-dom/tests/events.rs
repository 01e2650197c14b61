use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use trellis_dom::{
    collect_focusable, hit_test, hit_test_focusable, Element, Event, FocusState, Key,
    LayoutResult, MouseButton, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click_at(x: u16, y: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_deepest_clickable() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_later_child_wins() {
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 40, 40), Some("top".to_string()));
    assert_eq!(hit_test(&layout, &root, 15, 15), Some("bottom".to_string()));
}

#[test]
fn test_hit_test_ignores_non_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("plain").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
}

#[test]
fn test_hit_test_skips_disabled_subtree() {
    let root = Element::box_()
        .id("root")
        .child(
            Element::box_()
                .id("wrapper")
                .disabled(true)
                .child(Element::text("btn").id("btn").clickable(true).focusable(true)),
        );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("wrapper", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(hit_test_focusable(&layout, &root, 15, 11), None);
}

// ============================================================================
// Focus ring
// ============================================================================

fn three_inputs() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true))
        .child(Element::text("b").id("b").focusable(true))
        .child(Element::text("c").id("c").focusable(true))
}

#[test]
fn test_collect_focusable_tree_order() {
    assert_eq!(collect_focusable(&three_inputs()), vec!["a", "b", "c"]);
}

#[test]
fn test_collect_focusable_skips_disabled() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true))
        .child(Element::text("b").id("b").focusable(true).disabled(true));
    assert_eq!(collect_focusable(&root), vec!["a"]);
}

#[test]
fn test_focus_next_cycles() {
    let root = three_inputs();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root).as_deref(), Some("a"));
    assert_eq!(focus.focus_next(&root).as_deref(), Some("b"));
    assert_eq!(focus.focus_next(&root).as_deref(), Some("c"));
    assert_eq!(focus.focus_next(&root).as_deref(), Some("a"));
    assert_eq!(focus.focus_prev(&root).as_deref(), Some("c"));
}

#[test]
fn test_tab_emits_blur_and_focus_events() {
    let root = three_inputs();
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(events, vec![Event::Focus { target: "a".into() }]);

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Blur { target: "a".into() },
            Event::Focus { target: "b".into() },
        ]
    );
}

#[test]
fn test_keys_target_focused_element() {
    let root = three_inputs();
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();
    focus.focus("b");

    let events = focus.process_events(&[key(KeyCode::Char('x'))], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("b".into()),
            key: Key::Char('x'),
            modifiers: Default::default(),
        }]
    );
}

#[test]
fn test_escape_blurs_before_reaching_app() {
    let root = three_inputs();
    let layout = LayoutResult::new();
    let mut focus = FocusState::new();
    focus.focus("a");

    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert_eq!(events, vec![Event::Blur { target: "a".into() }]);
    assert_eq!(focus.focused(), None);

    // Nothing focused: Escape reaches the app as a key event
    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Key {
            target: None,
            key: Key::Escape,
            modifiers: Default::default(),
        }]
    );
}

#[test]
fn test_click_focuses_and_targets() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a").focusable(true).clickable(true))
        .child(Element::text("b").id("b").focusable(true).clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 10)),
        ("a", Rect::new(0, 0, 20, 1)),
        ("b", Rect::new(0, 1, 20, 1)),
    ]);

    let mut focus = FocusState::new();
    let events = focus.process_events(&[click_at(3, 1)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Focus { target: "b".into() },
            Event::Click {
                target: Some("b".into()),
                x: 3,
                y: 1,
                button: MouseButton::Left,
            },
        ]
    );
    assert_eq!(focus.focused(), Some("b"));

    // Clicking empty space blurs
    let events = focus.process_events(&[click_at(3, 9)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Blur { target: "b".into() },
            Event::Click {
                target: None,
                x: 3,
                y: 9,
                button: MouseButton::Left,
            },
        ]
    );
}
