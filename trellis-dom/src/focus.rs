use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is focused and translates raw terminal events into
/// targeted [`Event`]s.
///
/// Tab and Shift+Tab cycle through focusable elements in tree order, a left
/// click focuses the focusable element under the cursor, and Escape blurs.
/// Key presses are delivered to the focused element.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[focusable.len() - 1].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level targeted events.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    let Ok(key) = Key::try_from(key_event.code) else {
                        continue;
                    };
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab => {
                            let old = self.focused.clone();
                            if let Some(new) = self.focus_next(root) {
                                if let Some(old) = old {
                                    events.push(Event::Blur { target: old });
                                }
                                events.push(Event::Focus { target: new });
                            }
                        }
                        Key::BackTab => {
                            let old = self.focused.clone();
                            if let Some(new) = self.focus_prev(root) {
                                if let Some(old) = old {
                                    events.push(Event::Blur { target: old });
                                }
                                events.push(Event::Focus { target: new });
                            }
                        }
                        // Escape blurs; only reaches the app when nothing
                        // was focused
                        Key::Escape if self.focused.is_some() => {
                            if let Some(old) = self.focused.take() {
                                events.push(Event::Blur { target: old });
                            }
                        }
                        _ => {
                            events.push(Event::Key {
                                target: self.focused.clone(),
                                key,
                                modifiers,
                            });
                        }
                    }
                }

                CrosstermEvent::Mouse(mouse) => {
                    if let MouseEventKind::Down(button) = mouse.kind {
                        let (x, y) = (mouse.column, mouse.row);

                        // Focus follows clicks on focusable elements
                        match hit_test_focusable(layout, root, x, y) {
                            Some(id) => {
                                if self.focused.as_deref() != Some(id.as_str()) {
                                    if let Some(old) = self.focused.replace(id.clone()) {
                                        events.push(Event::Blur { target: old });
                                    }
                                    events.push(Event::Focus { target: id });
                                }
                            }
                            None => {
                                if let Some(old) = self.focused.take() {
                                    events.push(Event::Blur { target: old });
                                }
                            }
                        }

                        events.push(Event::Click {
                            target: hit_test(layout, root, x, y),
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Collect focusable element IDs in tree order, skipping disabled subtrees.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_into(root, &mut result);
    result
}

fn collect_focusable_into(element: &Element, result: &mut Vec<String>) {
    if element.disabled {
        return;
    }
    if element.focusable {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_into(child, result);
        }
    }
}
