//! Event handling for the TextField widget.

use trellis_dom::{Event, Key};

use super::state::TextField;

/// What a field interaction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The text changed; carries the new value (already delivered to the
    /// change handler).
    Changed(String),
    /// Enter was pressed.
    Submitted,
}

impl TextField {
    /// Process one targeted event. Key events aimed at this field's input
    /// element edit the value; everything else is ignored. A disabled field
    /// ignores all edits.
    pub fn process_event(&self, event: &Event) -> Option<FieldEvent> {
        let Event::Key {
            target: Some(target),
            key,
            modifiers,
        } = event
        else {
            return None;
        };

        if *target != self.input_id() || self.is_disabled() {
            return None;
        }

        let changed = match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(*c)
            }
            Key::Backspace if modifiers.none() => self.delete_back(),
            Key::Delete if modifiers.none() => self.delete_forward(),
            Key::Left if modifiers.none() => {
                self.move_cursor(-1);
                false
            }
            Key::Right if modifiers.none() => {
                self.move_cursor(1);
                false
            }
            Key::Home if modifiers.none() => {
                self.move_to_start();
                false
            }
            Key::End if modifiers.none() => {
                self.move_to_end();
                false
            }
            Key::Enter => return Some(FieldEvent::Submitted),
            _ => return None,
        };

        if changed {
            let value = self.value();
            if let Ok(guard) = self.inner.read() {
                if let Some(on_change) = guard.on_change.clone() {
                    drop(guard);
                    on_change(&value);
                }
            }
            Some(FieldEvent::Changed(value))
        } else {
            None
        }
    }
}
