//! Event handling for the DataTable widget.
//!
//! The widget renders elements whose ids carry its own id as a prefix
//! (`{table}-head-{column}`, `{table}-check-{row}`, ...); incoming targeted
//! events are routed back by parsing those ids.

use trellis_dom::{Event, Key};

use super::item::TableRow;
use super::sort::SortOrder;
use super::state::DataTable;

/// What a table interaction produced.
#[derive(Debug, Clone)]
pub enum TableEvent<T: TableRow> {
    /// A sortable header was activated and the sort state changed.
    SortChanged { column: String, order: SortOrder },
    /// A selection toggle happened; `rows` is the complete selection in
    /// selection order (the same list the observer received).
    SelectionChanged { rows: Vec<T> },
}

impl<T: TableRow> DataTable<T> {
    /// Process one targeted event. Returns the resulting table event, or
    /// None when the event wasn't for this table or changed nothing.
    pub fn process_event(&self, event: &Event) -> Option<TableEvent<T>> {
        match event {
            Event::Click {
                target: Some(target),
                ..
            } => self.handle_target(target),
            // Enter/Space activate the focused header or row
            Event::Key {
                target: Some(target),
                key: Key::Enter | Key::Char(' '),
                modifiers,
            } if modifiers.none() => self.handle_target(target),
            _ => None,
        }
    }

    fn handle_target(&self, target: &str) -> Option<TableEvent<T>> {
        let prefix = format!("{}-", self.id_string());
        let suffix = target.strip_prefix(&prefix)?;

        if let Some(column_key) = suffix.strip_prefix("head-") {
            let (column, order) = self.toggle_sort(column_key)?;
            return Some(TableEvent::SortChanged { column, order });
        }

        // Checkbox clicks and focused-row activation both toggle
        let row_key = suffix
            .strip_prefix("check-")
            .or_else(|| suffix.strip_prefix("row-"))?;
        let key = self.key_from_str(row_key)?;
        if self.toggle_select(&key) {
            return Some(TableEvent::SelectionChanged {
                rows: self.selected_rows(),
            });
        }
        None
    }
}
