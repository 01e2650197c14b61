//! Element building for the DataTable widget.

use trellis_dom::{Color, Edges, Element, Size, Style};

use super::item::{ColumnWidth, TableRow};
use super::state::DataTable;

/// Width of the checkbox column (`[x]` plus a trailing space).
const CHECKBOX_WIDTH: u16 = 4;

impl<T: TableRow> DataTable<T> {
    /// Build the element tree for the current state.
    ///
    /// Exactly one of three modes renders, checked in priority order:
    /// the loading placeholder, the empty-state placeholder, or the table.
    pub fn element(&self) -> Element {
        let table_id = self.id_string();
        let Ok(guard) = self.inner.read() else {
            return Element::col().id(table_id);
        };

        if guard.loading {
            return Element::col()
                .id(&table_id)
                .width(Size::Fill)
                .padding(Edges::all(1))
                .child(
                    Element::text("Loading...")
                        .id(format!("{table_id}-loading"))
                        .style(Style::new().foreground(Color::var("muted")).italic()),
                );
        }

        if guard.rows.is_empty() {
            return Element::col()
                .id(&table_id)
                .width(Size::Fill)
                .padding(Edges::all(1))
                .child(
                    Element::text("No data available")
                        .id(format!("{table_id}-empty"))
                        .style(Style::new().foreground(Color::var("table.empty_fg"))),
                );
        }

        // Header row
        let mut header = Element::row()
            .id(format!("{table_id}-header"))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .style(Style::new().background(Color::var("table.header_bg")));

        if guard.selectable {
            header = header.child(
                Element::text("Select")
                    .id(format!("{table_id}-head-select"))
                    .width(Size::Fixed(CHECKBOX_WIDTH + 3))
                    .height(Size::Fixed(1))
                    .style(header_cell_style()),
            );
        }

        for column in &guard.columns {
            let mut title = column.title().to_string();
            if column.is_sortable() {
                if let Some((sort_key, order)) = &guard.sort {
                    if sort_key == column.key() {
                        title.push(' ');
                        title.push_str(order.indicator());
                    }
                }
            }

            let cell = Element::text(title)
                .id(format!("{table_id}-head-{}", column.key()))
                .width(column_size(column.width()))
                .height(Size::Fixed(1))
                .style(header_cell_style())
                .clickable(column.is_sortable())
                .focusable(column.is_sortable());
            header = header.child(cell);
        }

        // Data rows, in display order
        let mut rows = Vec::with_capacity(guard.display.len());
        for &index in &guard.display {
            let row_data = &guard.rows[index];
            let key = row_data.key().to_string();
            let is_selected = guard.selection.is_selected(&row_data.key());

            let mut row = Element::row()
                .id(format!("{table_id}-row-{key}"))
                .width(Size::Fill)
                .height(Size::Fixed(1));

            if guard.selectable {
                row = row
                    .focusable(true)
                    .style_focused(
                        Style::new().background(Color::var("table.row_focused")),
                    )
                    .child(
                        Element::text(if is_selected { "[x]" } else { "[ ]" })
                            .id(format!("{table_id}-check-{key}"))
                            .width(Size::Fixed(CHECKBOX_WIDTH + 3))
                            .height(Size::Fixed(1))
                            .clickable(true),
                    );
            }

            for column in &guard.columns {
                row = row.child(
                    Element::text(column.value(row_data).to_string())
                        .id(format!("{table_id}-cell-{key}-{}", column.key()))
                        .width(column_size(column.width()))
                        .height(Size::Fixed(1)),
                );
            }

            if is_selected {
                row = row.style(Style::new().background(Color::var("table.row_selected")));
            }

            rows.push(row);
        }

        Element::col()
            .id(&table_id)
            .width(Size::Fill)
            .child(header)
            .child(
                Element::col()
                    .id(format!("{table_id}-body"))
                    .width(Size::Fill)
                    .children(rows),
            )
    }
}

fn header_cell_style() -> Style {
    Style::new()
        .background(Color::var("table.header_bg"))
        .foreground(Color::var("table.header_fg"))
        .bold()
}

fn column_size(width: ColumnWidth) -> Size {
    match width {
        ColumnWidth::Fixed(w) => Size::Fixed(w),
        ColumnWidth::Flex(w) => Size::Flex(w),
    }
}
