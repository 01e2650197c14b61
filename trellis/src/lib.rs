//! Presentational widgets for the trellis terminal DOM: a generic
//! sortable/selectable data table and a styled text field.
//!
//! Widgets are cheap clonable handles over shared state. Each frame the host
//! asks them for an element tree (`element()`), renders it, and feeds
//! targeted events back through `process_event`.

pub mod field;
pub mod selection;
pub mod table;
pub mod theme;

pub mod prelude {
    pub use crate::field::{FieldEvent, FieldSize, FieldVariant, TextField};
    pub use crate::selection::Selection;
    pub use crate::table::{
        CellValue, Column, ColumnWidth, DataTable, SortOrder, TableEvent, TableRow,
    };
    pub use crate::theme::{default_theme, TrellisTheme};
}

pub use field::{FieldEvent, FieldId, FieldSize, FieldVariant, TextField};
pub use selection::Selection;
pub use table::{
    CellValue, Column, ColumnWidth, DataTable, SortOrder, TableEvent, TableId, TableRow,
};
pub use theme::{default_theme, FieldColors, TableColors, TrellisTheme};
