//! Table widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::selection::Selection;

use super::item::{Column, TableRow};
use super::sort::{sorted_order, SortOrder};

/// Unique identifier for a DataTable widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

type RowSelectFn<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Internal state for the DataTable widget.
pub(super) struct TableInner<T: TableRow> {
    /// Column definitions, immutable after construction.
    pub columns: Vec<Column<T>>,
    /// The rows, in the order the caller supplied them.
    pub rows: Vec<T>,
    /// Display permutation over `rows` (identity when no sort is active).
    pub display: Vec<usize>,
    /// Active sort: column key and direction.
    pub sort: Option<(String, SortOrder)>,
    /// Selection state (by row key), insertion-ordered.
    pub selection: Selection<T::Key>,
    /// Whether the checkbox column renders and selection toggles apply.
    pub selectable: bool,
    /// Whether the loading placeholder replaces all data rendering.
    pub loading: bool,
    /// External observer, called with the full selection after every toggle.
    pub on_row_select: Option<RowSelectFn<T>>,
}

impl<T: TableRow> TableInner<T> {
    fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            display: Vec::new(),
            sort: None,
            selection: Selection::new(),
            selectable: false,
            loading: false,
            on_row_select: None,
        }
    }

    /// Re-derive the display permutation from the current sort state.
    fn recompute_display(&mut self) {
        self.display = match &self.sort {
            Some((key, order)) => match self.columns.iter().find(|c| c.key() == key) {
                Some(column) => sorted_order(&self.rows, column, *order),
                None => (0..self.rows.len()).collect(),
            },
            None => (0..self.rows.len()).collect(),
        };
    }
}

/// A sortable, selectable data table.
///
/// `DataTable<T>` owns two independent pieces of state, sort and selection;
/// header interaction drives the first, checkbox interaction the second, and
/// neither transition ever resets the other. Rendering picks one of three
/// mutually exclusive modes: the loading placeholder, the empty-state
/// placeholder, or the table itself.
pub struct DataTable<T: TableRow> {
    /// Unique identifier, also the prefix of every element id this widget
    /// renders.
    id: TableId,
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow> DataTable<T> {
    /// Create a table with column definitions and no rows.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        let table = Self::new(columns);
        if let Ok(mut guard) = table.inner.write() {
            guard.rows = rows;
            guard.recompute_display();
        }
        table
    }

    /// Enable or disable the checkbox column.
    pub fn selectable(self, selectable: bool) -> Self {
        self.set_selectable(selectable);
        self
    }

    /// Set the loading flag.
    pub fn loading(self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Register the selection observer, called with the complete selection
    /// (in selection order) after every actual toggle.
    pub fn on_row_select(self, f: impl Fn(&[T]) + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_row_select = Some(Arc::new(f));
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string (the element id prefix).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in input order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace the data set.
    ///
    /// Selections whose keys no longer resolve to a row are pruned (order of
    /// the survivors preserved) without notifying the observer; the active
    /// sort is re-applied to the new rows.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            let keys: Vec<T::Key> = guard.rows.iter().map(|r| r.key()).collect();
            guard.selection.retain(|k| keys.contains(k));
            guard.recompute_display();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Rows in display order (the sorted view when a sort is active).
    pub fn visible_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.display.iter().map(|&i| g.rows[i].clone()).collect())
            .unwrap_or_default()
    }

    /// The current display permutation over the input rows.
    pub fn display_order(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|g| g.display.clone())
            .unwrap_or_default()
    }

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Loading / selectable flags
    // -------------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.inner.read().map(|g| g.selectable).unwrap_or(false)
    }

    /// Enable or disable selection. Disabling clears the selection without
    /// notifying the observer.
    pub fn set_selectable(&self, selectable: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selectable = selectable;
            if !selectable {
                guard.selection.clear();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> Option<(String, SortOrder)> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Toggle sort for a column (header interaction).
    ///
    /// Toggling the active column flips the direction; a different sortable
    /// column starts ascending. Non-sortable and unknown columns are a
    /// no-op. Returns the new sort state when it changed.
    pub fn toggle_sort(&self, column_key: &str) -> Option<(String, SortOrder)> {
        let mut guard = self.inner.write().ok()?;
        let sortable = guard
            .columns
            .iter()
            .any(|c| c.key() == column_key && c.is_sortable());
        if !sortable {
            return None;
        }

        let order = match &guard.sort {
            Some((key, order)) if key == column_key => order.flipped(),
            _ => SortOrder::Ascending,
        };
        guard.sort = Some((column_key.to_string(), order));
        guard.recompute_display();
        self.dirty.store(true, Ordering::SeqCst);
        Some((column_key.to_string(), order))
    }

    /// Clear the sort, returning to input order.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort = None;
            guard.recompute_display();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check if a row is selected by key.
    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(key))
            .unwrap_or(false)
    }

    /// Selected keys in selection order.
    pub fn selected_keys(&self) -> Vec<T::Key> {
        self.inner
            .read()
            .map(|g| g.selection.keys().to_vec())
            .unwrap_or_default()
    }

    /// Selected rows in selection order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| Self::selected_rows_inner(&g))
            .unwrap_or_default()
    }

    fn selected_rows_inner(guard: &TableInner<T>) -> Vec<T> {
        guard
            .selection
            .keys()
            .iter()
            .filter_map(|key| guard.rows.iter().find(|r| &r.key() == key).cloned())
            .collect()
    }

    /// Toggle selection of a row (checkbox interaction). Ignored while
    /// `selectable` is off. Returns true if the selection changed, in which
    /// case the observer has been called with the full new selection.
    pub fn toggle_select(&self, key: &T::Key) -> bool {
        let (observer, selected) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.selectable {
                return false;
            }
            guard.selection.toggle(key.clone());
            self.dirty.store(true, Ordering::SeqCst);
            (guard.on_row_select.clone(), Self::selected_rows_inner(&guard))
        };

        log::debug!(
            "{}: selection toggled, {} selected",
            self.id,
            selected.len()
        );
        if let Some(observer) = observer {
            observer(&selected);
        }
        true
    }

    /// Look up a row key by its string form (element ids carry keys as
    /// strings).
    pub(super) fn key_from_str(&self, s: &str) -> Option<T::Key> {
        self.inner.read().ok().and_then(|g| {
            g.rows
                .iter()
                .map(|r| r.key())
                .find(|k| k.to_string() == s)
        })
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: TableRow> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("rows", &self.len())
            .finish()
    }
}
