//! Text field widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Visual variant of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVariant {
    /// Surface-colored background, no border.
    Filled,
    /// Bordered box; the border recolors on focus.
    #[default]
    Outlined,
    /// No border, no background.
    Ghost,
}

/// Size of a text field (padding scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Unique identifier for a TextField widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

type ChangeFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Internal state for a TextField widget.
#[derive(Default)]
pub(super) struct FieldInner {
    /// Current text value.
    pub value: String,
    /// Cursor position in characters.
    pub cursor: usize,
    pub placeholder: Option<String>,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub variant: FieldVariant,
    pub size: FieldSize,
    pub on_change: Option<ChangeFn>,
}

/// A styled single-line text input.
///
/// Mirrors an externally supplied value into internal display state, edits
/// it on targeted key events, and forwards every actual change to the
/// optional `on_change` handler. Renders a variant/size combination plus an
/// optional label and either helper text or, when `invalid`, the error
/// message.
pub struct TextField {
    id: FieldId,
    pub(super) inner: Arc<RwLock<FieldInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl TextField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            inner: Arc::new(RwLock::new(FieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a field with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        let field = Self::new();
        field.set_value(value);
        field
    }

    // -------------------------------------------------------------------------
    // Builder configuration
    // -------------------------------------------------------------------------

    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
        }
        self
    }

    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = Some(placeholder.into());
        }
        self
    }

    pub fn helper_text(self, helper: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper_text = Some(helper.into());
        }
        self
    }

    pub fn error_message(self, message: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(message.into());
        }
        self
    }

    pub fn variant(self, variant: FieldVariant) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
        }
        self
    }

    pub fn size(self, size: FieldSize) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.size = size;
        }
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn invalid(self, invalid: bool) -> Self {
        self.set_invalid(invalid);
        self
    }

    /// Register the change handler, called with the new value after every
    /// actual edit.
    pub fn on_change(self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(f));
        }
        self
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Element id of the editable input line (the focus target).
    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    pub fn is_invalid(&self) -> bool {
        self.inner.read().map(|guard| guard.invalid).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Mirror an externally supplied value, placing the cursor at the end.
    /// Does not call the change handler.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.chars().count();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the value. Does not call the change handler.
    pub fn clear(&self) {
        self.set_value("");
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Mark the field invalid; the error message replaces the helper text
    /// while set. Purely cosmetic, the field itself validates nothing.
    pub fn set_invalid(&self, invalid: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = invalid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_error_message(&self, message: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(message.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Editing (driven by process_event)
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor. Returns true if the text changed.
    pub(super) fn insert_char(&self, c: char) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let byte_pos = char_to_byte_index(&guard.value, guard.cursor);
            guard.value.insert(byte_pos, c);
            guard.cursor += 1;
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Delete the character before the cursor. Returns true if the text
    /// changed.
    pub(super) fn delete_back(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.cursor == 0 {
                return false;
            }
            let byte_pos = char_to_byte_index(&guard.value, guard.cursor - 1);
            guard.value.remove(byte_pos);
            guard.cursor -= 1;
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Delete the character at the cursor. Returns true if the text changed.
    pub(super) fn delete_forward(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let char_count = guard.value.chars().count();
            if guard.cursor >= char_count {
                return false;
            }
            let byte_pos = char_to_byte_index(&guard.value, guard.cursor);
            guard.value.remove(byte_pos);
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Move the cursor by one character in either direction.
    pub(super) fn move_cursor(&self, delta: i32) {
        if let Ok(mut guard) = self.inner.write() {
            let char_count = guard.value.chars().count() as i32;
            guard.cursor = (guard.cursor as i32 + delta).clamp(0, char_count) as usize;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub(super) fn move_to_start(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub(super) fn move_to_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = guard.value.chars().count();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for TextField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextField").field("id", &self.id).finish()
    }
}

/// Convert a character index to a byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
