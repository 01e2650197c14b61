//! Styled single-line text input widget.

mod events;
mod render;
mod state;

pub use events::FieldEvent;
pub use state::{FieldId, FieldSize, FieldVariant, TextField};
