/// What an element holds: nothing, a text run, an editable text line, or
/// child elements.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
        /// Whether the cursor block is drawn. Set by the owning widget from
        /// the host's focus state, not by the DOM.
        focused: bool,
    },
    Children(Vec<super::Element>),
}
