//! Element building for the TextField widget.

use trellis_dom::{Border, Color, Edges, Element, Size, Style};

use super::state::{FieldInner, FieldSize, FieldVariant, TextField};

impl TextField {
    /// Build the element tree: optional label, the input line, and below it
    /// either the helper text or (when invalid) the error message.
    ///
    /// `focused` controls the cursor and the focus styling; the host passes
    /// its focus state in, the widget stores none of it.
    pub fn element(&self, focused: bool) -> Element {
        let field_id = self.id_string();
        let Ok(guard) = self.inner.read() else {
            return Element::col().id(field_id);
        };

        let mut root = Element::col().id(&field_id).width(Size::Fill);

        if let Some(label) = &guard.label {
            root = root.child(
                Element::text(label)
                    .id(format!("{field_id}-label"))
                    .style(Style::new().foreground(Color::var("field.label")).bold()),
            );
        }

        root = root.child(self.input_element(&guard, focused));

        // Helper shows only while valid; the error message replaces it
        if guard.invalid {
            if let Some(error) = &guard.error_message {
                root = root.child(
                    Element::text(error)
                        .id(format!("{field_id}-error"))
                        .style(Style::new().foreground(Color::var("field.error"))),
                );
            }
        } else if let Some(helper) = &guard.helper_text {
            root = root.child(
                Element::text(helper)
                    .id(format!("{field_id}-helper"))
                    .style(Style::new().foreground(Color::var("field.helper")).dim()),
            );
        }

        root
    }

    fn input_element(&self, guard: &FieldInner, focused: bool) -> Element {
        let padding = match guard.size {
            FieldSize::Sm => Edges::horizontal(1),
            FieldSize::Md => Edges::horizontal(2),
            FieldSize::Lg => Edges::symmetric(1, 3),
        };

        let mut style = Style::new().foreground(Color::var("primary"));
        let mut style_focused = Style::new();

        match guard.variant {
            FieldVariant::Outlined => {
                style = style
                    .border(Border::Single)
                    .border_color(Color::var("field.border"));
                style_focused = style_focused.border_color(Color::var("field.border_focus"));
            }
            FieldVariant::Filled => {
                style = style.background(Color::var("field.background"));
                style_focused =
                    style_focused.background(Color::var("field.background").lighten(0.05));
            }
            FieldVariant::Ghost => {
                style_focused = style_focused.underline();
            }
        }

        // Invalid wins over variant and focus border colors
        if guard.invalid {
            style = style
                .border(Border::Single)
                .border_color(Color::var("field.error"));
            style_focused = Style::new().border_color(Color::var("field.error"));
        }

        let border_rows = if style.border == Border::None { 0 } else { 2 };
        let height = 1 + padding.vertical_total() + border_rows;

        let mut input = Element::text_input(&guard.value)
            .id(self.input_id())
            .cursor(guard.cursor)
            .input_focused(focused && !guard.disabled)
            .width(Size::Fill)
            .height(Size::Fixed(height))
            .padding(padding)
            .style(style)
            .style_focused(style_focused)
            .style_disabled(Style::new().foreground(Color::var("field.disabled")).dim())
            .disabled(guard.disabled);

        if let Some(placeholder) = &guard.placeholder {
            input = input.placeholder(placeholder);
        }

        input
    }
}
