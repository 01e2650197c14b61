use super::{Border, Color, TextStyle};

/// Visual attributes of an element.
///
/// Border glyphs are drawn in `border_color` when set, falling back to
/// `foreground` so a bare bordered box stays readable.
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Overlay another style on top of this one. Set fields of `other` win;
    /// unset fields keep this style's value. Used for focus/disabled states.
    pub fn merged(&self, other: &Style) -> Style {
        Style {
            background: other.background.clone().or_else(|| self.background.clone()),
            foreground: other.foreground.clone().or_else(|| self.foreground.clone()),
            border: if other.border == Border::None {
                self.border
            } else {
                other.border
            },
            border_color: other
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            text_style: TextStyle {
                bold: self.text_style.bold || other.text_style.bold,
                italic: self.text_style.italic || other.text_style.italic,
                underline: self.text_style.underline || other.text_style.underline,
                dim: self.text_style.dim || other.text_style.dim,
            },
        }
    }
}
