//! Widget theme: named color variables the widgets reference via
//! `Color::var`, resolved through the DOM's [`Theme`] trait. Presentation
//! lives entirely here; widget logic never hard-codes a color.

use trellis_dom::{Color, Theme};

pub struct TableColors {
    pub header_bg: Color,
    pub header_fg: Color,
    pub row_selected: Color,
    pub row_focused: Color,
    pub empty_fg: Color,
}

pub struct FieldColors {
    pub background: Color,
    pub border: Color,
    pub border_focus: Color,
    pub label: Color,
    pub helper: Color,
    pub error: Color,
    pub disabled: Color,
}

pub struct TrellisTheme {
    // Core colors
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub accent: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // Component groups
    pub table: TableColors,
    pub field: FieldColors,
}

impl Theme for TrellisTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "muted" => Some(&self.muted),
            "accent" => Some(&self.accent),
            "success" => Some(&self.success),
            "warning" => Some(&self.warning),
            "danger" => Some(&self.danger),
            "table.header_bg" => Some(&self.table.header_bg),
            "table.header_fg" => Some(&self.table.header_fg),
            "table.row_selected" => Some(&self.table.row_selected),
            "table.row_focused" => Some(&self.table.row_focused),
            "table.empty_fg" => Some(&self.table.empty_fg),
            "field.background" => Some(&self.field.background),
            "field.border" => Some(&self.field.border),
            "field.border_focus" => Some(&self.field.border_focus),
            "field.label" => Some(&self.field.label),
            "field.helper" => Some(&self.field.helper),
            "field.error" => Some(&self.field.error),
            "field.disabled" => Some(&self.field.disabled),
            _ => None,
        }
    }
}

/// Create the default theme. Dark with teal accents.
pub fn default_theme() -> TrellisTheme {
    TrellisTheme {
        background: Color::oklch(0.16, 0.01, 220.0),
        surface: Color::oklch(0.21, 0.02, 220.0),
        border: Color::oklch(0.35, 0.02, 220.0),
        primary: Color::oklch(0.92, 0.0, 0.0),
        secondary: Color::oklch(0.75, 0.03, 220.0),
        muted: Color::oklch(0.55, 0.02, 220.0),
        accent: Color::oklch(0.65, 0.12, 200.0),

        success: Color::oklch(0.7, 0.15, 145.0),
        warning: Color::oklch(0.75, 0.15, 85.0),
        danger: Color::oklch(0.62, 0.2, 25.0),

        table: TableColors {
            header_bg: Color::oklch(0.28, 0.03, 220.0),
            header_fg: Color::oklch(0.95, 0.0, 0.0),
            row_selected: Color::oklch(0.35, 0.08, 230.0),
            row_focused: Color::oklch(0.3, 0.05, 220.0),
            empty_fg: Color::oklch(0.55, 0.02, 220.0),
        },

        field: FieldColors {
            background: Color::oklch(0.24, 0.02, 220.0),
            border: Color::oklch(0.35, 0.02, 220.0),
            border_focus: Color::oklch(0.65, 0.12, 200.0),
            label: Color::oklch(0.88, 0.01, 220.0),
            helper: Color::oklch(0.55, 0.02, 220.0),
            error: Color::oklch(0.62, 0.2, 25.0),
            disabled: Color::oklch(0.4, 0.01, 220.0),
        },
    }
}
