use crate::types::{Color, ColorOp, Oklch, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Default empty theme that resolves nothing.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Context for resolving color variables and derived colors.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete color (no `Var` or `Derived` variants).
    /// Variables are looked up in the theme; derived colors have their
    /// operations applied in Oklch space.
    pub fn resolve(&self, color: &Color) -> Color {
        match color {
            Color::Var(name) => {
                if let Some(resolved) = self.theme.resolve(name) {
                    // Recurse in case the theme returns another Var or Derived
                    self.resolve(resolved)
                } else {
                    log::warn!("unresolved color variable: {name}");
                    Color::Rgb { r: 0, g: 0, b: 0 }
                }
            }
            Color::Derived { base, ops } => {
                let mut oklch = to_oklch(&self.resolve(base));
                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => {
                            oklch.l = (oklch.l + amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Darken(amount) => {
                            oklch.l = (oklch.l - amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Mix(other, amount) => {
                            let other = to_oklch(&self.resolve(other));
                            oklch.l = oklch.l * (1.0 - amount) + other.l * amount;
                            oklch.c = oklch.c * (1.0 - amount) + other.c * amount;
                            // Shortest-path hue interpolation
                            let mut h_diff = other.h - oklch.h;
                            if h_diff > 180.0 {
                                h_diff -= 360.0;
                            } else if h_diff < -180.0 {
                                h_diff += 360.0;
                            }
                            oklch.h = (oklch.h + h_diff * amount).rem_euclid(360.0);
                        }
                    }
                }
                Color::Oklch {
                    l: oklch.l,
                    c: oklch.c,
                    h: oklch.h,
                }
            }
            Color::Oklch { .. } | Color::Rgb { .. } => color.clone(),
        }
    }

    /// Resolve a color all the way down to sRGB.
    pub fn resolve_rgb(&self, color: &Color) -> Rgb {
        self.resolve(color).to_rgb()
    }
}

fn to_oklch(color: &Color) -> Oklch {
    match color {
        Color::Oklch { l, c, h } => Oklch::new(*l, *c, *h),
        Color::Rgb { r, g, b } => Oklch::from_rgb(Rgb::new(*r, *g, *b)),
        // Cannot happen after resolve(), but handle gracefully
        Color::Var(_) | Color::Derived { .. } => Oklch::default(),
    }
}
