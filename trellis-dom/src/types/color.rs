/// A color as used in styles and themes.
///
/// Concrete colors are authored either as Oklch (perceptual, the form themes
/// use) or as raw sRGB. `Var` references a named theme variable and `Derived`
/// applies operations on top of another color; both are resolved to a
/// concrete color by [`ColorContext`](super::ColorContext) before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    Var(String),
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Mix(Color, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A concrete color in Oklch space, used for derived-color math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Oklch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        use palette::{IntoColor, Oklch as PalOklch, Srgb};

        let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
        let oklch: PalOklch = srgb.into_color();
        Self {
            l: oklch.l,
            c: oklch.chroma,
            h: oklch.hue.into_positive_degrees(),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        use palette::{IntoColor, Oklch as PalOklch, Srgb};

        let oklch = PalOklch::new(self.l, self.c, self.h);
        let srgb: Srgb = oklch.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    pub fn mix(self, other: Color, amount: f32) -> Self {
        self.with_op(ColorOp::Mix(other, amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    /// Convert a concrete color to sRGB. `Var` and `Derived` need a
    /// [`ColorContext`](super::ColorContext) and fall back to black here.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => Oklch::new(*l, *c, *h).to_rgb(),
            Self::Var(_) | Self::Derived { .. } => Rgb::default(),
        }
    }
}
