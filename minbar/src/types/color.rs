/// A color as used in styles: either a concrete RGB value, a named theme
/// variable, or a base color with derivation operations applied on top.
///
/// Variables and derived colors are resolved to `Rgb` by a
/// [`ColorContext`](super::ColorContext) at paint time.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Var(String),
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

/// An operation applied to a base color, in Oklch space.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Mix(Color, f32),
}

/// A concrete 24-bit color.
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

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// A color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self::Rgb(Rgb::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// A named theme variable, resolved at paint time.
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
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_channels() {
        assert_eq!(Color::hex(0x1e2d3c), Color::rgb(0x1e, 0x2d, 0x3c));
    }

    #[test]
    fn ops_accumulate_on_one_derived_node() {
        let c = Color::var("accent").darken(0.2).lighten(0.1);
        match c {
            Color::Derived { base, ops } => {
                assert_eq!(*base, Color::var("accent"));
                assert_eq!(ops.len(), 2);
            }
            other => panic!("expected derived color, got {other:?}"),
        }
    }
}
