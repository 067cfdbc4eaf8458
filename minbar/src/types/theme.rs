use palette::{IntoColor, Oklch, Srgb};

use super::{Color, ColorOp, Rgb};

/// A theme maps variable names to colors.
pub trait Theme: Send + Sync {
    /// Resolve a variable name. Returns None for unknown names.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Bare readable defaults, used when no theme is supplied.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
    pub accent: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::rgb(0, 0, 0),
            foreground: Color::rgb(255, 255, 255),
            surface: Color::rgb(38, 38, 38),
            border: Color::rgb(102, 102, 102),
            accent: Color::rgb(230, 230, 230),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "accent" => Some(&self.accent),
            _ => None,
        }
    }
}

/// Resolves variables and derived colors to concrete RGB values.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to a concrete RGB value. Unknown variables resolve
    /// to black rather than failing, so a missing theme entry is visible
    /// but harmless.
    pub fn resolve(&self, color: &Color) -> Rgb {
        match color {
            Color::Rgb(rgb) => *rgb,
            Color::Var(name) => match self.theme.resolve(name) {
                Some(inner) => self.resolve(inner),
                None => {
                    log::debug!("unresolved theme variable: {name}");
                    Rgb::default()
                }
            },
            Color::Derived { base, ops } => {
                let mut oklch = rgb_to_oklch(self.resolve(base));
                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => {
                            oklch.l = (oklch.l + amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Darken(amount) => {
                            oklch.l = (oklch.l - amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Mix(other, amount) => {
                            let other = rgb_to_oklch(self.resolve(other));
                            oklch = mix_oklch(oklch, other, *amount);
                        }
                    }
                }
                oklch_to_rgb(oklch)
            }
        }
    }
}

fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
    srgb.into_color()
}

fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

fn mix_oklch(a: Oklch, b: Oklch, amount: f32) -> Oklch {
    let amount = amount.clamp(0.0, 1.0);
    let ha: f32 = a.hue.into_positive_degrees();
    let hb: f32 = b.hue.into_positive_degrees();
    // Interpolate hue along the shorter arc.
    let mut diff = hb - ha;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    Oklch::new(
        a.l + (b.l - a.l) * amount,
        a.chroma + (b.chroma - a.chroma) * amount,
        (ha + diff * amount).rem_euclid(360.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_colors_pass_through() {
        let theme = DefaultTheme::new();
        let cx = ColorContext::new(&theme);
        assert_eq!(cx.resolve(&Color::rgb(10, 20, 30)), Rgb::new(10, 20, 30));
    }

    #[test]
    fn variables_resolve_through_theme() {
        let theme = DefaultTheme::new();
        let cx = ColorContext::new(&theme);
        assert_eq!(cx.resolve(&Color::var("background")), Rgb::new(0, 0, 0));
        assert_eq!(
            cx.resolve(&Color::var("foreground")),
            Rgb::new(255, 255, 255)
        );
    }

    #[test]
    fn unknown_variable_resolves_to_black() {
        let theme = DefaultTheme::new();
        let cx = ColorContext::new(&theme);
        assert_eq!(cx.resolve(&Color::var("no-such-var")), Rgb::default());
    }

    #[test]
    fn darken_reduces_lightness() {
        let theme = DefaultTheme::new();
        let cx = ColorContext::new(&theme);
        let bright = cx.resolve(&Color::rgb(200, 200, 200));
        let darker = cx.resolve(&Color::rgb(200, 200, 200).darken(0.3));
        assert!(u32::from(darker.r) < u32::from(bright.r));
    }

    #[test]
    fn mix_at_full_amount_is_the_other_color() {
        let theme = DefaultTheme::new();
        let cx = ColorContext::new(&theme);
        let mixed = cx.resolve(&Color::rgb(255, 0, 0).mix(Color::rgb(0, 0, 255), 1.0));
        let target = cx.resolve(&Color::rgb(0, 0, 255));
        // Round-tripping through Oklch may be off by a unit per channel.
        assert!(i32::from(mixed.b).abs_diff(i32::from(target.b)) <= 2);
    }
}
