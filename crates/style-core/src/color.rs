use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// An sRGB color with an alpha channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

/// A color in hue / saturation / lightness form.
///
/// `hue` is in degrees, `saturation` and `lightness` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

/// Named colors accepted by [`Color::parse`].
const NAMED_COLORS: &[(&str, &str)] = &[
    ("aqua", "00ffff"),
    ("black", "000000"),
    ("blue", "0000ff"),
    ("fuchsia", "ff00ff"),
    ("gray", "808080"),
    ("green", "008000"),
    ("grey", "808080"),
    ("lime", "00ff00"),
    ("maroon", "800000"),
    ("navy", "000080"),
    ("olive", "808000"),
    ("orange", "ffa500"),
    ("pink", "ffc0cb"),
    ("purple", "800080"),
    ("red", "ff0000"),
    ("silver", "c0c0c0"),
    ("teal", "008080"),
    ("white", "ffffff"),
    ("yellow", "ffff00"),
];

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Parse a CSS color string.
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let value = input.trim().to_ascii_lowercase();
        let invalid = || StyleError::invalid_color(input);

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        if let Some(args) = function_args(&value, "rgba").or_else(|| function_args(&value, "rgb")) {
            return parse_rgb_args(&args).ok_or_else(invalid);
        }
        if let Some(args) = function_args(&value, "hsla").or_else(|| function_args(&value, "hsl")) {
            return parse_hsl_args(&args).ok_or_else(invalid);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == value)
            .and_then(|(_, hex)| parse_hex(hex))
            .ok_or_else(invalid)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    pub fn to_hsl(&self) -> Hsl {
        let red = f64::from(self.red) / 255.0;
        let green = f64::from(self.green) / 255.0;
        let blue = f64::from(self.blue) / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness,
                alpha: self.alpha,
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Hsl {
            hue: hue * 60.0,
            saturation,
            lightness,
            alpha: self.alpha,
        }
    }
}

impl Hsl {
    /// Return a copy with lightness shifted by `amount`, clamped to `[0, 1]`.
    pub fn shift_lightness(self, amount: f64) -> Self {
        Self {
            lightness: (self.lightness + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_color(&self) -> Color {
        let (red, green, blue) = hsl_to_rgb(self.hue, self.saturation, self.lightness);
        Color {
            red,
            green,
            blue,
            alpha: self.alpha,
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            let [r, g, b] = [self.red, self.green, self.blue];
            if [r, g, b].iter().all(|&c| c >> 4 == c & 0x0f) {
                write!(f, "#{:x}{:x}{:x}", r & 0x0f, g & 0x0f, b & 0x0f)
            } else {
                write!(f, "#{r:02x}{g:02x}{b:02x}")
            }
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

/// Lighten `color` by `amount` (0..1) of HSL lightness.
///
/// ```
/// assert_eq!(style_core::lighten(0.1, "#228be6").unwrap(), "#50a3eb");
/// ```
pub fn lighten(amount: f64, color: &str) -> Result<String, StyleError> {
    adjust_lightness(amount, color)
}

/// Darken `color` by `amount` (0..1) of HSL lightness.
pub fn darken(amount: f64, color: &str) -> Result<String, StyleError> {
    adjust_lightness(-amount, color)
}

fn adjust_lightness(delta: f64, color: &str) -> Result<String, StyleError> {
    if color.trim().eq_ignore_ascii_case("transparent") {
        return Ok(color.to_string());
    }
    let hsl = Color::parse(color)?.to_hsl().shift_lightness(delta);
    Ok(hsl.to_color().to_string())
}

fn channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    if saturation == 0.0 {
        let c = channel(lightness);
        return (c, c, c);
    }

    let hue_prime = (((hue % 360.0) + 360.0) % 360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let second = chroma * (1.0 - ((hue_prime % 2.0) - 1.0).abs());

    let (red, green, blue) = match hue_prime {
        h if h < 1.0 => (chroma, second, 0.0),
        h if h < 2.0 => (second, chroma, 0.0),
        h if h < 3.0 => (0.0, chroma, second),
        h if h < 4.0 => (0.0, second, chroma),
        h if h < 5.0 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    let offset = lightness - chroma / 2.0;
    (
        channel(red + offset),
        channel(green + offset),
        channel(blue + offset),
    )
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();

    let alpha = match expanded.len() {
        8 => (f64::from(byte(6)?) / 255.0 * 100.0).round() / 100.0,
        _ => 1.0,
    };
    Some(Color {
        red: byte(0)?,
        green: byte(2)?,
        blue: byte(4)?,
        alpha,
    })
}

/// Extract the comma-separated arguments of `name(...)`.
fn function_args(value: &str, name: &str) -> Option<Vec<String>> {
    let inner = value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(|a| a.trim().to_string()).collect())
}

fn parse_alpha(args: &[String], index: usize) -> Option<f64> {
    match args.get(index) {
        Some(a) => {
            let alpha: f64 = a.parse().ok()?;
            (0.0..=1.0).contains(&alpha).then_some(alpha)
        }
        None => Some(1.0),
    }
}

fn parse_rgb_args(args: &[String]) -> Option<Color> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let component = |a: &String| -> Option<u8> {
        let v: f64 = a.parse().ok()?;
        (0.0..=255.0).contains(&v).then(|| v.round() as u8)
    };
    Some(Color {
        red: component(&args[0])?,
        green: component(&args[1])?,
        blue: component(&args[2])?,
        alpha: parse_alpha(args, 3)?,
    })
}

fn parse_hsl_args(args: &[String]) -> Option<Color> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue: f64 = args[0].trim_end_matches("deg").parse().ok()?;
    let percent = |a: &String| -> Option<f64> {
        let v: f64 = a.strip_suffix('%')?.trim().parse().ok()?;
        (0.0..=100.0).contains(&v).then_some(v / 100.0)
    };
    let saturation = percent(&args[1])?;
    let lightness = percent(&args[2])?;
    Some(
        Hsl {
            hue,
            saturation,
            lightness,
            alpha: parse_alpha(args, 3)?,
        }
        .to_color(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse("#228BE6").unwrap(), Color::rgb(0x22, 0x8b, 0xe6));
        assert_eq!(Color::parse("  #3c64b1 ").unwrap(), Color::rgb(60, 100, 177));
    }

    #[test]
    fn parses_hex_with_alpha() {
        let c = Color::parse("#ff000080").unwrap();
        assert_eq!((c.red, c.green, c.blue), (255, 0, 0));
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn parses_functional_notation() {
        assert_eq!(Color::parse("rgb(34, 139, 230)").unwrap(), Color::rgb(34, 139, 230));
        let c = Color::parse("rgba(0,0,0,0.25)").unwrap();
        assert_eq!(c.alpha, 0.25);
        assert_eq!(Color::parse("hsl(0, 100%, 50%)").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(Color::parse("Navy").unwrap(), Color::rgb(0, 0, 128));
        assert_eq!(Color::parse("white").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#12", "#ggg", "rgb(1,2)", "rgb(300,0,0)", "hsl(0,50,50)", "blurple"] {
            assert!(
                matches!(Color::parse(bad), Err(StyleError::InvalidColor { .. })),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn display_reduces_repeating_hex() {
        assert_eq!(Color::rgb(255, 255, 255).to_string(), "#fff");
        assert_eq!(Color::rgb(0xcc, 0x00, 0x00).to_string(), "#c00");
        assert_eq!(Color::rgb(0x22, 0x8b, 0xe6).to_string(), "#228be6");
    }

    #[test]
    fn display_translucent_as_rgba() {
        let c = Color {
            alpha: 0.5,
            ..Color::rgb(10, 20, 30)
        };
        assert_eq!(c.to_string(), "rgba(10,20,30,0.5)");
    }

    #[test]
    fn hsl_conversion_is_stable_for_palette_colors() {
        for hex in ["#228be6", "#495057", "#f06595", "#3c64b1"] {
            let color = Color::parse(hex).unwrap();
            assert_eq!(color.to_hsl().to_color(), color);
        }
    }

    #[test]
    fn lighten_and_darken_palette_blue() {
        assert_eq!(lighten(0.1, "#228be6").unwrap(), "#50a3eb");
        assert_eq!(darken(0.1, "#228be6").unwrap(), "#1671bf");
        assert_eq!(lighten(0.3, "#228be6").unwrap(), "#abd3f6");
        assert_eq!(darken(0.3, "#228be6").unwrap(), "#0b3b64");
    }

    #[test]
    fn lighten_and_darken_other_palette_colors() {
        assert_eq!(lighten(0.1, "#495057").unwrap(), "#606a73");
        assert_eq!(darken(0.1, "#495057").unwrap(), "#32373b");
        assert_eq!(lighten(0.1, "#f06595").unwrap(), "#f593b5");
        assert_eq!(darken(0.1, "#f06595").unwrap(), "#eb3775");
    }

    #[test]
    fn lightness_is_clamped() {
        assert_eq!(lighten(0.5, "#228be6").unwrap(), "#fff");
        assert_eq!(darken(0.1, "#000").unwrap(), "#000");
        assert_eq!(darken(0.3, "#ff0000").unwrap(), "#600");
    }

    #[test]
    fn header_navy_lightened_by_half() {
        assert_eq!(lighten(0.5, "#3c64b1").unwrap(), "#f2f5fa");
    }

    #[test]
    fn transparent_passes_through() {
        assert_eq!(lighten(0.2, "transparent").unwrap(), "transparent");
    }

    #[test]
    fn translucent_colors_keep_alpha() {
        assert_eq!(
            darken(0.1, "rgba(255,255,255,0.5)").unwrap(),
            "rgba(230,230,230,0.5)"
        );
    }

    #[test]
    fn invalid_input_is_reported() {
        assert_eq!(
            lighten(0.1, "not-a-color"),
            Err(StyleError::invalid_color("not-a-color"))
        );
    }
}
