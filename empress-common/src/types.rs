use std::{fmt, str::FromStr};

use palette::Srgb;

use crate::error::ColorError;

/// Canonical sRGB color used everywhere a legend shows a color.
///
/// Colors arrive in whatever form the caller has on hand (hex strings, `rgb()`
/// strings, named colors, normalized float components) and are normalized here
/// once, so two spellings of the same color compare equal.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert normalized rgba components. Alpha is dropped.
    pub fn from_rgba_f32(rgba: [f32; 4]) -> Self {
        let [r, g, b, _] = rgba.map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) });
        Srgb::new(r, g, b).into_format::<u8>().into()
    }

    pub fn to_rgba_f32(&self) -> [f32; 4] {
        let srgb = self.to_srgb().into_format::<f32>();
        [srgb.red, srgb.green, srgb.blue, 1.0]
    }

    pub fn to_srgb(&self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{}", self.to_hex_string())
    }

    /// Lowercase `rrggbb` without the leading `#`
    pub fn to_hex_string(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The `rgb(r, g, b)` form browsers report for computed styles
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = trimmed
            .parse::<css_color_parser::Color>()
            .map_err(|e| ColorError::InvalidColor(format!("{trimmed:?}: {e:?}")))?;
        Ok(Self::new(parsed.r, parsed.g, parsed.b))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(value: Srgb<u8>) -> Self {
        Self::new(value.red, value.green, value.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A color as supplied by a caller.
///
/// Inputs that don't parse are kept verbatim instead of being rejected, so a
/// bad color shows up as a rendering artifact rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ColorSpec {
    Resolved(Color),
    Unresolved(String),
}

impl ColorSpec {
    pub fn parse(s: &str) -> Self {
        match s.parse::<Color>() {
            Ok(color) => ColorSpec::Resolved(color),
            Err(err) => {
                log::warn!("Leaving color unresolved: {err}");
                ColorSpec::Unresolved(s.to_string())
            }
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            ColorSpec::Resolved(color) => Some(*color),
            ColorSpec::Unresolved(_) => None,
        }
    }

    /// Value suitable for a CSS color property
    pub fn to_css(&self) -> String {
        match self {
            ColorSpec::Resolved(color) => color.to_hex(),
            ColorSpec::Unresolved(raw) => raw.clone(),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(value: Color) -> Self {
        ColorSpec::Resolved(value)
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::parse(value)
    }
}

impl From<&String> for ColorSpec {
    fn from(value: &String) -> Self {
        ColorSpec::parse(value)
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        ColorSpec::parse(&value)
    }
}

impl From<[f32; 4]> for ColorSpec {
    fn from(value: [f32; 4]) -> Self {
        ColorSpec::Resolved(Color::from_rgba_f32(value))
    }
}

impl From<ColorSpec> for String {
    fn from(value: ColorSpec) -> Self {
        value.to_css()
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}
