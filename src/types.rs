//! Shared value types: numeric validation, colors, palette, stroke weights.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A polyline in drawing units (SVG user space, y down).
pub type Path = Vec<DVec2>;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
    /// Value is above the accepted maximum
    TooLarge { max: f64 },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::TooLarge { max } => write!(f, "value exceeds {max}"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinite values.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject non-finite and negative values.
#[inline]
pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Reject non-finite, negative and zero values.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_non_negative(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Both components finite.
#[inline]
pub fn is_finite_point(p: DVec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// An opaque sRGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Pack as 0xRRGGBB
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor {
            value: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
        match hex.len() {
            // #rgb expands each nibble: #a5f -> #aa55ff
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Color::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

/// The drawing palette. Defaults to warm ink-on-paper tones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Object outlines
    pub ink: Color,
    /// Lettering strokes and note labels
    pub brown: Color,
    /// Dimensions, callouts, center lines
    pub amber: Color,
    pub tan: Color,
    /// Paper background and label backings
    pub cream: Color,
    pub parchment: Color,
    pub linen: Color,
    /// Section hatching
    pub hatch: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ink: Color::rgb(0x3a, 0x2a, 0x1a),
            brown: Color::rgb(0x6b, 0x3a, 0x1f),
            amber: Color::rgb(0xb5, 0x65, 0x1d),
            tan: Color::rgb(0xc8, 0x93, 0x4a),
            cream: Color::rgb(0xf5, 0xf0, 0xe8),
            parchment: Color::rgb(0xed, 0xe5, 0xd4),
            linen: Color::rgb(0xe8, 0xdc, 0xc8),
            hatch: Color::rgb(0x8b, 0x5a, 0x2b),
        }
    }
}

impl Palette {
    /// Look up a palette entry by name.
    pub fn get(&self, name: &str) -> Option<Color> {
        let c = match name {
            "ink" => self.ink,
            "brown" => self.brown,
            "amber" => self.amber,
            "tan" => self.tan,
            "cream" => self.cream,
            "parchment" => self.parchment,
            "linen" => self.linen,
            "hatch" => self.hatch,
            _ => return None,
        };
        Some(c)
    }
}

/// Stroke widths, written verbatim into `stroke-width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeWeight {
    /// Object outlines
    Heavy,
    /// Dimension lines, lettering, callout rims
    Medium,
    /// Extension lines, hatching, center lines
    Light,
}

impl StrokeWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            StrokeWeight::Heavy => "1.8",
            StrokeWeight::Medium => "1.2",
            StrokeWeight::Light => "0.75",
        }
    }
}

impl fmt::Display for StrokeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_hex() {
        let c: Color = "#b5651d".parse().unwrap();
        assert_eq!(c, Color::rgb(0xb5, 0x65, 0x1d));
        assert_eq!(c.to_string(), "#b5651d");
        assert_eq!(c.to_u32(), 0xb5651d);
    }

    #[test]
    fn parse_short_hex() {
        let c: Color = "#a5f".parse().unwrap();
        assert_eq!(c.to_string(), "#aa55ff");
    }

    #[test]
    fn reject_bad_colors() {
        for bad in ["b5651d", "#12", "#gggggg", "#1234567", "#é1"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn default_palette_matches_named_lookup() {
        let p = Palette::default();
        assert_eq!(p.get("cream").unwrap().to_string(), "#f5f0e8");
        assert_eq!(p.get("hatch").unwrap().to_string(), "#8b5a2b");
        assert!(p.get("crimson").is_none());
    }

    #[test]
    fn numeric_checks() {
        assert_eq!(check_positive(0.0), Err(NumericError::Zero));
        assert_eq!(check_positive(-1.0), Err(NumericError::Negative));
        assert_eq!(check_non_negative(f64::NAN), Err(NumericError::NaN));
        assert_eq!(check_finite(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(check_non_negative(0.0), Ok(0.0));
    }
}
