//! Packed RGBA color values.
//!
//! Color properties store a single `u32` laid out as `0xRRGGBBAA`. [`Rgba`]
//! converts between that packed form, its channels, and the textual forms
//! style files use:
//!
//! - Hex: `"#rgb"`, `"#rrggbb"` (opaque), `"#rrggbbaa"`
//! - Packed literal: `"0x9f9f9fff"`
//! - Palette names: `raywhite`, `skyblue`, `blank`, … (case-insensitive)
//!
//! # Example
//!
//! ```rust
//! use guistyle::Rgba;
//!
//! let focused = Rgba::parse("#9f9f9f").unwrap();
//! assert_eq!(focused.packed(), 0x9f9f9fff);
//!
//! let clear = Rgba::parse("blank").unwrap();
//! assert_eq!(clear.packed(), 0x00000000);
//! ```

use std::fmt;

use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Hex digits were malformed or of the wrong length.
    #[error("invalid hex color '{0}' (expected 3, 6 or 8 digits)")]
    InvalidHex(String),
    /// The name is not part of the palette.
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

/// A color with 8-bit channels, packable into a style value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// Unpacks `0xRRGGBBAA`.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 24) as u8,
            g: (value >> 16) as u8,
            b: (value >> 8) as u8,
            a: value as u8,
        }
    }

    /// Packs into `0xRRGGBBAA`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }

    /// Parses a hex code, a `0x` packed literal, or a palette name.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u32::from_str_radix(digits, 16)
                .map(Self::from_packed)
                .map_err(|_| ColorParseError::InvalidHex(s.to_string()));
        }

        Self::named(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }

    /// Parses hex digits without the `#` prefix.
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{}", hex));
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(invalid)
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Self::opaque(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Looks up a palette color by name.
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "lightgray" | "lightgrey" => Self::opaque(200, 200, 200),
            "gray" | "grey" => Self::opaque(130, 130, 130),
            "darkgray" | "darkgrey" => Self::opaque(80, 80, 80),
            "yellow" => Self::opaque(253, 249, 0),
            "gold" => Self::opaque(255, 203, 0),
            "orange" => Self::opaque(255, 161, 0),
            "pink" => Self::opaque(255, 109, 194),
            "red" => Self::opaque(230, 41, 55),
            "maroon" => Self::opaque(190, 33, 55),
            "green" => Self::opaque(0, 228, 48),
            "lime" => Self::opaque(0, 158, 47),
            "darkgreen" => Self::opaque(0, 117, 44),
            "skyblue" => Self::opaque(102, 191, 255),
            "blue" => Self::opaque(0, 121, 241),
            "darkblue" => Self::opaque(0, 82, 172),
            "purple" => Self::opaque(200, 122, 255),
            "violet" => Self::opaque(135, 60, 190),
            "darkpurple" => Self::opaque(112, 31, 126),
            "beige" => Self::opaque(211, 176, 131),
            "brown" => Self::opaque(127, 106, 79),
            "darkbrown" => Self::opaque(76, 63, 47),
            "white" => Self::opaque(255, 255, 255),
            "black" => Self::opaque(0, 0, 0),
            "blank" | "transparent" => Self::new(0, 0, 0, 0),
            "magenta" => Self::opaque(255, 0, 255),
            "raywhite" => Self::opaque(245, 245, 245),
            _ => return None,
        };
        Some(color)
    }
}

impl From<u32> for Rgba {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.packed()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let color = Rgba::from_packed(0x9de9f8ff);
        assert_eq!(color, Rgba::new(0x9d, 0xe9, 0xf8, 0xff));
        assert_eq!(color.packed(), 0x9de9f8ff);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Rgba::parse("#fff").unwrap().packed(), 0xffffffff);
        assert_eq!(Rgba::parse("#9f9f9f").unwrap().packed(), 0x9f9f9fff);
        assert_eq!(Rgba::parse("#90abb580").unwrap().packed(), 0x90abb580);
    }

    #[test]
    fn test_parse_packed_literal() {
        assert_eq!(Rgba::parse("0x00000000").unwrap().packed(), 0);
        assert_eq!(Rgba::parse("0XF5F5F5FF").unwrap().packed(), 0xf5f5f5ff);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Rgba::parse("RayWhite").unwrap(), Rgba::opaque(245, 245, 245));
        assert_eq!(Rgba::parse("blank").unwrap().a, 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Rgba::parse("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Rgba::parse("#gggggg"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Rgba::parse("0xnothex"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Rgba::parse("chartreuse"),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::from_packed(0x9f9f9fff).to_string(), "#9f9f9fff");
    }
}
