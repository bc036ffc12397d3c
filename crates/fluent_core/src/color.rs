//! Color types and utilities

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a 24-bit `0xRRGGBB` value (fully opaque)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create from a 32-bit `0xRRGGBBAA` value
    pub fn from_hex_rgba(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    pub fn is_clear(&self) -> bool {
        self.a <= 0.0
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Error returned when a color literal cannot be parsed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid color literal `{0}` (expected #RRGGBB or #RRGGBBAA)")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#RRGGBB`, `#RRGGBBAA`, `0xRRGGBB` or a bare hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError(s.to_string()))?;

        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_hex_rgba(value)),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_components() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(Color::from_hex_rgba(0x00000080).to_rgba8(), [0, 0, 0, 128]);
    }

    #[test]
    fn parse_and_display() {
        let c: Color = "#822FFF".parse().unwrap();
        assert_eq!(c, Color::from_hex(0x822FFF));
        assert_eq!(c.to_string(), "#822FFF");

        let translucent: Color = "0x00000024".parse().unwrap();
        assert_eq!(translucent.to_string(), "#00000024");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("purple".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
    }
}
