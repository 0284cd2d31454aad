//! 24-bit colors for the display surface.
//!
//! Colors travel as `#rrggbb` hex strings at the persistence and CLI
//! boundaries and as packed RGB components in memory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for hex color parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string. The leading `#` is optional; digits
    /// may be upper or lower case.
    pub fn parse_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let invalid = || ColorError::InvalidHex(s.to_string());
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
        Ok(Self { r, g, b })
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_hash() {
        let color = Rgb::parse_hex("#1F2937").unwrap();
        assert_eq!(color, Rgb::new(0x1f, 0x29, 0x37));
    }

    #[test]
    fn test_parse_without_hash() {
        let color = Rgb::parse_hex("8ace00").unwrap();
        assert_eq!(color, Rgb::new(0x8a, 0xce, 0x00));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(Rgb::parse_hex("#fff").is_err());
        assert!(Rgb::parse_hex("").is_err());
        assert!(Rgb::parse_hex("#1234567").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_digits() {
        let result = Rgb::parse_hex("#zzzzzz");
        assert!(matches!(result, Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgb::new(0x1f, 0x29, 0x37);
        assert_eq!(color.hex(), "#1f2937");
        assert_eq!(Rgb::parse_hex(&color.hex()).unwrap(), color);
    }

    #[test]
    fn test_serde_as_string() {
        let color = Rgb::new(255, 255, 255);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#ffffff\"");

        let back: Rgb = serde_json::from_str("\"#1F2937\"").unwrap();
        assert_eq!(back, Rgb::new(0x1f, 0x29, 0x37));
    }
}
