//! Colour parsing for constant colour checks.
//!
//! Symbolizers carry colours as CSS strings and pass them through to the
//! renderer untouched. This type exists so constant colours in a style
//! document can be checked before anything is rendered.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StyleError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').ok_or_else(|| invalid(s))?;
        if !hex.is_ascii() {
            return Err(invalid(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut nibbles = [15u8; 4];
                for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b, a] = nibbles.map(|n| n << 4 | n);
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let mut bytes = [255u8; 4];
                for (i, slot) in bytes.iter_mut().enumerate().take(hex.len() / 2) {
                    *slot = parse_hex_byte(&hex[i * 2..i * 2 + 2])?;
                }
                let [r, g, b, a] = bytes;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid(s)),
        }
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid(s: &str) -> StyleError {
    StyleError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| StyleError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| StyleError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#696969").unwrap();
        assert_eq!(c, Colour::rgb(0x69, 0x69, 0x69));

        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#fff").unwrap();
        assert_eq!(c, Colour::rgb(255, 255, 255));
        assert!(c.is_opaque());
    }

    #[test]
    fn test_from_hex_alpha() {
        assert_eq!(Colour::from_hex("#ff000080").unwrap(), Colour::new(255, 0, 0, 128));
        assert_eq!(Colour::from_hex("#F008").unwrap(), Colour::new(255, 0, 0, 0x88));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("ff0000").is_err());
        assert!(Colour::from_hex("red").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#ff0000");
        assert_eq!(Colour::new(255, 0, 0, 128).to_string(), "#ff000080");
    }
}
