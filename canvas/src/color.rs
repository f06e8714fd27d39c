//! RGB colors: hex parsing for configuration and CSS strings for drawing.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// An opaque 8-bit RGB color.
///
/// Serialized as a lowercase `#rrggbb` string so configuration stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16);
        match hex.len() {
            3 => {
                let r = channel(&hex[0..1].repeat(2));
                let g = channel(&hex[1..2].repeat(2));
                let b = channel(&hex[2..3].repeat(2));
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Some(Self::new(r, g, b)),
                    _ => None,
                }
            }
            6 => match (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])) {
                (Ok(r), Ok(g), Ok(b)) => Some(Self::new(r, g, b)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgb(r,g,b)` form used as a Canvas2D fill style.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value).ok_or(ConfigError::InvalidColor(value))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.hex()
    }
}
