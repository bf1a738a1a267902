//! Opaque 8-bit RGB color type
//!
//! Every color that enters or leaves the selection algorithms is an [`Rgb`]:
//! swatch colors, the chosen background, and both text colors. Conversions
//! into [`Hsl`](super::Hsl) and [`Lab`](super::Lab) always round back to
//! whole bytes, so results are valid opaque colors by construction.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::lab::Lab;

/// A fully opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from individual channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. Bits above the low
    /// 24 are ignored.
    ///
    /// # Example
    /// ```
    /// use harmonic_colors::Rgb;
    /// assert_eq!(Rgb::from_u32(0x3366cc), Rgb::new(0x33, 0x66, 0xcc));
    /// ```
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Shift the CIE LAB lightness by `amount`, clamping L to `0..=100`.
    ///
    /// Hue and chroma (the `a`/`b` axes) are preserved; the result is
    /// rounded back into gamut.
    ///
    /// # Example
    /// ```
    /// use harmonic_colors::Rgb;
    /// let darker = Rgb::new(120, 160, 200).shift_lightness(-20.0);
    /// assert!(darker.r < 120 && darker.g < 160 && darker.b < 200);
    /// ```
    pub fn shift_lightness(self, amount: f64) -> Rgb {
        let lab = Lab::from(self);
        let l = (lab.l + amount).clamp(0.0, 100.0);
        Rgb::from(Lab::new(l, lab.a, lab.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() || !matches!(s.len(), 3 | 6) {
            return Err(ParseColorError::InvalidLength);
        }
        // from_str_radix alone would accept a leading '+'
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}
