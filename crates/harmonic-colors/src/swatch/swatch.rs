//! A representative image color with its pixel population.

use crate::color::{Hsl, Rgb};

/// Lightness at or below which a swatch counts as black.
pub const BLACK_MAX_LIGHTNESS: f32 = 0.08;
/// Lightness at or above which a swatch counts as white.
pub const WHITE_MIN_LIGHTNESS: f32 = 0.90;

/// An immutable swatch: a color, its HSL form, and how many sampled pixels
/// it stands for.
///
/// Equality is value equality; two swatches with the same color and
/// population are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    rgb: Rgb,
    hsl: Hsl,
    population: u32,
}

impl Swatch {
    /// Create a swatch, deriving its HSL form from `rgb`.
    pub fn new(rgb: Rgb, population: u32) -> Self {
        Self {
            rgb,
            hsl: Hsl::from(rgb),
            population,
        }
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    #[inline]
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Near-black or near-white, judged on HSL lightness alone.
    #[inline]
    pub fn is_white_or_black(&self) -> bool {
        self.hsl.l <= BLACK_MAX_LIGHTNESS || self.hsl.l >= WHITE_MIN_LIGHTNESS
    }
}
