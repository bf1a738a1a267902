//! HSL cylindrical color representation
//!
//! Swatch classification (near-black/near-white, saturation weighting, the
//! hue-neighborhood filter) and the toward-light contrast search all work
//! on HSL. Components are `f32`, matching the precision swatches carry.

use super::lut::to_channel;
use super::rgb::Rgb;

/// A color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, `0.0..360.0`
    pub h: f32,
    /// Saturation, `0.0..=1.0`
    pub s: f32,
    /// Lightness, `0.0..=1.0`
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color. Components are not validated.
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation with a different lightness.
    #[inline]
    pub fn with_lightness(self, l: f32) -> Self {
        Self { l, ..self }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let rf = rgb.r as f32 / 255.0;
        let gf = rgb.g as f32 / 255.0;
        let bf = rgb.b as f32 / 255.0;

        let max = rf.max(gf.max(bf));
        let min = rf.min(gf.min(bf));
        let delta = max - min;

        let l = (max + min) / 2.0;
        let (mut h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let h = if max == rf {
                ((gf - bf) / delta) % 6.0
            } else if max == gf {
                (bf - rf) / delta + 2.0
            } else {
                (rf - gf) / delta + 4.0
            };
            (h, delta / (1.0 - (2.0 * l - 1.0).abs()))
        };

        h = (h * 60.0) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }

        Self {
            h: h.clamp(0.0, 360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let m = l - 0.5 * c;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

        let (r, g, b) = match (h / 60.0) as i32 {
            0 => (c + m, x + m, m),
            1 => (x + m, c + m, m),
            2 => (m, c + m, x + m),
            3 => (m, x + m, c + m),
            4 => (x + m, m, c + m),
            5 | 6 => (c + m, m, x + m),
            _ => (0.0, 0.0, 0.0),
        };

        Rgb::new(
            to_channel(r as f64),
            to_channel(g as f64),
            to_channel(b as f64),
        )
    }
}
