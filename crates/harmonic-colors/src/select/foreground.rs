//! Foreground base-color selection.
//!
//! Works on a palette generated from the text region with black, white and
//! the background's hue already filtered out. The background's luminance
//! decides whether dark or light variants are preferred.

use tracing::debug;

use crate::color::{relative_luminance, Rgb};
use crate::swatch::{Swatch, SwatchPalette};

/// Luminance above which the background counts as light.
pub const LIGHT_BACKGROUND_LUMINANCE: f64 = 0.5;
/// Below this `more-vibrant / vibrant` population ratio, plain vibrant wins.
pub const MORE_VIBRANT_POPULATION_FRACTION: f32 = 1.0;
/// Fraction of the sampled area a swatch must exceed to be considered.
pub const MINIMUM_IMAGE_FRACTION: f64 = 0.002;
/// Below this `candidate / dominant` population ratio the dominant swatch
/// may override a colored candidate.
pub const DOMINANT_POPULATION_FRACTION: f32 = 0.01;
/// Saturation the dominant swatch needs to override a marginal candidate.
pub const MIN_SATURATION_WHEN_DECIDING: f32 = 0.19;

/// The swatches considered for one background polarity.
#[derive(Debug, Clone, Copy)]
struct Candidates {
    more_vibrant: Option<Swatch>,
    vibrant: Option<Swatch>,
    more_muted: Option<Swatch>,
    muted: Option<Swatch>,
    dominant: Option<Swatch>,
    fallback: Rgb,
}

/// Chooses a base text color from a foreground-region palette.
#[derive(Debug, Clone, Copy)]
pub struct ForegroundSelector {
    sampled_area: u32,
}

impl ForegroundSelector {
    /// `sampled_area` is the downsample target and the denominator of the
    /// population gate.
    pub fn new(sampled_area: u32) -> Self {
        Self { sampled_area }
    }

    /// Whether a swatch is statistically significant in the sampled image.
    pub fn has_enough_population(&self, swatch: Option<Swatch>) -> bool {
        swatch.is_some_and(|s| {
            self.sampled_area > 0
                && s.population() as f64 / self.sampled_area as f64 > MINIMUM_IMAGE_FRACTION
        })
    }

    /// Pick the base text color. Always returns a color.
    pub fn select(&self, background: Rgb, palette: &SwatchPalette) -> Rgb {
        let named = palette.named();
        let candidates = if relative_luminance(background) > LIGHT_BACKGROUND_LUMINANCE {
            Candidates {
                more_vibrant: named.dark_vibrant,
                vibrant: named.vibrant,
                more_muted: named.dark_muted,
                muted: named.muted,
                dominant: named.dominant,
                fallback: Rgb::BLACK,
            }
        } else {
            Candidates {
                more_vibrant: named.light_vibrant,
                vibrant: named.vibrant,
                more_muted: named.light_muted,
                muted: named.muted,
                dominant: named.dominant,
                fallback: Rgb::WHITE,
            }
        };
        self.select_from(candidates)
    }

    fn select_from(&self, c: Candidates) -> Rgb {
        let colored = self
            .vibrant_candidate(c.more_vibrant, c.vibrant)
            .or_else(|| self.muted_candidate(c.more_muted, c.muted));

        match (colored, c.dominant) {
            (Some(candidate), Some(dominant)) if candidate == dominant => {
                debug!(color = %candidate.rgb(), "candidate is the dominant swatch");
                candidate.rgb()
            }
            (Some(candidate), Some(dominant))
                if (candidate.population() as f32 / dominant.population() as f32)
                    < DOMINANT_POPULATION_FRACTION
                    && dominant.hsl().s > MIN_SATURATION_WHEN_DECIDING =>
            {
                debug!(
                    candidate = %candidate.rgb(),
                    dominant = %dominant.rgb(),
                    "marginal candidate overridden by saturated dominant swatch"
                );
                dominant.rgb()
            }
            (Some(candidate), _) => {
                debug!(color = %candidate.rgb(), "colored candidate");
                candidate.rgb()
            }
            (None, dominant) if self.has_enough_population(dominant) => {
                let rgb = dominant.map_or(c.fallback, |d| d.rgb());
                debug!(color = %rgb, "no colored candidate, using dominant swatch");
                rgb
            }
            (None, _) => {
                debug!(color = %c.fallback, "no usable swatch, using fallback");
                c.fallback
            }
        }
    }

    fn vibrant_candidate(&self, more: Option<Swatch>, plain: Option<Swatch>) -> Option<Swatch> {
        match (self.valid(more), self.valid(plain)) {
            (Some(more), Some(plain)) => {
                let fraction = more.population() as f32 / plain.population() as f32;
                if fraction < MORE_VIBRANT_POPULATION_FRACTION {
                    Some(plain)
                } else {
                    Some(more)
                }
            }
            (more, plain) => more.or(plain),
        }
    }

    fn muted_candidate(&self, more: Option<Swatch>, plain: Option<Swatch>) -> Option<Swatch> {
        match (self.valid(more), self.valid(plain)) {
            (Some(more), Some(plain)) => {
                let fraction = more.population() as f32 / plain.population() as f32;
                if more.hsl().s * fraction > plain.hsl().s {
                    Some(more)
                } else {
                    Some(plain)
                }
            }
            (more, plain) => more.or(plain),
        }
    }

    fn valid(&self, swatch: Option<Swatch>) -> Option<Swatch> {
        swatch.filter(|&s| self.has_enough_population(Some(s)))
    }
}
