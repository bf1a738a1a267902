//! Swatch filters applied by a provider before role designation.
//!
//! Filters are plain values rather than closures so a request can be
//! inspected, logged, compared in tests, and serialized.

use super::swatch::Swatch;

/// Minimum hue distance, in degrees, between the background and any
/// foreground candidate.
pub const HUE_EXCLUSION_DEGREES: f32 = 10.0;

/// A criterion that rejects swatches from a generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum SwatchFilter {
    /// Reject near-black and near-white swatches.
    BlackOrWhite,
    /// Reject swatches whose hue lies within `tolerance` degrees of `hue`,
    /// in either direction around the hue circle.
    HueNeighborhood { hue: f32, tolerance: f32 },
}

impl SwatchFilter {
    /// Exclude the standard neighborhood around `hue`.
    pub fn exclude_hue(hue: f32) -> Self {
        SwatchFilter::HueNeighborhood {
            hue,
            tolerance: HUE_EXCLUSION_DEGREES,
        }
    }

    /// Whether `swatch` survives this filter.
    pub fn allows(&self, swatch: &Swatch) -> bool {
        match *self {
            SwatchFilter::BlackOrWhite => !swatch.is_white_or_black(),
            SwatchFilter::HueNeighborhood { hue, tolerance } => {
                let diff = (swatch.hsl().h - hue).abs();
                diff > tolerance && diff < 360.0 - tolerance
            }
        }
    }
}

/// Whether `swatch` survives every filter in `filters`.
pub fn allowed_by_all(filters: &[SwatchFilter], swatch: &Swatch) -> bool {
    filters.iter().all(|filter| filter.allows(swatch))
}
