//! Background color selection.
//!
//! The dominant swatch wins unless it is near-black or near-white. In that
//! case the most populous colored swatch takes over, unless the dominant
//! swatch outnumbers it by more than [`WHITE_OR_BLACK_DOMINANCE`].

use tracing::debug;

use crate::color::Rgb;
use crate::swatch::{Swatch, SwatchFilter, SwatchPalette};

/// Population ratio above which a near-black/near-white dominant swatch is
/// kept as the background over a colored runner-up.
pub const WHITE_OR_BLACK_DOMINANCE: f32 = 2.5;

/// The chosen background and the hue the foreground pass must avoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundChoice {
    pub color: Rgb,
    /// Set when the background is a colored swatch.
    pub excluded_hue: Option<f32>,
}

impl BackgroundChoice {
    fn colored(swatch: Swatch) -> Self {
        Self {
            color: swatch.rgb(),
            excluded_hue: Some(swatch.hsl().h),
        }
    }

    fn plain(color: Rgb) -> Self {
        Self {
            color,
            excluded_hue: None,
        }
    }

    /// Filter criteria for the foreground pass.
    pub fn foreground_filters(&self) -> Vec<SwatchFilter> {
        let mut filters = vec![SwatchFilter::BlackOrWhite];
        if let Some(hue) = self.excluded_hue {
            filters.push(SwatchFilter::exclude_hue(hue));
        }
        filters
    }
}

/// Pick the background from an unfiltered palette.
pub fn select_background(palette: &SwatchPalette) -> BackgroundChoice {
    let Some(dominant) = palette.dominant() else {
        debug!("no dominant swatch, falling back to white");
        return BackgroundChoice::plain(Rgb::WHITE);
    };

    if !dominant.is_white_or_black() {
        debug!(color = %dominant.rgb(), hue = dominant.hsl().h, "dominant swatch is the background");
        return BackgroundChoice::colored(dominant);
    }

    let second = palette
        .swatches()
        .iter()
        .filter(|swatch| **swatch != dominant && !swatch.is_white_or_black())
        .fold(None, |best: Option<&Swatch>, swatch| match best {
            Some(b) if b.population() >= swatch.population() => Some(b),
            _ => Some(swatch),
        });

    let Some(second) = second else {
        debug!(color = %dominant.rgb(), "only black or white available");
        return BackgroundChoice::plain(dominant.rgb());
    };

    let ratio = dominant.population() as f32 / second.population() as f32;
    if ratio > WHITE_OR_BLACK_DOMINANCE {
        debug!(color = %dominant.rgb(), ratio, "black or white dominates");
        BackgroundChoice::plain(dominant.rgb())
    } else {
        debug!(color = %second.rgb(), ratio, "colored runner-up replaces black or white");
        BackgroundChoice::colored(*second)
    }
}
