//! Text-color synthesis with a guaranteed contrast floor.
//!
//! The primary and secondary text colors stay in the base color's hue
//! family and differ only in lightness. When the base color lacks contrast
//! it is pulled toward black (binary search on LAB lightness) or toward
//! white (binary search on HSL lightness), stopping at the first lightness
//! that clears [`MIN_TEXT_CONTRAST`].

use tracing::debug;

use crate::color::{
    contrast_ratio, meets_text_contrast, relative_luminance, Hsl, Lab, Rgb, MIN_TEXT_CONTRAST,
};

/// LAB lightness added to the primary color to get the secondary one on a
/// light background.
pub const LIGHTNESS_TEXT_DIFFERENCE_LIGHT: f64 = 20.0;
/// LAB lightness added to the primary color to get the secondary one on a
/// dark background.
pub const LIGHTNESS_TEXT_DIFFERENCE_DARK: f64 = -10.0;

/// Maximum bisection steps for either search.
pub const SEARCH_ITERATIONS: usize = 15;
/// Bound gap at which either search stops early.
pub const SEARCH_TOLERANCE: f64 = 1e-5;

/// Primary (high-emphasis) and secondary (lower-emphasis) text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    pub primary: Rgb,
    pub secondary: Rgb,
}

/// Which extreme improves contrast against `background` for text that
/// starts out at `text`. `true` means darken.
pub fn background_is_light(background: Rgb, text: Rgb) -> bool {
    let back_lum = relative_luminance(background);
    let text_lum = relative_luminance(text);
    (back_lum > text_lum && meets_text_contrast(Rgb::BLACK, background))
        || (back_lum <= text_lum && !meets_text_contrast(Rgb::WHITE, background))
}

/// Derive primary and secondary text colors for `base` on `background`.
///
/// If `base` already has enough contrast and so does its lightness-shifted
/// sibling, `base` is returned unchanged as the primary color.
pub fn resolve_text_colors(background: Rgb, base: Rgb) -> TextColors {
    let light = background_is_light(background, base);
    let (difference, search): (f64, fn(Rgb, Rgb) -> Rgb) = if light {
        (LIGHTNESS_TEXT_DIFFERENCE_LIGHT, search_toward_dark)
    } else {
        (LIGHTNESS_TEXT_DIFFERENCE_DARK, search_toward_light)
    };

    let contrast = contrast_ratio(base, background);
    if contrast < MIN_TEXT_CONTRAST {
        let secondary = search(base, background);
        let primary = secondary.shift_lightness(-difference);
        debug!(contrast, light, %secondary, %primary, "base color searched for contrast");
        return TextColors { primary, secondary };
    }

    let secondary = base.shift_lightness(difference);
    if meets_text_contrast(secondary, background) {
        debug!(contrast, light, %secondary, "base color kept");
        return TextColors {
            primary: base,
            secondary,
        };
    }

    let secondary = search(secondary, background);
    let primary = secondary.shift_lightness(-difference);
    debug!(contrast, light, %secondary, %primary, "shifted secondary searched for contrast");
    TextColors { primary, secondary }
}

/// Darken `color` in LAB until it clears the contrast floor against
/// `other`, keeping the lightest passing L.
///
/// Returns `color` unchanged if it already passes. If even L = 0 fails the
/// result is the L = 0 color, the best reachable along this path.
pub fn search_toward_dark(color: Rgb, other: Rgb) -> Rgb {
    if meets_text_contrast(color, other) {
        return color;
    }

    let lab = Lab::from(color);
    let at = |l: f64| Rgb::from(Lab::new(l, lab.a, lab.b));

    let mut low = 0.0;
    let mut high = lab.l;
    for _ in 0..SEARCH_ITERATIONS {
        if high - low <= SEARCH_TOLERANCE {
            break;
        }
        let mid = (low + high) / 2.0;
        if contrast_ratio(at(mid), other) > MIN_TEXT_CONTRAST {
            low = mid;
        } else {
            high = mid;
        }
    }
    at(low)
}

/// Lighten `color` in HSL until it clears the contrast floor against
/// `other`, keeping the darkest passing lightness.
///
/// Returns `color` unchanged if it already passes. If no lightness passes
/// the result is the lightness-1.0 color (white).
pub fn search_toward_light(color: Rgb, other: Rgb) -> Rgb {
    if meets_text_contrast(color, other) {
        return color;
    }

    let hsl = Hsl::from(color);
    let at = |l: f32| Rgb::from(hsl.with_lightness(l));

    let mut low = hsl.l;
    let mut high = 1.0f32;
    for _ in 0..SEARCH_ITERATIONS {
        if ((high - low) as f64) <= SEARCH_TOLERANCE {
            break;
        }
        let mid = (low + high) / 2.0;
        if contrast_ratio(at(mid), other) > MIN_TEXT_CONTRAST {
            high = mid;
        } else {
            low = mid;
        }
    }
    at(high)
}
