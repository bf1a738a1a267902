//! WCAG relative luminance and contrast ratio.

use super::lut::srgb_to_linear;
use super::rgb::Rgb;

/// Minimum contrast ratio for normal-size text (WCAG 2.x level AA).
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

/// Relative luminance of an opaque color, `0.0..=1.0`.
///
/// `L = 0.2126 R + 0.7152 G + 0.0722 B` over gamma-decoded channels.
#[inline]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG contrast ratio between two colors, `1.0..=21.0`.
///
/// Symmetric: the lighter color always ends up in the numerator.
///
/// # Example
/// ```
/// use harmonic_colors::{contrast_ratio, Rgb};
/// let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a) + 0.05;
    let lb = relative_luminance(b) + 0.05;
    if la > lb {
        la / lb
    } else {
        lb / la
    }
}

/// Whether `foreground` is legible on `background` as normal text.
#[inline]
pub fn meets_text_contrast(foreground: Rgb, background: Rgb) -> bool {
    contrast_ratio(foreground, background) >= MIN_TEXT_CONTRAST
}
