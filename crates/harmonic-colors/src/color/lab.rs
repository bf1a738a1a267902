//! CIE L*a*b* color space (D65 white point)
//!
//! Used for the lightness shift between the two text colors and for the
//! toward-dark contrast search. Conversions go through CIE XYZ scaled to
//! 0..100, using the standard sRGB matrices.

use super::lut::{linear_to_srgb, srgb_to_linear, to_channel};
use super::rgb::Rgb;

/// D65 reference white, X component (Y is 100.0).
const WHITE_X: f64 = 95.047;
/// D65 reference white, Z component.
const WHITE_Z: f64 = 108.883;
const EPSILON: f64 = 0.008856;
const KAPPA: f64 = 903.3;

/// A color in CIE LAB space.
///
/// `l` runs from 0.0 (black) to 100.0 (white). `a` and `b` are unbounded
/// but stay within roughly ±128 for colors inside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, `0.0..=100.0`
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new LAB color. Components are not validated.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

fn pivot_xyz(component: f64) -> f64 {
    if component > EPSILON {
        component.cbrt()
    } else {
        (KAPPA * component + 16.0) / 116.0
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r);
        let g = srgb_to_linear(rgb.g);
        let b = srgb_to_linear(rgb.b);

        let x = 100.0 * (r * 0.4124 + g * 0.3576 + b * 0.1805);
        let y = 100.0 * (r * 0.2126 + g * 0.7152 + b * 0.0722);
        let z = 100.0 * (r * 0.0193 + g * 0.1192 + b * 0.9505);

        let fx = pivot_xyz(x / WHITE_X);
        let fy = pivot_xyz(y / 100.0);
        let fz = pivot_xyz(z / WHITE_Z);

        Self {
            l: (116.0 * fy - 16.0).max(0.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Rgb {
    /// Convert back to sRGB, clamping each channel to `0..=255`.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;

        let cube = fx.powi(3);
        let xr = if cube > EPSILON {
            cube
        } else {
            (116.0 * fx - 16.0) / KAPPA
        };
        let yr = if lab.l > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            lab.l / KAPPA
        };
        let cube = fz.powi(3);
        let zr = if cube > EPSILON {
            cube
        } else {
            (116.0 * fz - 16.0) / KAPPA
        };

        let x = xr * WHITE_X / 100.0;
        let y = yr;
        let z = zr * WHITE_Z / 100.0;

        let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
        let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
        let b = x * 0.0557 + y * -0.2040 + z * 1.0570;

        Rgb::new(
            to_channel(linear_to_srgb(r)),
            to_channel(linear_to_srgb(g)),
            to_channel(linear_to_srgb(b)),
        )
    }
}
