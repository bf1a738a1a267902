//! Gamma lookup table access functions
//!
//! Decoding uses a table generated at compile time by build.rs, so every
//! luminance computed from 8-bit channels is bit-reproducible. Encoding
//! works on continuous values (LAB and HSL round trips) and uses the exact
//! IEC 61966-2-1 formula.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel to linear light (0.0..=1.0).
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    SRGB_TO_LINEAR[channel as usize]
}

/// Convert a linear light value to gamma-encoded sRGB (0.0..=1.0 for
/// in-gamut input; out-of-gamut values are passed through unclamped).
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear > 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

/// Scale a 0.0..=1.0 channel to a byte, rounding and clamping.
#[inline]
pub(crate) fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
