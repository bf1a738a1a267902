//! harmonic-colors: accessible text colors that match a photo
//!
//! Given the dominant colors ("swatches") of an image, this library picks a
//! background color for an overlay and two text colors that belong to the
//! image's palette while meeting the WCAG AA contrast ratio of 4.5:1
//! wherever the color space allows it.
//!
//! # Quick Start
//!
//! Pixel clustering is not part of this crate. Implement
//! [`SwatchProvider`] over your image type (or use any quantizer that
//! yields colors with populations and hand them to
//! [`SwatchPalette::filtered`]), then run a [`HarmonicExtractor`]:
//!
//! ```
//! use harmonic_colors::{
//!     ExtractionConfig, HarmonicExtractor, ImageSize, Rgb, Side, Swatch, SwatchPalette,
//!     SwatchProvider, SwatchRequest,
//! };
//!
//! struct Photo;
//!
//! impl SwatchProvider for Photo {
//!     fn image_size(&self) -> ImageSize {
//!         ImageSize::new(1200, 800)
//!     }
//!
//!     fn generate(&self, request: &SwatchRequest) -> SwatchPalette {
//!         let swatches = vec![
//!             Swatch::new(Rgb::new(22, 48, 80), 12_000),
//!             Swatch::new(Rgb::new(210, 160, 70), 4_000),
//!             Swatch::new(Rgb::new(245, 245, 240), 2_000),
//!         ];
//!         SwatchPalette::filtered(swatches, &request.filters)
//!     }
//! }
//!
//! let config = ExtractionConfig::builder().split(Side::Left).build().unwrap();
//! let colors = HarmonicExtractor::new(config).extract(&Photo);
//! assert_eq!(colors.background_color, Rgb::new(22, 48, 80));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SwatchProvider (background region, no filters)
//!     |
//!     v
//! select_background        dominant swatch unless near black/white
//!     |                    -> background color + hue to exclude
//!     v
//! SwatchProvider (foreground region,
//!                 filters: BlackOrWhite, HueNeighborhood)
//!     |
//!     v
//! ForegroundSelector       vibrant / muted / dominant heuristics
//!     |                    -> base text color
//!     v
//! resolve_text_colors      keep, or bisect lightness until 4.5:1
//!     |                    -> primary + secondary text colors
//!     v
//! HarmonicColors
//! ```
//!
//! # Two Searches, Two Color Spaces
//!
//! Text that has to get darker is searched on CIE LAB lightness with the
//! `a`/`b` axes held fixed, which keeps the hue and chroma of the base color
//! while darkening perceptually evenly. Text that has to get lighter is
//! searched on HSL lightness, which heads for white without the chroma
//! blow-out that raising LAB lightness on a saturated color produces. Both
//! searches run at most fifteen bisection steps and keep the bound closest
//! to the original color that still passes, so colors are changed no more
//! than needed.
//!
//! The primary and secondary colors are one fixed LAB lightness step apart
//! (20 on light backgrounds, 10 on dark ones), so they always share a hue
//! family.

pub mod api;
pub mod color;
pub mod region;
pub mod select;
pub mod swatch;

#[cfg(test)]
mod domain_tests;

pub use api::{
    ConfigError, ExtractionConfig, ExtractionConfigBuilder, HarmonicColors, HarmonicExtractor,
};
pub use color::{contrast_ratio, relative_luminance, Hsl, Lab, ParseColorError, Rgb};
pub use region::{ImageSize, Rect, Side};
pub use swatch::{
    NamedSwatches, Swatch, SwatchFilter, SwatchPalette, SwatchProvider, SwatchRequest, SwatchRole,
};
