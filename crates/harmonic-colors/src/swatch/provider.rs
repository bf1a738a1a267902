//! The swatch-generation seam.
//!
//! Pixel clustering lives outside this crate. A [`SwatchProvider`] is bound
//! to one image and answers [`SwatchRequest`]s with a [`SwatchPalette`].

use crate::region::{ImageSize, Rect};

use super::filter::{allowed_by_all, SwatchFilter};
use super::named::NamedSwatches;
use super::swatch::Swatch;
use super::target;

/// Parameters for one generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwatchRequest {
    /// Pixel bounds to sample, or the whole image when `None`.
    pub region: Option<Rect>,
    /// Downsample until the sampled area is at most this many pixels.
    pub resize_area: Option<u32>,
    /// Applied before any role is designated.
    pub filters: Vec<SwatchFilter>,
}

impl SwatchRequest {
    pub fn new(region: Option<Rect>, resize_area: Option<u32>) -> Self {
        Self {
            region,
            resize_area,
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: SwatchFilter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// The result of one generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwatchPalette {
    swatches: Vec<Swatch>,
    named: NamedSwatches,
}

impl SwatchPalette {
    /// Pair a swatch list with a role assignment made elsewhere.
    pub fn new(swatches: Vec<Swatch>, named: NamedSwatches) -> Self {
        Self { swatches, named }
    }

    /// Designate roles over `swatches` by target scoring.
    ///
    /// The list must already be filtered; see [`SwatchPalette::filtered`].
    pub fn from_swatches(swatches: Vec<Swatch>) -> Self {
        let named = target::designate(&swatches);
        Self { swatches, named }
    }

    /// Drop swatches rejected by `filters`, then designate roles, so a
    /// rejected swatch can never become dominant.
    pub fn filtered(swatches: Vec<Swatch>, filters: &[SwatchFilter]) -> Self {
        let kept = swatches
            .into_iter()
            .filter(|swatch| allowed_by_all(filters, swatch))
            .collect();
        Self::from_swatches(kept)
    }

    #[inline]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    #[inline]
    pub fn named(&self) -> &NamedSwatches {
        &self.named
    }

    #[inline]
    pub fn dominant(&self) -> Option<Swatch> {
        self.named.dominant
    }
}

/// Produces swatches for regions of one image.
///
/// Implementations must be deterministic for identical requests and must
/// apply [`SwatchRequest::filters`] before designating roles. An image with
/// no sampled pixels yields an empty palette rather than an error.
pub trait SwatchProvider {
    /// Full pixel dimensions of the underlying image.
    fn image_size(&self) -> ImageSize;

    /// Run one generation pass.
    fn generate(&self, request: &SwatchRequest) -> SwatchPalette;
}

impl<P: SwatchProvider + ?Sized> SwatchProvider for &P {
    fn image_size(&self) -> ImageSize {
        (**self).image_size()
    }

    fn generate(&self, request: &SwatchRequest) -> SwatchPalette {
        (**self).generate(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_filtered_removes_before_designation() {
        let white = Swatch::new(Rgb::WHITE, 1000);
        let blue = Swatch::new(Rgb::new(30, 80, 200), 100);

        let unfiltered = SwatchPalette::from_swatches(vec![white, blue]);
        assert_eq!(unfiltered.dominant(), Some(white));

        let palette = SwatchPalette::filtered(vec![white, blue], &[SwatchFilter::BlackOrWhite]);
        assert_eq!(palette.swatches(), &[blue]);
        assert_eq!(palette.dominant(), Some(blue));
    }

    #[test]
    fn test_request_builder() {
        let request = SwatchRequest::new(Some(Rect::new(0, 0, 10, 10)), Some(100))
            .with_filter(SwatchFilter::BlackOrWhite)
            .with_filter(SwatchFilter::exclude_hue(42.0));
        assert_eq!(request.filters.len(), 2);
        assert_eq!(request.resize_area, Some(100));
    }

    #[test]
    fn test_empty_palette_has_no_dominant() {
        let palette = SwatchPalette::filtered(Vec::new(), &[SwatchFilter::BlackOrWhite]);
        assert!(palette.swatches().is_empty());
        assert!(palette.named().is_empty());
    }
}
