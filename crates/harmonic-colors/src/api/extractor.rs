//! HarmonicExtractor -- the entry point that drives both swatch passes.

use tracing::debug;

use crate::color::Rgb;
use crate::region::ImageSize;
use crate::select::{
    resolve_text_colors, select_background, BackgroundChoice, ForegroundSelector, TextColors,
};
use crate::swatch::{SwatchProvider, SwatchRequest};

use super::config::ExtractionConfig;

/// A background color with two legible, harmonic text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarmonicColors {
    pub background_color: Rgb,
    /// Primary, high-emphasis text.
    pub first_foreground_color: Rgb,
    /// Secondary, lower-emphasis text.
    pub second_foreground_color: Rgb,
}

/// Derives [`HarmonicColors`] from an image through a [`SwatchProvider`].
///
/// Holds only immutable configuration; `extract()` takes `&self` and keeps
/// all intermediate state local, so one extractor can serve many images
/// concurrently.
///
/// # Example
///
/// ```
/// use harmonic_colors::{
///     contrast_ratio, HarmonicExtractor, ImageSize, Rgb, Swatch, SwatchPalette,
///     SwatchProvider, SwatchRequest,
/// };
///
/// struct Fixed(Vec<Swatch>);
///
/// impl SwatchProvider for Fixed {
///     fn image_size(&self) -> ImageSize {
///         ImageSize::new(150, 150)
///     }
///
///     fn generate(&self, request: &SwatchRequest) -> SwatchPalette {
///         SwatchPalette::filtered(self.0.clone(), &request.filters)
///     }
/// }
///
/// let image = Fixed(vec![
///     Swatch::new(Rgb::new(30, 60, 120), 15_000),
///     Swatch::new(Rgb::new(240, 200, 90), 3_000),
/// ]);
/// let colors = HarmonicExtractor::default().extract(&image);
///
/// assert_eq!(colors.background_color, Rgb::new(30, 60, 120));
/// assert!(contrast_ratio(colors.second_foreground_color, colors.background_color) >= 4.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HarmonicExtractor {
    config: ExtractionConfig,
}

impl HarmonicExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// The unfiltered background pass.
    pub fn background_request(&self, size: ImageSize) -> SwatchRequest {
        let (background, _) = self.config.regions(size);
        SwatchRequest::new(background, Some(self.config.resize_area()))
    }

    /// The foreground pass, excluding black, white and the background hue.
    pub fn foreground_request(&self, size: ImageSize, background: &BackgroundChoice) -> SwatchRequest {
        let (_, foreground) = self.config.regions(size);
        SwatchRequest {
            region: foreground,
            resize_area: Some(self.config.resize_area()),
            filters: background.foreground_filters(),
        }
    }

    /// Run the full pipeline against one image.
    pub fn extract<P: SwatchProvider + ?Sized>(&self, provider: &P) -> HarmonicColors {
        let size = provider.image_size();

        let background_palette = provider.generate(&self.background_request(size));
        let background = select_background(&background_palette);

        let foreground_request = self.foreground_request(size, &background);
        debug!(
            background = %background.color,
            excluded_hue = ?background.excluded_hue,
            region = ?foreground_request.region,
            "starting foreground pass"
        );
        let foreground_palette = provider.generate(&foreground_request);

        let base = ForegroundSelector::new(self.config.resize_area())
            .select(background.color, &foreground_palette);
        let TextColors { primary, secondary } = resolve_text_colors(background.color, base);

        HarmonicColors {
            background_color: background.color,
            first_foreground_color: primary,
            second_foreground_color: secondary,
        }
    }
}
