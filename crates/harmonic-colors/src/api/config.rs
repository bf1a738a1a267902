//! Immutable extraction configuration and its builder.

use crate::region::{ImageSize, Rect, Side, DEFAULT_TEXT_START_FRACTION};

use super::error::ConfigError;

/// Default downsample target: 150 x 150 pixels.
pub const DEFAULT_RESIZE_AREA: u32 = 150 * 150;

/// Where the two passes sample from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionLayout {
    /// Fixed pixel rectangles. `None` samples the whole image.
    Explicit {
        background: Option<Rect>,
        foreground: Option<Rect>,
    },
    /// A side preset, resolved against the image being extracted.
    Split { side: Side, fraction: f32 },
}

/// Validated settings for one or many extractions.
///
/// Built once with [`ExtractionConfig::builder`] and never mutated, so a
/// split preset always resolves against the image actually passed to
/// extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    layout: RegionLayout,
    resize_area: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            layout: RegionLayout::Explicit {
                background: None,
                foreground: None,
            },
            resize_area: DEFAULT_RESIZE_AREA,
        }
    }
}

impl ExtractionConfig {
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }

    #[inline]
    pub fn layout(&self) -> RegionLayout {
        self.layout
    }

    /// Downsample target, also the denominator of the population gate.
    #[inline]
    pub fn resize_area(&self) -> u32 {
        self.resize_area
    }

    /// `(background, foreground)` sampling regions for an image of `size`,
    /// clamped to its bounds.
    ///
    /// `None` means the whole image. A foreground region that is missing,
    /// or lies entirely outside the image, reuses the background region.
    pub fn regions(&self, size: ImageSize) -> (Option<Rect>, Option<Rect>) {
        let (background, foreground) = match self.layout {
            RegionLayout::Explicit {
                background,
                foreground,
            } => (background, foreground),
            RegionLayout::Split { side, fraction } => {
                let (background, foreground) = side.regions(size, fraction);
                (Some(background), Some(foreground))
            }
        };
        let background = background.and_then(|rect| rect.clamp_to(size));
        let foreground = foreground
            .and_then(|rect| rect.clamp_to(size))
            .or(background);
        (background, foreground)
    }
}

/// Fluent builder for [`ExtractionConfig`].
///
/// # Example
///
/// ```
/// use harmonic_colors::{ExtractionConfig, ImageSize, Rect, Side};
///
/// let config = ExtractionConfig::builder()
///     .split(Side::Bottom)
///     .resize_area(100 * 100)
///     .build()
///     .unwrap();
///
/// let (bg, fg) = config.regions(ImageSize::new(400, 300));
/// assert_eq!(bg, Some(Rect::new(0, 150, 400, 300)));
/// assert_eq!(fg, Some(Rect::new(0, 0, 400, 120)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractionConfigBuilder {
    background: Option<Rect>,
    foreground: Option<Rect>,
    split: Option<(Side, f32)>,
    resize_area: Option<u32>,
}

impl ExtractionConfigBuilder {
    /// Sample the background from `rect`.
    pub fn background_region(mut self, rect: Rect) -> Self {
        self.background = Some(rect);
        self
    }

    /// Sample text colors from `rect`.
    pub fn foreground_region(mut self, rect: Rect) -> Self {
        self.foreground = Some(rect);
        self
    }

    /// Split preset with the default text start fraction (0.4).
    pub fn split(self, side: Side) -> Self {
        self.split_at(side, DEFAULT_TEXT_START_FRACTION)
    }

    /// Split preset; `fraction` is where the text area starts along the
    /// split axis.
    pub fn split_at(mut self, side: Side, fraction: f32) -> Self {
        self.split = Some((side, fraction));
        self
    }

    /// Downsample target in pixels.
    pub fn resize_area(mut self, area: u32) -> Self {
        self.resize_area = Some(area);
        self
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        let resize_area = self.resize_area.unwrap_or(DEFAULT_RESIZE_AREA);
        if resize_area == 0 {
            return Err(ConfigError::ZeroResizeArea);
        }

        let layout = match self.split {
            Some(_) if self.background.is_some() || self.foreground.is_some() => {
                return Err(ConfigError::ConflictingRegions);
            }
            Some((side, fraction)) => {
                if !(fraction > 0.0 && fraction < 1.0) {
                    return Err(ConfigError::InvalidFraction(fraction));
                }
                RegionLayout::Split { side, fraction }
            }
            None => {
                for (which, rect) in [("background", self.background), ("foreground", self.foreground)] {
                    if let Some(rect) = rect.filter(Rect::is_empty) {
                        return Err(ConfigError::EmptyRegion { which, rect });
                    }
                }
                RegionLayout::Explicit {
                    background: self.background,
                    foreground: self.foreground,
                }
            }
        };

        Ok(ExtractionConfig {
            layout,
            resize_area,
        })
    }
}
