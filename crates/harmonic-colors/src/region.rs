//! Pixel rectangles and the four split presets.

use std::fmt;
use std::str::FromStr;

/// Default position, as a fraction of the split axis, where the text area
/// starts.
pub const DEFAULT_TEXT_START_FRACTION: f32 = 0.4;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// The rectangle covering the whole image.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Pixel bounds; `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Overlap of two rectangles; may be empty.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// Restrict to the image bounds. Returns `None` when nothing is left.
    pub fn clamp_to(&self, size: ImageSize) -> Option<Rect> {
        let clamped = self.intersect(&size.bounds());
        (!clamped.is_empty()).then_some(clamped)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Which side of the image the background sits on.
///
/// The background region is that half of the image; the text region runs
/// from the text-start fraction towards the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// `(background, foreground)` regions for an image of `size`.
    ///
    /// ```
    /// use harmonic_colors::{ImageSize, Rect, Side};
    ///
    /// let (bg, fg) = Side::Left.regions(ImageSize::new(200, 100), 0.4);
    /// assert_eq!(bg, Rect::new(0, 0, 100, 100));
    /// assert_eq!(fg, Rect::new(80, 0, 200, 100));
    /// ```
    pub fn regions(self, size: ImageSize, fraction: f32) -> (Rect, Rect) {
        let ImageSize { width: w, height: h } = size;
        let along_width = (w as f32 * fraction) as u32;
        let along_height = (h as f32 * fraction) as u32;

        match self {
            Side::Left => (Rect::new(0, 0, w / 2, h), Rect::new(along_width, 0, w, h)),
            Side::Top => (Rect::new(0, 0, w, h / 2), Rect::new(0, along_height, w, h)),
            Side::Right => (Rect::new(w / 2, 0, w, h), Rect::new(0, 0, along_width, h)),
            Side::Bottom => (Rect::new(0, h / 2, w, h), Rect::new(0, 0, w, along_height)),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "top" => Ok(Side::Top),
            "right" => Ok(Side::Right),
            "bottom" => Ok(Side::Bottom),
            other => Err(format!("unknown side '{other}' (expected left, top, right or bottom)")),
        }
    }
}
