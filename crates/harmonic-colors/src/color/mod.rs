//! Color types and conversion utilities
//!
//! Three representations are used by the selection pipeline:
//!
//! - [`Rgb`]: opaque 8-bit sRGB, the currency of inputs and results
//! - [`Hsl`]: swatch classification and the toward-light search
//! - [`Lab`]: lightness shifts and the toward-dark search
//!
//! All conversions are pure functions returning new values.
//!
//! # Example
//!
//! ```
//! use harmonic_colors::{contrast_ratio, Hsl, Lab, Rgb};
//!
//! let teal = Rgb::new(0, 128, 128);
//! let hsl = Hsl::from(teal);
//! assert!((hsl.h - 180.0).abs() < 0.5);
//!
//! let lab = Lab::from(teal);
//! assert!(lab.l > 40.0 && lab.l < 60.0);
//!
//! assert!(contrast_ratio(teal, Rgb::WHITE) > 4.5);
//! ```

mod contrast;
mod error;
mod hsl;
mod lab;
mod lut;
mod rgb;

pub use contrast::{contrast_ratio, meets_text_contrast, relative_luminance, MIN_TEXT_CONTRAST};
pub use error::ParseColorError;
pub use hsl::Hsl;
pub use lab::Lab;
pub use rgb::Rgb;
