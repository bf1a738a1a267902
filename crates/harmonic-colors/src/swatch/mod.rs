//! Swatches, their roles, and the provider seam.

mod filter;
mod named;
mod provider;
mod swatch;
mod target;

pub use filter::{allowed_by_all, SwatchFilter, HUE_EXCLUSION_DEGREES};
pub use named::{NamedSwatches, SwatchRole};
pub use provider::{SwatchPalette, SwatchProvider, SwatchRequest};
pub use swatch::{Swatch, BLACK_MAX_LIGHTNESS, WHITE_MIN_LIGHTNESS};
