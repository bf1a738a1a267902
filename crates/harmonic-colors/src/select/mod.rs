//! The three selection stages: background, foreground base, text colors.

mod background;
mod contrast;
mod foreground;

pub use background::{select_background, BackgroundChoice, WHITE_OR_BLACK_DOMINANCE};
pub use contrast::{
    background_is_light, resolve_text_colors, search_toward_dark, search_toward_light,
    TextColors, LIGHTNESS_TEXT_DIFFERENCE_DARK, LIGHTNESS_TEXT_DIFFERENCE_LIGHT,
    SEARCH_ITERATIONS, SEARCH_TOLERANCE,
};
pub use foreground::{
    ForegroundSelector, DOMINANT_POPULATION_FRACTION, LIGHT_BACKGROUND_LUMINANCE,
    MINIMUM_IMAGE_FRACTION, MIN_SATURATION_WHEN_DECIDING, MORE_VIBRANT_POPULATION_FRACTION,
};
