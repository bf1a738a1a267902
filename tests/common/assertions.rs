//! Assertion helpers for tests.

use harmonic_colors::{contrast_ratio, HarmonicColors, Lab};

/// Assert the secondary text color is legible on the background
pub fn assert_legible(colors: &HarmonicColors) {
    let ratio = contrast_ratio(colors.second_foreground_color, colors.background_color);
    assert!(
        ratio >= 4.5,
        "Expected secondary {} on {} to reach 4.5:1, got {:.3}",
        colors.second_foreground_color,
        colors.background_color,
        ratio
    );
}

/// Assert the primary text sits further from the background than the
/// secondary, in LAB lightness
pub fn assert_primary_emphasized(colors: &HarmonicColors) {
    let background = Lab::from(colors.background_color).l;
    let primary = Lab::from(colors.first_foreground_color).l;
    let secondary = Lab::from(colors.second_foreground_color).l;
    assert!(
        (primary - background).abs() + 0.5 >= (secondary - background).abs(),
        "Expected primary {} (L={primary:.1}) to stand out more than secondary {} (L={secondary:.1}) on L={background:.1}",
        colors.first_foreground_color,
        colors.second_foreground_color,
    );
}
