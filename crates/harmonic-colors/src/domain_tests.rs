//! Domain-critical regression tests for harmonic-colors.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{ExtractionConfig, HarmonicExtractor};
    use crate::color::{contrast_ratio, meets_text_contrast, relative_luminance, Hsl, Rgb};
    use crate::region::{ImageSize, Rect};
    use crate::select::{
        background_is_light, resolve_text_colors, search_toward_dark, search_toward_light,
        select_background, ForegroundSelector, LIGHTNESS_TEXT_DIFFERENCE_DARK,
        LIGHTNESS_TEXT_DIFFERENCE_LIGHT,
    };
    use crate::swatch::{NamedSwatches, Swatch, SwatchPalette, SwatchProvider, SwatchRequest};
    use proptest::prelude::*;

    const AREA: u32 = 22_500;
    const BACKGROUND_REGION: Rect = Rect::new(0, 0, 150, 300);
    const FOREGROUND_REGION: Rect = Rect::new(150, 0, 300, 300);

    /// An image whose two halves have known swatches.
    struct TwoRegions {
        background: Vec<Swatch>,
        foreground: Vec<Swatch>,
    }

    impl SwatchProvider for TwoRegions {
        fn image_size(&self) -> ImageSize {
            ImageSize::new(300, 300)
        }

        fn generate(&self, request: &SwatchRequest) -> SwatchPalette {
            let swatches = if request.region == Some(BACKGROUND_REGION) {
                self.background.clone()
            } else {
                self.foreground.clone()
            };
            SwatchPalette::filtered(swatches, &request.filters)
        }
    }

    fn two_region_extractor() -> HarmonicExtractor {
        HarmonicExtractor::new(
            ExtractionConfig::builder()
                .background_region(BACKGROUND_REGION)
                .foreground_region(FOREGROUND_REGION)
                .build()
                .unwrap(),
        )
    }

    fn hsl_swatch(h: f32, s: f32, l: f32, population: u32) -> Swatch {
        Swatch::new(Rgb::from(Hsl::new(h, s, l)), population)
    }

    fn grey(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    // ========================================================================
    // GAP 1: Background selection keeps colored dominants and their hue
    // ========================================================================

    /// If this breaks, it means: a mid-lightness colored dominant swatch is
    /// being treated as black/white, or its hue is no longer excluded from
    /// the text pass (text would then be picked from the background color).
    #[test]
    fn test_colored_dominant_background_and_hue_exclusion() {
        let dominant = hsl_swatch(200.0, 0.6, 0.5, AREA / 20);
        let palette = SwatchPalette::from_swatches(vec![
            dominant,
            Swatch::new(Rgb::WHITE, AREA / 40),
            hsl_swatch(30.0, 0.7, 0.6, AREA / 50),
        ]);

        let choice = select_background(&palette);

        assert_eq!(choice.color, dominant.rgb());
        let hue = choice.excluded_hue.expect("colored background must exclude its hue");
        assert!((hue - 200.0).abs() < 0.5, "excluded hue {hue}");
    }

    /// If this breaks, it means: black or white is chosen as background
    /// while a comparably common colored swatch exists.
    #[test]
    fn test_background_avoids_black_white_unless_overwhelming() {
        let cases = [
            // (white population, colored population, expect white)
            (1000, 401, false),
            (1000, 400, false),
            (1000, 399, true),
            (1000, 1, true),
        ];
        for (white_pop, color_pop, expect_white) in cases {
            let white = Swatch::new(Rgb::new(252, 252, 250), white_pop);
            let color = hsl_swatch(120.0, 0.5, 0.4, color_pop);
            let choice = select_background(&SwatchPalette::from_swatches(vec![white, color]));
            assert_eq!(
                choice.color == white.rgb(),
                expect_white,
                "white {white_pop} vs color {color_pop}"
            );
            assert_eq!(choice.excluded_hue.is_none(), expect_white);
        }
    }

    // ========================================================================
    // GAP 2: Foreground fallbacks when every candidate is filtered out
    // ========================================================================

    /// If this breaks, it means: the hue filter leaks swatches from the
    /// background's hue neighborhood into the text pass, or an all-absent
    /// palette no longer falls back to the polarity color.
    #[test]
    fn test_hue_filter_empties_foreground_pass() {
        let background = hsl_swatch(200.0, 0.6, 0.5, 5_000);
        let image = TwoRegions {
            background: vec![background],
            foreground: vec![
                hsl_swatch(195.0, 0.7, 0.5, 3_000),
                hsl_swatch(200.0, 0.4, 0.6, 2_000),
                hsl_swatch(206.0, 0.8, 0.3, 1_000),
                Swatch::new(Rgb::new(3, 3, 3), 4_000),
            ],
        };
        let extractor = two_region_extractor();
        let size = image.image_size();

        let choice = select_background(&image.generate(&extractor.background_request(size)));
        let foreground = image.generate(&extractor.foreground_request(size, &choice));
        assert!(foreground.swatches().is_empty());
        assert!(foreground.named().is_empty());

        // Dark background (luminance < 0.5), so the fallback is white
        assert!(relative_luminance(background.rgb()) < 0.5);
        assert_eq!(
            ForegroundSelector::new(AREA).select(choice.color, &foreground),
            Rgb::WHITE
        );

        let colors = extractor.extract(&image);
        assert_eq!(colors.background_color, background.rgb());
        assert!(meets_text_contrast(colors.second_foreground_color, colors.background_color));
    }

    /// If this breaks, it means: the dominant override is firing for a
    /// candidate that holds at least 1% of the dominant population, or not
    /// firing for one below it.
    #[test]
    fn test_dominant_override_threshold_through_extraction() {
        let background = Swatch::new(Rgb::new(250, 248, 240), 20_000);
        // Muted but saturated enough to override
        let dominant = hsl_swatch(0.0, 0.25, 0.45, 10_000);
        for (vibrant_pop, expect_dominant) in [(99, true), (100, false)] {
            let dark_vibrant = hsl_swatch(280.0, 0.9, 0.25, vibrant_pop);
            let image = TwoRegions {
                background: vec![background],
                foreground: vec![dominant, dark_vibrant],
            };
            let size = image.image_size();
            let extractor = two_region_extractor();
            let choice = select_background(&image.generate(&extractor.background_request(size)));
            let palette = image.generate(&extractor.foreground_request(size, &choice));
            assert_eq!(palette.named().dark_vibrant, Some(dark_vibrant));

            let base = ForegroundSelector::new(AREA).select(choice.color, &palette);
            let expected = if expect_dominant { dominant.rgb() } else { dark_vibrant.rgb() };
            assert_eq!(base, expected, "vibrant population {vibrant_pop}");
        }
    }

    // ========================================================================
    // GAP 3: Contrast resolution
    // ========================================================================

    /// If this breaks, it means: the light-background branch no longer
    /// darkens via the LAB search, or the primary is not derived from the
    /// secondary by the fixed lightness step.
    #[test]
    fn test_light_background_low_contrast_scenario() {
        let background = grey(243);
        let base = grey(237);
        assert!((relative_luminance(background) - 0.9).abs() < 0.01);
        assert!((relative_luminance(base) - 0.85).abs() < 0.01);
        assert!(contrast_ratio(base, background) < 1.1);
        assert!(background_is_light(background, base));

        let colors = resolve_text_colors(background, base);

        assert_eq!(colors.secondary, search_toward_dark(base, background));
        assert_eq!(
            colors.primary,
            colors.secondary.shift_lightness(-LIGHTNESS_TEXT_DIFFERENCE_LIGHT)
        );
        assert!(contrast_ratio(colors.secondary, background) >= 4.49999);
    }

    /// If this breaks, it means: the dark-background branch lightens via
    /// the wrong space or the primary moves the wrong way.
    #[test]
    fn test_dark_background_low_contrast_scenario() {
        let background = Rgb::new(18, 24, 48);
        let base = Rgb::new(60, 70, 140);
        assert!(!background_is_light(background, base));

        let colors = resolve_text_colors(background, base);

        assert_eq!(colors.secondary, search_toward_light(base, background));
        assert_eq!(
            colors.primary,
            colors.secondary.shift_lightness(-LIGHTNESS_TEXT_DIFFERENCE_DARK)
        );
        assert!(contrast_ratio(colors.secondary, background) > 4.5);
    }

    /// If this breaks, it means: search is distorting a base color that was
    /// already legible together with its secondary.
    #[test]
    fn test_legible_base_is_never_distorted() {
        let cases = [
            (Rgb::WHITE, Rgb::new(20, 40, 100)),
            (Rgb::new(250, 245, 235), Rgb::new(90, 20, 20)),
            (Rgb::new(15, 15, 25), Rgb::new(250, 220, 120)),
            (Rgb::new(30, 60, 40), Rgb::new(230, 250, 230)),
        ];
        for (background, base) in cases {
            let colors = resolve_text_colors(background, base);
            assert!(meets_text_contrast(colors.secondary, background));
            assert_eq!(colors.primary, base, "base {base} on {background}");
        }
    }

    /// If this breaks, it means: a contrast-deficient base color comes back
    /// with even less contrast than it started with.
    #[test]
    fn test_deficient_base_never_loses_contrast() {
        let backgrounds = [
            Rgb::WHITE,
            grey(245),
            Rgb::new(250, 235, 200),
            Rgb::new(20, 30, 50),
            Rgb::new(10, 10, 10),
            Rgb::new(60, 20, 20),
        ];
        let bases = [
            grey(128),
            grey(200),
            grey(60),
            Rgb::new(240, 200, 90),
            Rgb::new(200, 60, 60),
            Rgb::new(60, 90, 200),
            Rgb::new(120, 200, 140),
            Rgb::new(40, 40, 70),
        ];
        for background in backgrounds {
            for base in bases {
                let before = contrast_ratio(base, background);
                if before >= 4.5 {
                    continue;
                }
                let after = contrast_ratio(resolve_text_colors(background, base).secondary, background);
                assert!(
                    after >= before && after > 4.5,
                    "{base} on {background}: {before:.3} -> {after:.3}"
                );
            }
        }
    }

    /// If this breaks, it means: an empty image no longer degrades to the
    /// documented white background with black text.
    #[test]
    fn test_empty_image_end_to_end() {
        let image = TwoRegions {
            background: Vec::new(),
            foreground: Vec::new(),
        };
        let colors = two_region_extractor().extract(&image);
        assert_eq!(colors.background_color, Rgb::WHITE);
        assert_eq!(colors.first_foreground_color, Rgb::BLACK);
    }

    // ========================================================================
    // GAP 4: Totality and invariants over arbitrary inputs
    // ========================================================================

    fn any_rgb() -> impl Strategy<Value = Rgb> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
    }

    fn any_swatch() -> impl Strategy<Value = Swatch> {
        (any_rgb(), 0u32..30_000).prop_map(|(rgb, population)| Swatch::new(rgb, population))
    }

    fn any_named() -> impl Strategy<Value = NamedSwatches> {
        proptest::collection::vec(proptest::option::of(any_swatch()), 7).prop_map(|slots| {
            NamedSwatches {
                dominant: slots[0],
                vibrant: slots[1],
                dark_vibrant: slots[2],
                light_vibrant: slots[3],
                muted: slots[4],
                dark_muted: slots[5],
                light_muted: slots[6],
            }
        })
    }

    proptest! {
        /// Foreground selection returns one of the offered colors or the
        /// polarity fallback, for any role assignment.
        #[test]
        fn prop_foreground_selection_is_total(background in any_rgb(), named in any_named()) {
            let palette = SwatchPalette::new(Vec::new(), named);
            let base = ForegroundSelector::new(AREA).select(background, &palette);
            let offered = [
                named.dominant, named.vibrant, named.dark_vibrant, named.light_vibrant,
                named.muted, named.dark_muted, named.light_muted,
            ];
            prop_assert!(
                base == Rgb::BLACK
                    || base == Rgb::WHITE
                    || offered.iter().flatten().any(|s| s.rgb() == base)
            );
        }

        /// A background that is black or white is only ever chosen when no
        /// comparable colored swatch exists.
        #[test]
        fn prop_background_black_white_only_when_justified(
            swatches in proptest::collection::vec(any_swatch(), 0..8)
        ) {
            let palette = SwatchPalette::from_swatches(swatches.clone());
            let choice = select_background(&palette);
            let chosen = Swatch::new(choice.color, 0);
            if chosen.is_white_or_black() {
                prop_assert!(choice.excluded_hue.is_none());
                if let Some(dominant) = palette.dominant() {
                    let best_colored = swatches
                        .iter()
                        .filter(|s| **s != dominant && !s.is_white_or_black())
                        .map(|s| s.population())
                        .max();
                    if let Some(second) = best_colored {
                        prop_assert!(dominant.population() as f32 / second as f32 > 2.5);
                    }
                }
            }
        }

        /// Primary and secondary are always one fixed lightness step apart,
        /// unless the base color is kept verbatim.
        #[test]
        fn prop_text_colors_share_lightness_step(background in any_rgb(), base in any_rgb()) {
            let colors = resolve_text_colors(background, base);
            let difference = if background_is_light(background, base) {
                LIGHTNESS_TEXT_DIFFERENCE_LIGHT
            } else {
                LIGHTNESS_TEXT_DIFFERENCE_DARK
            };
            let stepped = colors.secondary.shift_lightness(-difference);
            if meets_text_contrast(base, background) {
                prop_assert!(colors.primary == base || colors.primary == stepped);
            } else {
                prop_assert_eq!(colors.primary, stepped);
            }
        }

        /// Both searches leave already-legible colors untouched.
        #[test]
        fn prop_searches_keep_passing_colors(color in any_rgb(), other in any_rgb()) {
            if meets_text_contrast(color, other) {
                prop_assert_eq!(search_toward_dark(color, other), color);
                prop_assert_eq!(search_toward_light(color, other), color);
            }
        }

        /// The light search never returns a darker color than it started with.
        #[test]
        fn prop_light_search_moves_up(color in any_rgb(), other in any_rgb()) {
            let found = search_toward_light(color, other);
            prop_assert!(Hsl::from(found).l + 0.01 >= Hsl::from(color).l);
        }
    }
}
