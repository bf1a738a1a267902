//! Role designation by target scoring.
//!
//! Each non-dominant role has a lightness band and a saturation band
//! `(min, target, max)`. A swatch inside both bands is scored by how close
//! it sits to the targets and how populous it is relative to the dominant
//! swatch; the best unclaimed swatch takes the role.

use super::named::{NamedSwatches, SwatchRole};
use super::swatch::Swatch;

const SATURATION_WEIGHT: f32 = 0.24;
const LIGHTNESS_WEIGHT: f32 = 0.52;
const POPULATION_WEIGHT: f32 = 0.24;

#[derive(Debug, Clone, Copy)]
struct Band {
    min: f32,
    target: f32,
    max: f32,
}

impl Band {
    const fn new(min: f32, target: f32, max: f32) -> Self {
        Self { min, target, max }
    }

    fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

const LIGHT: Band = Band::new(0.55, 0.74, 1.0);
const NORMAL: Band = Band::new(0.3, 0.5, 0.7);
const DARK: Band = Band::new(0.0, 0.26, 0.45);
const VIBRANT: Band = Band::new(0.35, 1.0, 1.0);
const MUTED: Band = Band::new(0.0, 0.3, 0.4);

#[derive(Debug, Clone, Copy)]
struct Target {
    role: SwatchRole,
    lightness: Band,
    saturation: Band,
}

/// Scoring order; earlier targets claim swatches first.
const TARGETS: [Target; 6] = [
    Target { role: SwatchRole::LightVibrant, lightness: LIGHT, saturation: VIBRANT },
    Target { role: SwatchRole::Vibrant, lightness: NORMAL, saturation: VIBRANT },
    Target { role: SwatchRole::DarkVibrant, lightness: DARK, saturation: VIBRANT },
    Target { role: SwatchRole::LightMuted, lightness: LIGHT, saturation: MUTED },
    Target { role: SwatchRole::Muted, lightness: NORMAL, saturation: MUTED },
    Target { role: SwatchRole::DarkMuted, lightness: DARK, saturation: MUTED },
];

impl Target {
    fn score(&self, swatch: &Swatch, max_population: u32) -> f32 {
        let hsl = swatch.hsl();
        let saturation = SATURATION_WEIGHT * (1.0 - (hsl.s - self.saturation.target).abs());
        let lightness = LIGHTNESS_WEIGHT * (1.0 - (hsl.l - self.lightness.target).abs());
        let population = if max_population > 0 {
            POPULATION_WEIGHT * (swatch.population() as f32 / max_population as f32)
        } else {
            0.0
        };
        saturation + lightness + population
    }

    fn accepts(&self, swatch: &Swatch) -> bool {
        let hsl = swatch.hsl();
        self.saturation.contains(hsl.s) && self.lightness.contains(hsl.l)
    }
}

/// The highest-population swatch; the earliest one wins a tie.
pub(crate) fn dominant(swatches: &[Swatch]) -> Option<Swatch> {
    swatches.iter().fold(None, |best: Option<Swatch>, swatch| match best {
        Some(b) if b.population() >= swatch.population() => Some(b),
        _ => Some(*swatch),
    })
}

/// Assign every role from an already-filtered swatch list.
pub(crate) fn designate(swatches: &[Swatch]) -> NamedSwatches {
    let mut named = NamedSwatches {
        dominant: dominant(swatches),
        ..NamedSwatches::default()
    };
    let max_population = named.dominant.map_or(0, |d| d.population());
    let mut claimed = vec![false; swatches.len()];

    for target in &TARGETS {
        let mut best: Option<(usize, f32)> = None;
        for (i, swatch) in swatches.iter().enumerate() {
            if claimed[i] || !target.accepts(swatch) {
                continue;
            }
            let score = target.score(swatch, max_population);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }
        if let Some((i, _)) = best {
            claimed[i] = true;
            named.set(target.role, Some(swatches[i]));
        }
    }

    named
}
