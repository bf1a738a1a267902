use crate::error::AppError;
use crate::models::{Settings, SwatchMap};
use crate::services::SwatchMapProvider;
use harmonic_colors::{HarmonicColors, HarmonicExtractor};
use std::path::Path;

/// Runs extractions with one validated configuration.
pub struct ExtractionService {
    extractor: HarmonicExtractor,
}

impl ExtractionService {
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let config = settings.into_config()?;
        tracing::debug!(?config, "Extraction configured");
        Ok(Self {
            extractor: HarmonicExtractor::new(config),
        })
    }

    pub fn extractor(&self) -> &HarmonicExtractor {
        &self.extractor
    }

    pub fn extract_map(&self, map: SwatchMap) -> HarmonicColors {
        let provider = SwatchMapProvider::new(map);
        let colors = self.extractor.extract(&provider);
        tracing::info!(
            background = %colors.background_color,
            primary = %colors.first_foreground_color,
            secondary = %colors.second_foreground_color,
            "Extracted colors"
        );
        colors
    }

    /// Load a swatch map from disk and extract it
    pub fn extract_file(&self, path: &Path) -> Result<HarmonicColors, AppError> {
        let map = SwatchMap::load(path)?;
        Ok(self.extract_map(map))
    }
}
