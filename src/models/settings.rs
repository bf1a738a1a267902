use crate::error::AppError;
use harmonic_colors::{ExtractionConfig, Rect, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extraction settings loaded from harmonic.yaml
///
/// Every field is optional. A side split and explicit regions are mutually
/// exclusive; leaving both out samples the whole image for both passes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Side of the image the background is sampled from
    #[serde(default)]
    pub side: Option<Side>,

    /// Where the text area starts along the split axis (requires `side`)
    #[serde(default)]
    pub fraction: Option<f32>,

    /// Downsample target in pixels
    #[serde(default)]
    pub resize_area: Option<u32>,

    #[serde(default)]
    pub background_region: Option<Rect>,

    #[serde(default)]
    pub foreground_region: Option<Rect>,
}

impl Settings {
    /// Conventional settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "harmonic.yaml";

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            side = ?settings.side,
            resize_area = ?settings.resize_area,
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Fields set in `overrides` replace the ones in `self`.
    pub fn overridden_by(self, overrides: Settings) -> Settings {
        Settings {
            side: overrides.side.or(self.side),
            fraction: overrides.fraction.or(self.fraction),
            resize_area: overrides.resize_area.or(self.resize_area),
            background_region: overrides.background_region.or(self.background_region),
            foreground_region: overrides.foreground_region.or(self.foreground_region),
        }
    }

    pub fn into_config(self) -> Result<ExtractionConfig, AppError> {
        let mut builder = ExtractionConfig::builder();

        match (self.side, self.fraction) {
            (Some(side), Some(fraction)) => builder = builder.split_at(side, fraction),
            (Some(side), None) => builder = builder.split(side),
            (None, Some(_)) => {
                return Err(AppError::Settings("fraction requires a side".to_string()));
            }
            (None, None) => {}
        }
        if let Some(rect) = self.background_region {
            builder = builder.background_region(rect);
        }
        if let Some(rect) = self.foreground_region {
            builder = builder.foreground_region(rect);
        }
        if let Some(area) = self.resize_area {
            builder = builder.resize_area(area);
        }

        Ok(builder.build()?)
    }
}
