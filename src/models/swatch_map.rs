use crate::error::AppError;
use harmonic_colors::{ImageSize, Rect, Rgb};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An image described as solid rectangular color patches.
///
/// Patches are painted in list order: where two overlap, only the later
/// one is visible.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SwatchMap {
    pub width: u32,
    pub height: u32,

    #[serde(default)]
    pub patches: Vec<Patch>,
}

/// One solid-color rectangle of a [`SwatchMap`]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Patch {
    pub color: Rgb,
    pub rect: Rect,
}

impl SwatchMap {
    /// Load a map from disk. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let map = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::info!(
            path = %path.display(),
            width = map.width,
            height = map.height,
            patches = map.patches.len(),
            "Loaded swatch map"
        );
        Ok(map)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        let map: Self = serde_yaml::from_str(content)?;
        map.validate()?;
        Ok(map)
    }

    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        let map: Self = serde_json::from_str(content)?;
        map.validate()?;
        Ok(map)
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.width == 0 || self.height == 0 {
            return Err(AppError::InvalidMap(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let inverted = self
            .patches
            .iter()
            .find(|p| p.rect.right < p.rect.left || p.rect.bottom < p.rect.top);
        if let Some(patch) = inverted {
            return Err(AppError::InvalidMap(format!(
                "patch {} has inverted rect {}",
                patch.color, patch.rect
            )));
        }
        Ok(())
    }
}
