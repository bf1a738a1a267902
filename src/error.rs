use harmonic_colors::{ConfigError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Color error: {0}")]
    Color(#[from] ParseColorError),

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Invalid swatch map: {0}")]
    InvalidMap(String),
}
