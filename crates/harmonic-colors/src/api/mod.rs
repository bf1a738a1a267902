//! Public API: configuration, the extractor, and their error type.

mod config;
mod error;
mod extractor;

pub use config::{ExtractionConfig, ExtractionConfigBuilder, RegionLayout, DEFAULT_RESIZE_AREA};
pub use error::ConfigError;
pub use extractor::{HarmonicColors, HarmonicExtractor};
