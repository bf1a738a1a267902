pub mod extraction;
pub mod swatch_map_provider;

pub use extraction::ExtractionService;
pub use swatch_map_provider::SwatchMapProvider;
