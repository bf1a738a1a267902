pub mod settings;
pub mod swatch_map;

pub use settings::Settings;
pub use swatch_map::{Patch, SwatchMap};
