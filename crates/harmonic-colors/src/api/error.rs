//! Configuration errors.
//!
//! Bad regions and resize targets are rejected when the configuration is
//! built; the selection algorithms themselves never fail.

use thiserror::Error;

use crate::region::Rect;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("text start fraction must be strictly between 0 and 1, got {0}")]
    InvalidFraction(f32),

    #[error("{which} region {rect} is empty")]
    EmptyRegion { which: &'static str, rect: Rect },

    #[error("resize area must be greater than zero")]
    ZeroResizeArea,

    #[error("a side split and explicit regions cannot be combined")]
    ConflictingRegions,
}
