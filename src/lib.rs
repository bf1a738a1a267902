//! Harmonic - accessible color schemes from images
//!
//! Swatch-map inputs, YAML settings and the extraction service behind the
//! `harmonic` CLI. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
