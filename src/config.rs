//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema (asset templates, playback,
//! UI, catalog and logging settings) and helpers to load it from disk.

mod load;
mod schema;

pub use schema::*;
