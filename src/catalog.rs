//! Page content: artist profile, track lists, videos and news.
//!
//! The catalog is read-only data. A built-in copy is compiled into the binary
//! and can be replaced by a TOML file (`catalog.path` in the config).

mod embed;
mod load;
mod model;

pub use embed::*;
pub use load::*;
pub use model::*;

#[cfg(test)]
mod tests;
