//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the page content, the
//! current section and selection, and the playback coordinator.

mod model;
mod section;

pub use model::*;
pub use section::*;

#[cfg(test)]
mod tests;
