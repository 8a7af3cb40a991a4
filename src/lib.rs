//! Terminal artist page with one-at-a-time audio playback.
//!
//! The reusable pieces are [`assets`] (fallback-chasing asset resolution) and
//! [`playback`] (single-active coordination over any [`playback::MediaElement`]).
//! The rest hosts them in a `ratatui` page.

pub mod app;
pub mod assets;
pub mod audio;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod playback;
pub mod runtime;
pub mod ui;
