//! Audio output backed by `rodio`.
//!
//! `AudioOutput` owns the device stream; `RodioElement` is the
//! `MediaElement` the playback coordinator drives for each track card.

mod element;
mod output;
mod sink;

pub use element::RodioElement;
pub use output::AudioOutput;
