//! The side-effect surface the coordinator drives.

use thiserror::Error;

/// The underlying media refused to start (no output device, missing or
/// undecodable source, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("playback start rejected: {reason}")]
pub struct StartRejected {
    pub reason: String,
}

impl StartRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Snapshot of an element's own clock, polled by the host loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementStatus {
    /// Seconds into the source.
    pub current_time: f64,
    /// Total seconds; `0.0` or non-finite when unknown.
    pub duration: f64,
    /// The source played through to its end.
    pub ended: bool,
}

impl Default for ElementStatus {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: f64::NAN,
            ended: false,
        }
    }
}

/// A playable element registered with the coordinator.
pub trait MediaElement {
    /// Start (or resume) playback.
    fn start(&mut self) -> Result<(), StartRejected>;

    /// Pause playback, keeping the position.
    fn pause(&mut self);

    fn status(&self) -> ElementStatus {
        ElementStatus::default()
    }
}
