//! Handle identifiers, per-handle state and coordinator errors.

use std::fmt;

use thiserror::Error;

/// Opaque identifier of one registered media element.
///
/// Track cards use `"<kind>:<id>"`, e.g. `"originals:1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(String);

impl HandleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HandleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HandleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Playback state of a single handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HandleState {
    #[default]
    Idle,
    Playing,
}

/// Result of a `request_play` call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The handle was started (every other handle is now idle).
    Started,
    /// The handle was already active and playing; it is now paused.
    Paused,
    /// The element refused to start; one retry is pending.
    RetryScheduled,
}

/// Result of firing the pending start retry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RetryOutcome {
    Started,
    /// The retry failed too; the handle is left idle.
    GaveUp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("unknown media handle '{0}'")]
    UnknownHandle(HandleId),
    #[error("media handle '{0}' is already registered")]
    AlreadyRegistered(HandleId),
}
