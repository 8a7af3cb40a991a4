//! Single-active playback coordination.
//!
//! Every audio card on screen registers a handle with the
//! `PlaybackCoordinator`. The coordinator owns the elements behind those
//! handles and makes sure at most one of them is playing at a time.

mod coordinator;
mod element;
mod progress;
mod types;

pub use coordinator::*;
pub use element::*;
pub use progress::*;
pub use types::*;
