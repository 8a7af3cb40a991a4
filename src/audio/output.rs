use log::{info, warn};
use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder};

/// Owns the default output stream for the lifetime of the app.
///
/// A missing device is not fatal: every element started without a mixer is
/// rejected, and the coordinator's retry path reports it.
pub struct AudioOutput {
    stream: Option<OutputStream>,
}

impl AudioOutput {
    pub fn open() -> Self {
        match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped, which would
                // land on top of the restored terminal.
                stream.log_on_drop(false);
                info!("audio output opened");
                Self {
                    stream: Some(stream),
                }
            }
            Err(e) => {
                warn!("no audio output device: {e}");
                Self { stream: None }
            }
        }
    }

    /// An output that never plays anything.
    pub fn disabled() -> Self {
        Self { stream: None }
    }

    pub fn is_available(&self) -> bool {
        self.stream.is_some()
    }

    pub fn mixer(&self) -> Option<Mixer> {
        self.stream.as_ref().map(|s| s.mixer().clone())
    }
}
