//! Utilities for creating `rodio` sinks from audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` attached to the shared output mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

use crate::playback::StartRejected;

/// Create a paused `Sink` playing `path`, along with the decoder's reported length.
pub(super) fn create_sink(
    mixer: &Mixer,
    path: &Path,
) -> Result<(Sink, Option<Duration>), StartRejected> {
    let file = File::open(path)
        .map_err(|e| StartRejected::new(format!("failed to open {}: {e}", path.display())))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| StartRejected::new(format!("failed to decode {}: {e}", path.display())))?;
    let total = source.total_duration();

    let sink = Sink::connect_new(mixer);
    sink.pause();
    sink.append(source);
    Ok((sink, total))
}

/// Read the container's duration without decoding audio.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    use lofty::prelude::AudioFile;

    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}
