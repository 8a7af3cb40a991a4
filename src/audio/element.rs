use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use rodio::Sink;
use rodio::mixer::Mixer;

use super::sink::{create_sink, probe_duration};
use crate::playback::{ElementStatus, MediaElement, StartRejected};

/// A track file played through the shared output mixer.
///
/// The sink is built on the first start. Pausing keeps it so the next start
/// resumes; once it has drained, the next start rebuilds it from the top.
pub struct RodioElement {
    path: PathBuf,
    mixer: Option<Mixer>,
    sink: Option<Sink>,
    duration: Option<Duration>,
    volume: f32,
}

impl RodioElement {
    pub fn new(path: impl Into<PathBuf>, mixer: Option<Mixer>, volume: f32) -> Self {
        let path = path.into();
        let duration = probe_duration(&path);
        Self {
            path,
            mixer,
            sink: None,
            duration,
            volume,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length read from the file's metadata, if any.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn drained(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| s.empty())
    }
}

impl MediaElement for RodioElement {
    fn start(&mut self) -> Result<(), StartRejected> {
        if let Some(sink) = &self.sink
            && !sink.empty()
        {
            sink.play();
            return Ok(());
        }

        let mixer = self
            .mixer
            .as_ref()
            .ok_or_else(|| StartRejected::new("no audio output device"))?;
        let (sink, total) = create_sink(mixer, &self.path)?;
        if self.duration.is_none() {
            self.duration = total;
        }
        sink.set_volume(self.volume);
        sink.play();
        debug!("started {}", self.path.display());
        self.sink = Some(sink);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn status(&self) -> ElementStatus {
        let duration = self.duration.map_or(f64::NAN, |d| d.as_secs_f64());
        let ended = self.drained();
        let current_time = if ended && duration.is_finite() {
            duration
        } else {
            self.sink
                .as_ref()
                .map_or(0.0, |s| s.get_pos().as_secs_f64())
        };
        ElementStatus {
            current_time,
            duration,
            ended,
        }
    }
}
