//! `rodio` implementation of [`AudioBackend`].
//!
//! Every handle is its own `Sink` attached to the default output stream's
//! mixer, so unloading one never disturbs the stream itself.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use crate::library::Track;

use super::backend::AudioBackend;
use super::error::{AcquireError, ReleaseError, TransportError};

pub struct RodioBackend {
    stream: OutputStream,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, AcquireError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AcquireError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which draws over the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Handle = Sink;

    fn acquire(&mut self, track: &Track) -> Result<Sink, AcquireError> {
        let file = File::open(&track.path).map_err(|source| AcquireError::Open {
            path: track.path.clone(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| AcquireError::Decode {
            path: track.path.clone(),
            reason: e.to_string(),
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        Ok(sink)
    }

    fn release(&mut self, handle: Sink) -> Result<(), ReleaseError> {
        handle.stop();
        drop(handle);
        Ok(())
    }

    fn play(&mut self, handle: &Sink) -> Result<(), TransportError> {
        handle.play();
        Ok(())
    }

    fn pause(&mut self, handle: &Sink) -> Result<(), TransportError> {
        handle.pause();
        Ok(())
    }

    fn resume(&mut self, handle: &Sink) -> Result<(), TransportError> {
        handle.play();
        Ok(())
    }

    fn stop(&mut self, handle: &Sink) -> Result<(), TransportError> {
        handle.stop();
        Ok(())
    }

    fn position(&self, handle: &Sink) -> Duration {
        handle.get_pos()
    }

    fn is_finished(&self, handle: &Sink) -> bool {
        handle.empty()
    }
}
