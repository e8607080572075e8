//! The playback session: one optional loaded handle, the selected track
//! index and the pause flag.
//!
//! Transitions are only committed once the audio subsystem confirmed them.
//! Releasing the previous handle always happens before a new one is
//! acquired, so at most one handle is alive at any point.

use std::time::Duration;

use log::{debug, info, warn};

use crate::library::Track;

use super::backend::AudioBackend;
use super::error::SessionError;
use super::types::{PlaybackInfo, PlaybackState};

pub struct Session<B: AudioBackend> {
    tracks: Vec<Track>,
    backend: B,
    active: Option<B::Handle>,
    current_index: usize,
    paused: bool,
}

impl<B: AudioBackend> Session<B> {
    pub fn new(tracks: Vec<Track>, backend: B) -> Self {
        Self {
            tracks,
            backend,
            active: None,
            current_index: 0,
            paused: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.active, self.paused) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Playing,
            (Some(_), true) => PlaybackState::Paused,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_handle(&self) -> bool {
        self.active.is_some()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn elapsed(&self) -> Duration {
        self.active
            .as_ref()
            .map(|h| self.backend.position(h))
            .unwrap_or(Duration::ZERO)
    }

    /// True when a loaded, unpaused track has played to its end.
    pub fn track_ended(&self) -> bool {
        match self.active.as_ref() {
            Some(h) => !self.paused && self.backend.is_finished(h),
            None => false,
        }
    }

    pub fn snapshot(&self) -> PlaybackInfo {
        PlaybackInfo {
            index: self.current_index,
            state: self.state(),
            elapsed: self.elapsed(),
            last_error: None,
        }
    }

    /// Load the track at `index` and start it, unloading whatever was loaded.
    ///
    /// On failure `current_index` keeps its previous value and the session is
    /// left idle (the previous handle is gone either way).
    pub fn play(&mut self, index: usize) -> Result<PlaybackState, SessionError> {
        if index >= self.tracks.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }

        self.release_active();

        let track = &self.tracks[index];
        let handle = self.backend.acquire(track)?;

        if let Err(e) = self.backend.play(&handle) {
            if let Err(re) = self.backend.release(handle) {
                warn!("releasing unplayable track {index} failed: {re}");
            }
            return Err(e.into());
        }

        info!("playing track {index} ({})", track.path.display());
        self.active = Some(handle);
        self.current_index = index;
        self.paused = false;
        Ok(self.state())
    }

    /// Restart the current track from the beginning.
    pub fn replay(&mut self) -> Result<PlaybackState, SessionError> {
        self.play(self.current_index)
    }

    pub fn pause(&mut self) -> Result<PlaybackState, SessionError> {
        let handle = self.active.as_ref().ok_or(SessionError::NothingLoaded)?;
        if self.paused {
            return Ok(self.state());
        }
        self.backend.pause(handle)?;
        self.paused = true;
        debug!("paused track {}", self.current_index);
        Ok(self.state())
    }

    pub fn resume(&mut self) -> Result<PlaybackState, SessionError> {
        let handle = self.active.as_ref().ok_or(SessionError::NothingLoaded)?;
        if !self.paused {
            return Ok(self.state());
        }
        self.backend.resume(handle)?;
        self.paused = false;
        debug!("resumed track {}", self.current_index);
        Ok(self.state())
    }

    /// Stop and unload the current track. Subsystem failures are logged; the
    /// session always ends idle.
    pub fn stop(&mut self) -> Result<PlaybackState, SessionError> {
        let handle = self.active.take().ok_or(SessionError::NothingLoaded)?;
        if let Err(e) = self.backend.stop(&handle) {
            warn!("stopping track {} failed: {e}", self.current_index);
        }
        if let Err(e) = self.backend.release(handle) {
            warn!("releasing track {} failed: {e}", self.current_index);
        }
        self.paused = false;
        info!("stopped track {}", self.current_index);
        Ok(self.state())
    }

    pub fn next(&mut self) -> Result<PlaybackState, SessionError> {
        if self.is_empty() {
            return Err(SessionError::EmptyTrackList);
        }
        let len = self.tracks.len();
        self.play((self.current_index + 1) % len)
    }

    pub fn previous(&mut self) -> Result<PlaybackState, SessionError> {
        if self.is_empty() {
            return Err(SessionError::EmptyTrackList);
        }
        let len = self.tracks.len();
        self.play((self.current_index + len - 1) % len)
    }

    fn release_active(&mut self) {
        if let Some(old) = self.active.take() {
            if let Err(e) = self.backend.release(old) {
                warn!("releasing track {} failed: {e}", self.current_index);
            }
        }
        self.paused = false;
    }
}
