//! Audio-related small types and handles.
//!
//! This module defines the commands accepted by the audio thread and the
//! playback snapshot it shares with the UI.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Observable state of the playback session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing loaded.
    #[default]
    Idle,
    /// A track is loaded and audible.
    Playing,
    /// A track is loaded but suspended.
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    /// Load and start the track at the given index, replacing whatever is loaded.
    Play(usize),
    /// Suspend the loaded track.
    Pause,
    /// Continue the loaded track.
    Resume,
    /// Pause when playing, resume when paused.
    TogglePause,
    /// Restart the current track from the beginning.
    Replay,
    /// Stop and unload the current track.
    Stop,
    /// Skip to the next track, wrapping around.
    Next,
    /// Go to the previous track, wrapping around.
    Prev,
    /// Stop playback and shut the audio thread down.
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Selected track index; remembered even while idle.
    pub index: usize,
    /// Session state after the last processed command.
    pub state: PlaybackState,
    /// Elapsed playback time for the loaded track.
    pub elapsed: Duration,
    /// Most recent failure, cleared by the next successful command.
    pub last_error: Option<String>,
}

impl PlaybackInfo {
    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
