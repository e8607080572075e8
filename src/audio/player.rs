use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::Settings;
use crate::library::Track;

use super::backend::AudioBackend;
use super::error::AcquireError;
use super::sink::RodioBackend;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Knobs for the audio thread.
#[derive(Debug, Clone, Copy)]
pub struct PlayerOptions {
    /// Wake-up interval when no command arrives.
    pub poll_interval: Duration,
    /// Play the next track when the current one ends instead of stopping.
    pub auto_advance: bool,
}

impl PlayerOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            poll_interval: Duration::from_millis(settings.audio.poll_interval_ms.max(1)),
            auto_advance: settings.playback.auto_advance,
        }
    }
}

/// Front end of the audio thread: a command sender plus the shared
/// playback snapshot.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Start the audio thread on the default output device.
    pub fn new(tracks: Vec<Track>, options: PlayerOptions) -> Self {
        Self::with_backend(tracks, options, RodioBackend::open_default)
    }

    /// Start the audio thread with a backend built by `make_backend`.
    pub fn with_backend<B, F>(tracks: Vec<Track>, options: PlayerOptions, make_backend: F) -> Self
    where
        B: AudioBackend + 'static,
        F: FnOnce() -> Result<B, AcquireError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle =
            spawn_audio_thread(tracks, rx, playback_info.clone(), options, make_backend);

        Self {
            tx,
            playback: playback_info,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Stop playback, release the loaded track and wait for the audio thread.
    pub fn quit(&self) {
        let _ = self.send(AudioCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                if h.join().is_err() {
                    log::error!("audio thread panicked");
                }
            }
        }
    }
}
