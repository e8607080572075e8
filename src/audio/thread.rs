use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;

use log::{debug, error, info, warn};

use crate::library::Track;

use super::backend::AudioBackend;
use super::error::{AcquireError, SessionError};
use super::player::PlayerOptions;
use super::session::Session;
use super::types::{AudioCmd, PlaybackHandle, PlaybackState};

/// Spawn the thread that owns the playback session.
///
/// Commands are applied strictly one after another in arrival order, so a
/// release always completes before the next acquire starts. The backend is
/// built on the audio thread itself since output streams are not `Send`.
pub(super) fn spawn_audio_thread<B, F>(
    tracks: Vec<Track>,
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    options: PlayerOptions,
    make_backend: F,
) -> JoinHandle<()>
where
    B: AudioBackend + 'static,
    F: FnOnce() -> Result<B, AcquireError> + Send + 'static,
{
    thread::spawn(move || {
        let backend = match make_backend() {
            Ok(b) => b,
            Err(e) => {
                error!("audio output unavailable: {e}");
                if let Ok(mut info) = playback_info.lock() {
                    info.last_error = Some(e.to_string());
                }
                drain_until_quit(&rx);
                return;
            }
        };

        let mut session = Session::new(tracks, backend);
        info!("audio thread ready with {} tracks", session.len());

        loop {
            match rx.recv_timeout(options.poll_interval) {
                Ok(cmd) => {
                    let quit = cmd == AudioCmd::Quit;
                    let outcome = apply(&mut session, &cmd);
                    publish(&playback_info, &session, &cmd, outcome);
                    if quit {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if session.track_ended() {
                        let cmd = if options.auto_advance {
                            AudioCmd::Next
                        } else {
                            AudioCmd::Stop
                        };
                        debug!("track {} ended, applying {cmd:?}", session.current_index());
                        let outcome = apply(&mut session, &cmd);
                        publish(&playback_info, &session, &cmd, outcome);
                    } else if session.state() == PlaybackState::Playing {
                        if let Ok(mut info) = playback_info.lock() {
                            info.elapsed = session.elapsed();
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("command channel closed, stopping playback");
                    match session.stop() {
                        Ok(_) => {}
                        Err(e) if e.is_noop() => debug!("stop on disconnect ignored: {e}"),
                        Err(e) => warn!("stop on disconnect failed: {e}"),
                    }
                    break;
                }
            }
        }
        debug!("audio thread exiting");
    })
}

fn apply<B: AudioBackend>(
    session: &mut Session<B>,
    cmd: &AudioCmd,
) -> Result<PlaybackState, SessionError> {
    match *cmd {
        AudioCmd::Play(i) => session.play(i),
        AudioCmd::Pause => session.pause(),
        AudioCmd::Resume => session.resume(),
        AudioCmd::TogglePause => {
            if session.is_paused() {
                session.resume()
            } else {
                session.pause()
            }
        }
        AudioCmd::Replay => session.replay(),
        AudioCmd::Stop | AudioCmd::Quit => session.stop(),
        AudioCmd::Next => session.next(),
        AudioCmd::Prev => session.previous(),
    }
}

/// Copy the session state into the shared handle. Failures are logged and
/// kept for the status line; they never reach the sender of `cmd`.
fn publish<B: AudioBackend>(
    playback_info: &PlaybackHandle,
    session: &Session<B>,
    cmd: &AudioCmd,
    outcome: Result<PlaybackState, SessionError>,
) {
    let mut snapshot = session.snapshot();

    let Ok(mut info) = playback_info.lock() else {
        error!("playback snapshot lock poisoned, dropping update for {cmd:?}");
        return;
    };

    match outcome {
        Ok(_) => {}
        Err(e) if e.is_noop() => {
            debug!("{cmd:?} ignored: {e}");
            snapshot.last_error = info.last_error.take();
        }
        Err(e) => {
            warn!("{cmd:?} failed: {e}");
            snapshot.last_error = Some(e.to_string());
        }
    }

    *info = snapshot;
}

fn drain_until_quit(rx: &Receiver<AudioCmd>) {
    while let Ok(cmd) = rx.recv() {
        if cmd == AudioCmd::Quit {
            break;
        }
        debug!("{cmd:?} ignored: no audio output");
    }
}
