//! Failure taxonomy of the audio subsystem and the playback session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Loading a track into a playable handle failed.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// Unloading a handle failed inside the subsystem.
#[derive(Debug, Error)]
#[error("release failed: {0}")]
pub struct ReleaseError(pub String);

/// Transport calls on a loaded handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransportOp {
    Play,
    Pause,
    Resume,
    Stop,
}

impl std::fmt::Display for TransportOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransportOp::Play => "play",
            TransportOp::Pause => "pause",
            TransportOp::Resume => "resume",
            TransportOp::Stop => "stop",
        };
        f.write_str(name)
    }
}

/// The subsystem rejected a transport call.
#[derive(Debug, Error)]
#[error("{op} rejected: {reason}")]
pub struct TransportError {
    pub op: TransportOp,
    pub reason: String,
}

/// Why a session command did not produce the requested transition.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("track index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no tracks loaded")]
    EmptyTrackList,
    #[error("nothing is loaded")]
    NothingLoaded,
    #[error(transparent)]
    Acquire(#[from] AcquireError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SessionError {
    /// True for commands that were simply not applicable in the current state.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            SessionError::EmptyTrackList | SessionError::NothingLoaded
        )
    }
}
