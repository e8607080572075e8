//! Audio subsystem: the playback session and the thread that owns it.
//!
//! The UI never touches a loaded track directly. It sends [`AudioCmd`]s to
//! the [`AudioPlayer`] and renders the [`PlaybackInfo`] snapshot the audio
//! thread publishes after every command.

mod backend;
mod error;
mod player;
mod session;
mod sink;
mod thread;
mod types;

pub use backend::AudioBackend;
pub use error::{AcquireError, ReleaseError, SessionError, TransportError, TransportOp};
pub use player::{AudioPlayer, PlayerOptions};
pub use session::Session;
pub use types::{AudioCmd, PlaybackHandle, PlaybackInfo, PlaybackState};
