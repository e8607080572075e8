use std::time::Duration;

use crate::library::Track;

use super::error::{AcquireError, ReleaseError, TransportError};

/// The audio subsystem as seen by the playback session.
///
/// A handle is one decoded, playable resource. The session owns at most one
/// at a time and always hands it back through `release`.
pub trait AudioBackend {
    type Handle;

    /// Load `track` into a new handle. The handle starts suspended.
    fn acquire(&mut self, track: &Track) -> Result<Self::Handle, AcquireError>;
    fn release(&mut self, handle: Self::Handle) -> Result<(), ReleaseError>;

    fn play(&mut self, handle: &Self::Handle) -> Result<(), TransportError>;
    fn pause(&mut self, handle: &Self::Handle) -> Result<(), TransportError>;
    fn resume(&mut self, handle: &Self::Handle) -> Result<(), TransportError>;
    fn stop(&mut self, handle: &Self::Handle) -> Result<(), TransportError>;

    /// Playback position of `handle`.
    fn position(&self, _handle: &Self::Handle) -> Duration {
        Duration::ZERO
    }

    /// True once `handle` has played through its source.
    fn is_finished(&self, _handle: &Self::Handle) -> bool {
        false
    }
}
