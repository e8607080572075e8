//! Track asset provider.
//!
//! The track list is a fixed ordered sequence resolved once at startup
//! from configuration and handed to the audio thread and the UI.

mod assets;
mod model;

pub use assets::resolve_tracks;
pub use model::Track;

#[cfg(test)]
mod tests;
