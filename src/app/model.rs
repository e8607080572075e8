//! Application model: the track list, the list cursor and a view of the
//! playback snapshot published by the audio thread.

use crate::audio::{AudioCmd, PlaybackHandle, PlaybackInfo, PlaybackState};
use crate::library::Track;

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    /// Row under the list cursor.
    pub selected: usize,
    pub playback_handle: Option<PlaybackHandle>,
    /// When set, the cursor jumps to whatever track the session selects.
    pub follow_playback: bool,
    /// Row a `Play` was requested for; the cursor holds still until the
    /// session reports it.
    pub pending_follow_index: Option<usize>,
    pub media_dir: Option<String>,
}

impl App {
    /// Create a new `App` with the provided list of `tracks`.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            selected: 0,
            playback_handle: None,
            follow_playback: true,
            pending_follow_index: None,
            media_dir: None,
        }
    }

    /// Attach a `PlaybackHandle` used to observe the playback session.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Record the directory the tracks were resolved from.
    pub fn set_media_dir(&mut self, dir: String) {
        self.media_dir = Some(dir);
    }

    /// Return true if the track list is non-empty.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Latest snapshot from the audio thread, or an idle default.
    pub fn playback(&self) -> PlaybackInfo {
        self.playback_handle
            .as_ref()
            .and_then(|h| h.lock().ok().map(|info| info.clone()))
            .unwrap_or_default()
    }

    /// True when `index` is the session's current track.
    pub fn is_current(&self, index: usize) -> bool {
        self.playback().index == index
    }

    /// The pause button shows the "resume" icon while paused.
    pub fn pause_icon_shows_resume(&self) -> bool {
        self.playback().is_paused()
    }

    /// Command bound to the pause/resume button in its current icon state.
    pub fn pause_button_cmd(&self) -> AudioCmd {
        if self.pause_icon_shows_resume() {
            AudioCmd::Resume
        } else {
            AudioCmd::Pause
        }
    }

    /// The track currently loaded, if any.
    pub fn now_playing(&self) -> Option<&Track> {
        let info = self.playback();
        if info.state == PlaybackState::Idle {
            return None;
        }
        self.tracks.get(info.index)
    }

    /// Follow the session's current track from now on.
    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
        self.pending_follow_index = None;
    }

    /// Disable follow-playback and clear any pending follow index.
    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
        self.pending_follow_index = None;
    }

    /// Follow playback, but only once the session has moved to `idx`.
    pub fn set_pending_follow_index(&mut self, idx: usize) {
        self.follow_playback = true;
        self.pending_follow_index = Some(idx);
    }

    /// Move the cursor onto the session's current track when following.
    ///
    /// With a pending index the cursor stays put until the snapshot reaches
    /// it, so a play that fails leaves the cursor on the requested row.
    pub fn sync_cursor(&mut self) {
        if !self.follow_playback {
            return;
        }
        let index = self.playback().index;
        if let Some(pending) = self.pending_follow_index {
            if pending != index {
                return;
            }
            self.pending_follow_index = None;
        }
        if index < self.tracks.len() {
            self.selected = index;
        }
    }

    /// Move the cursor to the next row, wrapping to the top.
    pub fn next(&mut self) {
        if self.has_tracks() {
            self.selected = (self.selected + 1) % self.tracks.len();
        }
    }

    /// Move the cursor to the previous row, wrapping to the bottom.
    pub fn prev(&mut self) {
        if self.has_tracks() {
            let len = self.tracks.len();
            self.selected = (self.selected + len - 1) % len;
        }
    }
}
