use std::path::PathBuf;

/// One bundled audio asset, identified by its position in the track list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
}

/// Row label used when no title is configured for `position`.
pub fn default_title(position: usize) -> String {
    format!("Song - {}", position + 1)
}
