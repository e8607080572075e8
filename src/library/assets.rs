use std::path::Path;

use log::{debug, warn};

use crate::config::LibrarySettings;

use super::model::{Track, default_title};

/// Resolve the fixed, ordered track list from `settings`.
///
/// Each entry of `settings.tracks` is joined onto `settings.media_dir`. The
/// configured order is kept as-is; blank entries are skipped. Titles pair
/// with `tracks` by their configured slot, so a skipped entry drops its title
/// too; default titles number the resulting rows. Missing files
/// stay in the list so positions remain stable; loading them fails later
/// and is logged there.
pub fn resolve_tracks(settings: &LibrarySettings) -> Vec<Track> {
    let media_dir = Path::new(&settings.media_dir);

    let tracks: Vec<Track> = settings
        .tracks
        .iter()
        .enumerate()
        .map(|(slot, name)| (slot, name.trim()))
        .filter(|(_, name)| !name.is_empty())
        .enumerate()
        .map(|(row, (slot, name))| {
            let title = settings
                .titles
                .get(slot)
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| default_title(row));

            Track {
                path: media_dir.join(name),
                title,
            }
        })
        .collect();

    for track in &tracks {
        if !track.path.is_file() {
            warn!("track asset missing: {}", track.path.display());
        }
    }
    debug!(
        "resolved {} tracks from {}",
        tracks.len(),
        media_dir.display()
    );

    tracks
}
