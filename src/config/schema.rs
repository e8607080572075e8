use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tinydeck/config.toml` or `~/.config/tinydeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TINYDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// How often the audio thread wakes up without a command to refresh
    /// elapsed time and check for track end (milliseconds).
    pub poll_interval_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the status line shows the elapsed time of the current track.
    pub show_elapsed: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ six songs, one speaker ~ ".to_string(),
            show_elapsed: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Move on to the next track when the current one ends.
    /// Off by default: playback simply stops at the end of a track.
    pub auto_advance: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory holding the bundled audio assets.
    pub media_dir: String,
    /// File names inside `media_dir`, in list order.
    pub tracks: Vec<String>,
    /// Optional row labels, matched to `tracks` by position (blank tracks
    /// entries keep their slot).
    pub titles: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            media_dir: "media".to_string(),
            tracks: (1..=6).map(|n| format!("song{n}.mp3")).collect(),
            titles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter directives, e.g. `info` or `tinydeck=debug`.
    /// `RUST_LOG` is applied on top when set.
    pub level: String,
    /// Log file path. Defaults to the XDG state directory; logging to the
    /// terminal would draw over the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
