use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use env_logger::{Builder, Target};

use crate::config::{LoggingSettings, default_log_path};

/// Initialise the global logger.
///
/// Output goes to a file; the terminal belongs to the UI. When no log file
/// can be opened, logging is switched off rather than drawn over the screen.
pub fn init(settings: &LoggingSettings) -> Option<PathBuf> {
    let mut builder = Builder::new();
    builder.parse_filters(&settings.level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp_millis();

    let path = settings.file.clone().or_else(default_log_path);
    let file = path.as_ref().and_then(|p| {
        if let Some(dir) = p.parent() {
            fs::create_dir_all(dir).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(p).ok()
    });

    let opened = match file {
        Some(f) => {
            builder.target(Target::Pipe(Box::new(f)));
            path
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
            None
        }
    };

    // A logger may already be installed (tests); keep the existing one.
    let _ = builder.try_init();
    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_the_log_file_and_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tinydeck.log");
        let settings = LoggingSettings {
            level: "debug".to_string(),
            file: Some(path.clone()),
        };

        assert_eq!(init(&settings), Some(path.clone()));
        assert!(path.is_file());
    }
}
