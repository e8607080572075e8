use super::assets::resolve_tracks;
use super::model::default_title;
use crate::config::LibrarySettings;
use std::fs;
use tempfile::tempdir;

fn settings_for(dir: &std::path::Path, tracks: &[&str]) -> LibrarySettings {
    LibrarySettings {
        media_dir: dir.to_string_lossy().into_owned(),
        tracks: tracks.iter().map(|s| s.to_string()).collect(),
        titles: Vec::new(),
    }
}

#[test]
fn default_title_is_one_based() {
    assert_eq!(default_title(0), "Song - 1");
    assert_eq!(default_title(5), "Song - 6");
}

#[test]
fn default_library_has_six_bundled_songs() {
    let s = LibrarySettings::default();
    let tracks = resolve_tracks(&s);
    assert_eq!(tracks.len(), 6);
    assert!(tracks[0].path.ends_with("song1.mp3"));
    assert!(tracks[5].path.ends_with("song6.mp3"));
    assert_eq!(tracks[2].title, "Song - 3");
}

#[test]
fn resolve_keeps_configured_order_and_missing_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.mp3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("a.mp3"), b"not a real mp3").unwrap();

    let tracks = resolve_tracks(&settings_for(dir.path(), &["b.mp3", "missing.ogg", "a.mp3"]));

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].path, dir.path().join("b.mp3"));
    assert_eq!(tracks[1].path, dir.path().join("missing.ogg"));
    assert_eq!(tracks[2].path, dir.path().join("a.mp3"));
    assert_eq!(tracks[1].title, "Song - 2");
}

#[test]
fn resolve_skips_blank_entries_without_gaps_in_titles() {
    let dir = tempdir().unwrap();
    let tracks = resolve_tracks(&settings_for(dir.path(), &["one.mp3", "  ", "two.mp3"]));
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[1].title, "Song - 2");
    assert_eq!(tracks[1].path, dir.path().join("two.mp3"));
}

#[test]
fn configured_titles_override_defaults_positionally() {
    let dir = tempdir().unwrap();
    let mut s = settings_for(dir.path(), &["one.mp3", "two.mp3"]);
    s.titles = vec!["Opening".to_string(), "".to_string()];

    let tracks = resolve_tracks(&s);
    assert_eq!(tracks[0].title, "Opening");
    assert_eq!(tracks[1].title, "Song - 2");
}

#[test]
fn configured_titles_keep_their_slot_across_blank_entries() {
    let dir = tempdir().unwrap();
    let mut s = settings_for(dir.path(), &["one.mp3", "", "three.mp3"]);
    s.titles = vec![
        "Opening".to_string(),
        "Skipped".to_string(),
        "Finale".to_string(),
    ];

    let tracks = resolve_tracks(&s);
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "Opening");
    assert_eq!(tracks[1].title, "Finale");
    assert_eq!(tracks[1].path, dir.path().join("three.mp3"));
}
