use super::*;
use crate::audio::{AudioCmd, PlaybackHandle, PlaybackInfo, PlaybackState};
use crate::library::Track;
use std::sync::{Arc, Mutex};

fn t(n: usize) -> Track {
    Track {
        path: std::path::PathBuf::from(format!("song{n}.mp3")),
        title: format!("Song - {n}"),
    }
}

fn six() -> Vec<Track> {
    (1..=6).map(t).collect()
}

fn handle(index: usize, state: PlaybackState) -> PlaybackHandle {
    Arc::new(Mutex::new(PlaybackInfo {
        index,
        state,
        ..PlaybackInfo::default()
    }))
}

#[test]
fn cursor_wraps_in_both_directions() {
    let mut app = App::new(six());
    app.prev();
    assert_eq!(app.selected, 5);
    app.next();
    assert_eq!(app.selected, 0);
    app.next();
    assert_eq!(app.selected, 1);
}

#[test]
fn cursor_moves_are_noops_on_empty_list() {
    let mut app = App::new(Vec::new());
    app.next();
    app.prev();
    assert_eq!(app.selected, 0);
    assert!(!app.has_tracks());
}

#[test]
fn without_handle_playback_is_idle_default() {
    let app = App::new(six());
    let info = app.playback();
    assert_eq!(info.state, PlaybackState::Idle);
    assert_eq!(info.index, 0);
    assert!(app.now_playing().is_none());
}

#[test]
fn pause_button_toggles_with_paused_flag() {
    let mut app = App::new(six());
    let h = handle(2, PlaybackState::Playing);
    app.set_playback_handle(h.clone());

    assert!(!app.pause_icon_shows_resume());
    assert_eq!(app.pause_button_cmd(), AudioCmd::Pause);

    h.lock().unwrap().state = PlaybackState::Paused;
    assert!(app.pause_icon_shows_resume());
    assert_eq!(app.pause_button_cmd(), AudioCmd::Resume);
}

#[test]
fn now_playing_and_current_row_follow_snapshot() {
    let mut app = App::new(six());
    let h = handle(3, PlaybackState::Playing);
    app.set_playback_handle(h.clone());

    assert!(app.is_current(3));
    assert!(!app.is_current(2));
    assert_eq!(app.now_playing().unwrap().title, "Song - 4");

    h.lock().unwrap().state = PlaybackState::Idle;
    assert!(app.now_playing().is_none());
    assert!(app.is_current(3));
}

#[test]
fn sync_cursor_only_when_following() {
    let mut app = App::new(six());
    app.set_playback_handle(handle(4, PlaybackState::Playing));

    app.follow_playback_off();
    app.sync_cursor();
    assert_eq!(app.selected, 0);

    app.follow_playback_on();
    app.sync_cursor();
    assert_eq!(app.selected, 4);
}

#[test]
fn pending_follow_holds_cursor_until_session_reaches_it() {
    let mut app = App::new(six());
    let h = handle(0, PlaybackState::Idle);
    app.set_playback_handle(h.clone());
    app.follow_playback_off();
    for _ in 0..4 {
        app.next();
    }

    app.set_pending_follow_index(app.selected);
    app.sync_cursor();
    assert_eq!(app.selected, 4);
    assert_eq!(app.pending_follow_index, Some(4));

    h.lock().unwrap().index = 4;
    h.lock().unwrap().state = PlaybackState::Playing;
    app.sync_cursor();
    assert_eq!(app.selected, 4);
    assert_eq!(app.pending_follow_index, None);

    h.lock().unwrap().index = 5;
    app.sync_cursor();
    assert_eq!(app.selected, 5);
}

#[test]
fn follow_on_drops_a_stale_pending_index() {
    let mut app = App::new(six());
    app.set_playback_handle(handle(1, PlaybackState::Playing));
    app.set_pending_follow_index(3);
    app.sync_cursor();
    assert_eq!(app.selected, 0);

    app.follow_playback_on();
    app.sync_cursor();
    assert_eq!(app.selected, 1);
}
