use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, error};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config;
use crate::ui;

/// What a key press asks the runtime to do.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the audio thread.
    Send(AudioCmd),
    /// Only the cursor/view changed.
    Redraw,
    Quit,
}

/// Main terminal event loop: handles input, UI drawing and forwarding
/// commands to the audio thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.sync_cursor();
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key_event(key, app) {
            KeyAction::Quit => break,
            KeyAction::Redraw => {}
            KeyAction::Send(cmd) => {
                debug!("sending {cmd:?}");
                if let Err(e) = audio_player.send(cmd) {
                    error!("audio thread is gone, dropping {:?}", e.0);
                }
            }
        }
    }

    Ok(())
}

/// Map one key press onto the app model and, for transport keys, onto a
/// session command.
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            app.follow_playback_off();
            app.next();
            KeyAction::Redraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.follow_playback_off();
            app.prev();
            KeyAction::Redraw
        }
        KeyCode::Char('c') => {
            app.follow_playback_on();
            KeyAction::Redraw
        }
        KeyCode::Enter => {
            if !app.has_tracks() {
                return KeyAction::Redraw;
            }
            app.set_pending_follow_index(app.selected);
            KeyAction::Send(AudioCmd::Play(app.selected))
        }
        KeyCode::Char(' ') => KeyAction::Send(app.pause_button_cmd()),
        KeyCode::Char('p') => KeyAction::Send(AudioCmd::TogglePause),
        KeyCode::Char('r') => {
            app.follow_playback_on();
            KeyAction::Send(AudioCmd::Replay)
        }
        KeyCode::Char('s') => KeyAction::Send(AudioCmd::Stop),
        KeyCode::Char('l') | KeyCode::Right => {
            app.follow_playback_on();
            KeyAction::Send(AudioCmd::Next)
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.follow_playback_on();
            KeyAction::Send(AudioCmd::Prev)
        }
        _ => KeyAction::Redraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{PlaybackInfo, PlaybackState};
    use crate::library::Track;
    use crossterm::event::KeyModifiers;
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(n: usize) -> App {
        App::new(
            (1..=n)
                .map(|i| Track {
                    path: format!("song{i}.mp3").into(),
                    title: format!("Song - {i}"),
                })
                .collect(),
        )
    }

    #[test]
    fn enter_plays_the_row_under_the_cursor() {
        let mut app = app(6);
        handle_key_event(key(KeyCode::Char('j')), &mut app);
        handle_key_event(key(KeyCode::Char('j')), &mut app);
        assert!(!app.follow_playback);

        let action = handle_key_event(key(KeyCode::Enter), &mut app);
        assert_eq!(action, KeyAction::Send(AudioCmd::Play(2)));
        assert!(app.follow_playback);
        assert_eq!(app.pending_follow_index, Some(2));
    }

    #[test]
    fn failed_play_leaves_the_cursor_on_the_requested_row() {
        let mut app = app(6);
        app.set_playback_handle(Arc::new(Mutex::new(PlaybackInfo::default())));
        for _ in 0..4 {
            handle_key_event(key(KeyCode::Char('j')), &mut app);
        }

        let action = handle_key_event(key(KeyCode::Enter), &mut app);
        assert_eq!(action, KeyAction::Send(AudioCmd::Play(4)));

        // The audio thread rejected the play: the snapshot still names track 0.
        app.sync_cursor();
        assert_eq!(app.selected, 4);
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &mut app),
            KeyAction::Send(AudioCmd::Play(4))
        );
    }

    #[test]
    fn enter_on_empty_list_sends_nothing() {
        let mut app = app(0);
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &mut app),
            KeyAction::Redraw
        );
    }

    #[test]
    fn space_follows_the_pause_icon() {
        let mut app = app(6);
        let h = Arc::new(Mutex::new(PlaybackInfo {
            index: 1,
            state: PlaybackState::Playing,
            ..PlaybackInfo::default()
        }));
        app.set_playback_handle(h.clone());

        assert_eq!(
            handle_key_event(key(KeyCode::Char(' ')), &mut app),
            KeyAction::Send(AudioCmd::Pause)
        );
        h.lock().unwrap().state = PlaybackState::Paused;
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' ')), &mut app),
            KeyAction::Send(AudioCmd::Resume)
        );
    }

    #[test]
    fn p_toggles_on_the_audio_thread() {
        let mut app = app(6);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('p')), &mut app),
            KeyAction::Send(AudioCmd::TogglePause)
        );
    }

    #[test]
    fn transport_keys_map_to_session_commands() {
        let mut app = app(6);
        let cases = [
            (KeyCode::Char('r'), AudioCmd::Replay),
            (KeyCode::Char('s'), AudioCmd::Stop),
            (KeyCode::Char('l'), AudioCmd::Next),
            (KeyCode::Right, AudioCmd::Next),
            (KeyCode::Char('h'), AudioCmd::Prev),
            (KeyCode::Left, AudioCmd::Prev),
        ];
        for (code, cmd) in cases {
            assert_eq!(handle_key_event(key(code), &mut app), KeyAction::Send(cmd));
        }
    }

    #[test]
    fn quit_keys() {
        let mut app = app(6);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &mut app),
            KeyAction::Quit
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mut app), KeyAction::Quit);
    }

    #[test]
    fn cursor_keys_wrap_and_stop_following() {
        let mut app = app(6);
        handle_key_event(key(KeyCode::Up), &mut app);
        assert_eq!(app.selected, 5);
        assert!(!app.follow_playback);

        handle_key_event(key(KeyCode::Char('c')), &mut app);
        assert!(app.follow_playback);
    }
}
