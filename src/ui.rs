//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::App;
use crate::audio::{PlaybackInfo, PlaybackState};
use crate::config::UiSettings;

const CONTROLS: [(&str, &str); 8] = [
    ("j/k", "up/down"),
    ("enter", "play selected"),
    ("space/p", "pause/resume"),
    ("r", "play current"),
    ("s", "stop"),
    ("h/l", "prev/next song"),
    ("c", "follow cursor"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Build the status line from the playback snapshot.
fn status_text(app: &App, info: &PlaybackInfo, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = match info.state {
        PlaybackState::Idle => "Stopped",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    };
    parts.push(state.to_string());

    if let Some(track) = app.now_playing() {
        if ui.show_elapsed {
            parts.push(format!("{} [{}]", track.title, format_mmss(info.elapsed)));
        } else {
            parts.push(track.title.clone());
        }
    } else if let Some(track) = app.tracks.get(info.index) {
        parts.push(format!("Next up: {}", track.title));
    }

    if let Some(err) = &info.last_error {
        parts.push(format!("Error: {}", err));
    }

    parts.join(" • ")
}

/// Marker drawn in front of the session's current track.
fn row_marker(is_current: bool, state: PlaybackState) -> &'static str {
    if !is_current {
        return "  ";
    }
    match state {
        PlaybackState::Playing => "♪ ",
        PlaybackState::Paused => "‖ ",
        PlaybackState::Idle => "· ",
    }
}

fn button(icon: &str, label: &str) -> Span<'static> {
    Span::raw(format!("  {} {}  ", icon, label))
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let info = app.playback();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tinydeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Transport bar: the pause button flips to "resume" while paused.
    let pause_button = if app.pause_icon_shows_resume() {
        button("⏯", "resume")
    } else {
        button("⏸", "pause")
    };
    let transport = Paragraph::new(Line::from(vec![
        pause_button,
        button("▶", "play"),
        button("⏹", "stop"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::bordered().title(" transport ").magenta());
    frame.render_widget(transport, chunks[1]);

    // Track list
    {
        let items: Vec<ListItem> = app
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let current = app.is_current(i);
                let text = format!("{}{}", row_marker(current, info.state), track.title);
                if current {
                    ListItem::new(text).style(Style::default().add_modifier(Modifier::BOLD))
                } else {
                    ListItem::new(text)
                }
            })
            .collect();

        let title = match &app.media_dir {
            Some(dir) => format!(" tracks · {} ", dir),
            None => " tracks ".to_string(),
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if app.has_tracks() {
            state.select(Some(app.selected));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Skip bar
    let skip = Paragraph::new(Line::from(vec![
        button("⏮", "previous"),
        button("⏭", "next"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::bordered().title(" skip ").cyan());
    frame.render_widget(skip, chunks[3]);

    let status = Paragraph::new(status_text(app, &info, ui_settings))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[4]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}
