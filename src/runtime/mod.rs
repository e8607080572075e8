use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioPlayer, PlayerOptions};
use crate::library::resolve_tracks;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, config_problem) = settings::load_settings();

    // The first argument overrides the media directory.
    if let Some(dir) = env::args().nth(1) {
        settings.library.media_dir = dir;
    }

    let log_path = logging::init(&settings.logging);
    if let Some(problem) = config_problem {
        warn!("{problem}");
    }
    if let Some(p) = &log_path {
        info!("logging to {}", p.display());
    }

    let tracks = resolve_tracks(&settings.library);
    let audio_player = AudioPlayer::new(tracks.clone(), PlayerOptions::from_settings(&settings));
    let mut app = App::new(tracks);

    app.set_media_dir(settings.library.media_dir.clone());
    app.set_playback_handle(audio_player.playback_handle());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio_player);

    audio_player.quit();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
