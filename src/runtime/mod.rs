use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::library::{ArgsPicker, DirectoryPicker, list_tracks_lenient};
use crate::prefs::{PrefsStore, resolve_prefs_path};
use crate::theme::ThemeService;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let store = match &settings.storage.prefs_path {
        Some(p) => PrefsStore::new(PathBuf::from(p)),
        None => PrefsStore::new(resolve_prefs_path()),
    };

    let mut theme = ThemeService::new();
    theme.load_and_apply(&store);

    // A CLI argument acts as the picked directory; cancelling (no argument)
    // falls back to the last-used folder from the preferences document.
    let picker = ArgsPicker::from_env_args();
    let dir = picker.pick_directory().or_else(|| store.file_dir_path());

    if settings.library.require_dir {
        if let Some(d) = &dir {
            if !d.is_dir() {
                return Err(format!("not a directory: {}", d.display()).into());
            }
        }
    }

    let tracks = list_tracks_lenient(dir.as_deref());
    let mut app = App::new(tracks);
    if let Some(d) = dir {
        app.set_current_dir(d);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut theme, &store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
