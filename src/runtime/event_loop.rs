use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::warn;

use crate::app::App;
use crate::config::Settings;
use crate::library::list_tracks_lenient;
use crate::prefs::PrefsStore;
use crate::theme::ThemeService;
use crate::ui;

pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    settings: &Settings,
    app: &mut App,
    theme: &mut ThemeService,
    store: &PrefsStore,
) -> Result<(), Box<dyn std::error::Error>>
where
    B::Error: 'static,
{
    let tick = Duration::from_millis(settings.ui.tick_ms);
    let mut pending_gg = false;

    loop {
        terminal.draw(|f| ui::draw(f, app, theme, &settings.ui))?;

        if !event::poll(tick)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if handle_key(key, app, theme, store, &mut pending_gg) {
            return Ok(());
        }
    }
}

/// React to one key event. Returns true when the app should quit.
fn handle_key(
    key: KeyEvent,
    app: &mut App,
    theme: &mut ThemeService,
    store: &PrefsStore,
    pending_gg: &mut bool,
) -> bool {
    // Some terminals also report repeat and release events; only presses
    // count, otherwise one keystroke acts twice.
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => {
            *pending_gg = false;
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *pending_gg = false;
            app.prev();
        }
        KeyCode::Char('g') => {
            if *pending_gg {
                *pending_gg = false;
                app.select_first();
            } else {
                *pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            *pending_gg = false;
            app.select_last();
        }
        KeyCode::Char('t') => {
            *pending_gg = false;
            cycle_theme(app, theme, store);
        }
        KeyCode::Char('r') => {
            *pending_gg = false;
            app.set_tracks(list_tracks_lenient(app.current_dir.as_deref()));
            app.set_status(format!("{} tracks", app.tracks.len()));
        }
        _ => {
            *pending_gg = false;
        }
    }

    false
}

/// Switch to the next preset, apply it, and persist it as the user's color
/// choice. The persisted directory survives the rewrite.
fn cycle_theme(app: &mut App, theme: &mut ThemeService, store: &PrefsStore) {
    app.preset = app.preset.next();
    let colors = app.preset.colors();
    theme.apply(&colors);

    let mut prefs = store.load_lenient().unwrap_or_default();
    if let Some(dir) = &app.current_dir {
        prefs.file_dir_path = Some(dir.display().to_string());
    }
    prefs.colors = colors;
    if let Err(e) = store.save(&prefs) {
        warn!("failed to persist theme choice: {e}");
        app.set_status(format!("theme: {} (not saved)", app.preset.name()));
    } else {
        app.set_status(format!("theme: {}", app.preset.name()));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    use crate::library::TrackEntry;
    use crate::prefs::UserPreferences;
    use crate::theme::{StyleVar, ThemePreset};

    use super::*;

    fn entry(name: &str) -> TrackEntry {
        TrackEntry {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> PrefsStore {
        PrefsStore::new(dir.path().join("user-preferences.toml"))
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn release(c: char) -> KeyEvent {
        KeyEvent::new_with_kind(
            KeyCode::Char(c),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )
    }

    #[test]
    fn press_events_drive_the_app() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let mut app = App::new(vec![entry("a"), entry("b")]);
        let mut theme = ThemeService::new();
        let mut pending_gg = false;

        assert!(!handle_key(press('j'), &mut app, &mut theme, &store, &mut pending_gg));
        assert_eq!(app.selected, 1);

        assert!(handle_key(press('q'), &mut app, &mut theme, &store, &mut pending_gg));
    }

    #[test]
    fn non_press_events_are_ignored() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let mut app = App::new(vec![entry("a"), entry("b")]);
        let mut theme = ThemeService::new();
        let mut pending_gg = false;

        handle_key(release('j'), &mut app, &mut theme, &store, &mut pending_gg);
        assert_eq!(app.selected, 0);

        // A released 't' must neither advance the preset nor write the store.
        handle_key(release('t'), &mut app, &mut theme, &store, &mut pending_gg);
        assert_eq!(app.preset, ThemePreset::Default);
        assert_eq!(store.load().unwrap(), None);

        // Releases must not resolve a pending `gg` either.
        handle_key(press('j'), &mut app, &mut theme, &store, &mut pending_gg);
        handle_key(press('g'), &mut app, &mut theme, &store, &mut pending_gg);
        handle_key(release('g'), &mut app, &mut theme, &store, &mut pending_gg);
        assert!(pending_gg);
        handle_key(press('g'), &mut app, &mut theme, &store, &mut pending_gg);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn cycle_theme_advances_applies_and_persists() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let mut app = App::new(Vec::new());
        app.set_current_dir(PathBuf::from("/new/music"));
        let mut theme = ThemeService::new();

        cycle_theme(&mut app, &mut theme, &store);

        assert_eq!(app.preset, ThemePreset::Midnight);
        assert_eq!(theme.get(StyleVar::TrackListBg), Some("#1d1e1f"));
        assert_eq!(theme.get(StyleVar::ControlPanelBg), Some("#131313"));

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.colors, ThemePreset::Midnight.colors());
        assert_eq!(saved.file_dir_path.as_deref(), Some("/new/music"));
    }

    #[test]
    fn cycle_theme_keeps_the_stored_dir_when_the_app_has_none() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut prefs = UserPreferences::default();
        prefs.file_dir_path = Some("/old/music".to_string());
        store.save(&prefs).unwrap();

        let mut app = App::new(Vec::new());
        let mut theme = ThemeService::new();
        cycle_theme(&mut app, &mut theme, &store);

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.file_dir_path.as_deref(), Some("/old/music"));
        assert_eq!(saved.colors, ThemePreset::Midnight.colors());
    }
}
