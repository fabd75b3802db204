use std::path::PathBuf;

use tempfile::tempdir;

use super::*;

fn store_in(dir: &tempfile::TempDir) -> PrefsStore {
    PrefsStore::new(dir.path().join(PREFS_FILE_NAME))
}

#[test]
fn load_missing_document_is_none() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.load_lenient(), None);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    let mut prefs = UserPreferences::default();
    prefs.file_dir_path = Some("/home/me/Music".to_string());
    prefs.colors.track_list.bg = Some("#1d1e1f".to_string());
    prefs.colors.control_panel.bg = Some("#131313".to_string());

    store.save(&prefs).unwrap();
    assert_eq!(store.load().unwrap(), Some(prefs));
}

#[test]
fn load_accepts_camel_case_wire_names() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r##"
fileDirPath = "/srv/music"

[colors.trackList]
bg = "#4c3f52"
font = "white"

[colors.controlPanel]
iconHighlight = "#9a69f5"
timelineBg = "#273b4a"
toggleEnabled = "white"
"##,
    )
    .unwrap();

    let prefs = store.load().unwrap().unwrap();
    assert_eq!(prefs.file_dir_path.as_deref(), Some("/srv/music"));
    assert_eq!(prefs.colors.track_list.bg.as_deref(), Some("#4c3f52"));
    assert_eq!(prefs.colors.track_list.font.as_deref(), Some("white"));
    assert_eq!(prefs.colors.track_list.highlight, None);
    assert_eq!(
        prefs.colors.control_panel.icon_highlight.as_deref(),
        Some("#9a69f5")
    );
    assert_eq!(
        prefs.colors.control_panel.timeline_bg.as_deref(),
        Some("#273b4a")
    );
    assert_eq!(
        prefs.colors.control_panel.toggle_enabled.as_deref(),
        Some("white")
    );
}

#[test]
fn load_accepts_legacy_song_list_spelling() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r##"
[colors.songList]
bg = "#1d1e1f"
scrollbar = "rgba(190, 190, 190, 0.25)"
"##,
    )
    .unwrap();

    let prefs = store.load().unwrap().unwrap();
    assert_eq!(prefs.colors.track_list.bg.as_deref(), Some("#1d1e1f"));
    assert_eq!(
        prefs.colors.track_list.scrollbar.as_deref(),
        Some("rgba(190, 190, 190, 0.25)")
    );
    // Legacy documents have no stored directory.
    assert_eq!(prefs.file_dir_path, None);
}

#[test]
fn saved_documents_use_the_track_list_spelling() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    let mut prefs = UserPreferences::default();
    prefs.colors.track_list.bg = Some("#111111".to_string());
    store.save(&prefs).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("trackList"), "raw was: {raw}");
    assert!(!raw.contains("songList"), "raw was: {raw}");
}

#[test]
fn malformed_document_fails_soft() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "this is not { toml").unwrap();

    assert!(matches!(store.load(), Err(PrefsError::Parse { .. })));
    assert_eq!(store.load_lenient(), None);
    assert_eq!(store.file_dir_path(), None);
}

#[test]
fn file_dir_path_returns_stored_value_unmodified() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.file_dir_path(), None);

    let mut prefs = UserPreferences::default();
    prefs.file_dir_path = Some("/mnt/tunes".to_string());
    store.save(&prefs).unwrap();
    assert_eq!(store.file_dir_path(), Some(PathBuf::from("/mnt/tunes")));
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let store = PrefsStore::new(dir.path().join("deep").join("down").join(PREFS_FILE_NAME));
    store.save(&UserPreferences::default()).unwrap();
    assert!(store.path().exists());
}
