use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/orpheus/config.toml` or `~/.config/orpheus/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ORPHEUS__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
///
/// These are shell settings; the user's color and directory choices live in
/// the separate preferences document (see `crate::prefs`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub storage: StorageSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Input poll interval for the event loop (milliseconds).
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ orpheus ~ ".to_string(),
            tick_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where the preferences document lives. Overrides the
    /// `ORPHEUS_PREFS_PATH` / XDG resolution when set.
    pub prefs_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether a directory passed on the command line must exist at startup
    /// for the shell to use it; when false, a missing directory simply lists
    /// as empty.
    pub require_dir: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self { require_dir: false }
    }
}
