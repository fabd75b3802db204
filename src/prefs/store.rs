use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use super::schema::UserPreferences;

/// File name of the preferences document, the fixed "key" everything reads
/// and writes.
pub const PREFS_FILE_NAME: &str = "user-preferences.toml";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed preferences in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Storage for the single preferences document.
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default platform location (or its env override).
    pub fn open_default() -> Self {
        Self::new(resolve_prefs_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document. `Ok(None)` when nothing has been persisted yet.
    pub fn load(&self) -> Result<Option<UserPreferences>, PrefsError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PrefsError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let prefs = toml::from_str(&raw).map_err(|e| PrefsError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(prefs))
    }

    /// Read the document, treating anything unreadable or malformed as "no
    /// preferences". The UI must come up with defaults rather than crash on
    /// a bad blob.
    pub fn load_lenient(&self) -> Option<UserPreferences> {
        match self.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("ignoring persisted preferences: {e}");
                None
            }
        }
    }

    /// Persist the document, creating parent directories as needed.
    pub fn save(&self, prefs: &UserPreferences) -> Result<(), PrefsError> {
        let raw = toml::to_string_pretty(prefs)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(&self.path, raw).map_err(|e| PrefsError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    /// The persisted last-used directory, unmodified, or `None` when unset
    /// or when the document is unparseable.
    pub fn file_dir_path(&self) -> Option<PathBuf> {
        self.load_lenient()?.file_dir_path.map(PathBuf::from)
    }
}

/// Resolve the preferences path from `ORPHEUS_PREFS_PATH` or the XDG data
/// directory defaults.
pub fn resolve_prefs_path() -> PathBuf {
    if let Some(p) = std::env::var_os("ORPHEUS_PREFS_PATH") {
        return PathBuf::from(p);
    }
    default_prefs_path().unwrap_or_else(|| PathBuf::from(PREFS_FILE_NAME))
}

/// Compute the default path under `$XDG_DATA_HOME/orpheus/` or
/// `~/.local/share/orpheus/` when `XDG_DATA_HOME` is not set.
pub fn default_prefs_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = std::env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|d| d.join("orpheus").join(PREFS_FILE_NAME))
}
