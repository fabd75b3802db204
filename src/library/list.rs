use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

use super::model::TrackEntry;

/// A listing request that could not be satisfied.
///
/// Callers get enough to tell "the folder is gone" apart from "a file inside
/// it could not be read"; how to present that is their call.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("directory not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// List every file directly inside `dir` and load its full contents.
///
/// `None` returns an empty list immediately, without touching the
/// filesystem. Subdirectories are skipped, not descended into; there is no
/// extension filtering and no ordering guarantee beyond what the filesystem
/// enumeration yields.
///
/// Whole files are loaded into memory per entry, so practical directory size
/// is bounded by available memory.
pub fn list_tracks(dir: Option<&Path>) -> Result<Vec<TrackEntry>, ListError> {
    let Some(dir) = dir else {
        return Ok(Vec::new());
    };

    let mut entries: Vec<TrackEntry> = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop"));
            ListError::from_io(&path, source)
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let data =
            std::fs::read(path).map_err(|e| ListError::from_io(path, e))?;
        entries.push(TrackEntry { name, data });
    }

    Ok(entries)
}

/// Listing with the shipped failure policy: any error is logged and becomes
/// an empty list. Callers of this variant cannot tell an empty directory
/// from a failed read; use [`list_tracks`] when that distinction matters.
pub fn list_tracks_lenient(dir: Option<&Path>) -> Vec<TrackEntry> {
    match list_tracks(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("track listing failed: {e}");
            Vec::new()
        }
    }
}
