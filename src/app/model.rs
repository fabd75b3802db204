use std::path::PathBuf;

use crate::library::TrackEntry;
use crate::theme::ThemePreset;

/// The main application model.
pub struct App {
    pub tracks: Vec<TrackEntry>,
    pub selected: usize,
    pub current_dir: Option<PathBuf>,
    pub preset: ThemePreset,
    pub status: Option<String>,
}

impl App {
    /// Create a new `App` with the provided list of `tracks`.
    pub fn new(tracks: Vec<TrackEntry>) -> Self {
        Self {
            tracks,
            selected: 0,
            current_dir: None,
            preset: ThemePreset::Default,
            status: None,
        }
    }

    /// Replace the track list, keeping the cursor in bounds.
    pub fn set_tracks(&mut self, tracks: Vec<TrackEntry>) {
        self.tracks = tracks;
        if self.selected >= self.tracks.len() {
            self.selected = self.tracks.len().saturating_sub(1);
        }
    }

    /// Record the current directory in the app state.
    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = Some(dir);
    }

    /// Set the transient status line shown under the control panel.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Return true if the listing contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Move selection to the next track, wrapping around.
    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.tracks.len();
    }

    /// Move selection to the previous track, wrapping around.
    pub fn prev(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.tracks.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Jump to the first track.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last track.
    pub fn select_last(&mut self) {
        self.selected = self.tracks.len().saturating_sub(1);
    }

    /// The currently selected entry, if any.
    pub fn selected_track(&self) -> Option<&TrackEntry> {
        self.tracks.get(self.selected)
    }
}
