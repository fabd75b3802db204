use serde::{Deserialize, Serialize};

/// The persisted preferences document.
///
/// All fields are optional; a partial document is valid and only overrides
/// what it names. Earlier snapshots of this shape used `songList` where the
/// current one says `trackList`, so that spelling is accepted on read and
/// normalized on write. There is no other versioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_dir_path: Option<String>,
    pub colors: ColorPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorPreferences {
    #[serde(alias = "songList")]
    pub track_list: TrackListColors,
    pub control_panel: ControlPanelColors,
}

/// Colors for the track list region. Hex, a CSS color name, or a gradient
/// expression; the consumer decides what it can render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackListColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollbar: Option<String>,
}

/// Colors for the playback control panel region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlPanelColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_filled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_enabled: Option<String>,
}
