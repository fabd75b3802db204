use crate::prefs::{ColorPreferences, ControlPanelColors, TrackListColors};

/// The built-in theme presets, selectable from the settings surface.
///
/// A preset is nothing special to the applier: its color block is applied
/// exactly like a hand-chosen set would be.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThemePreset {
    Default,
    Midnight,
    Autumn,
    Navy,
    Light,
    Embers,
}

fn c(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 6] = [
        ThemePreset::Default,
        ThemePreset::Midnight,
        ThemePreset::Autumn,
        ThemePreset::Navy,
        ThemePreset::Light,
        ThemePreset::Embers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemePreset::Default => "default",
            ThemePreset::Midnight => "midnight",
            ThemePreset::Autumn => "autumn",
            ThemePreset::Navy => "navy",
            ThemePreset::Light => "light",
            ThemePreset::Embers => "embers",
        }
    }

    /// The next preset in cycling order, wrapping around.
    pub fn next(self) -> Self {
        let pos = Self::ALL
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default();
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// The preset's complete color block.
    pub fn colors(self) -> ColorPreferences {
        match self {
            ThemePreset::Default => ColorPreferences {
                track_list: TrackListColors {
                    bg: c("#4c3f52"),
                    highlight: c("#5f4f67"),
                    font: c("white"),
                    scrollbar: c("rgba(0, 0, 0, 0.25)"),
                },
                control_panel: ControlPanelColors {
                    bg: c("linear-gradient(to bottom, #582da7, #d76d77, #ffaf7b)"),
                    icon: c("#273b4a"),
                    icon_highlight: c("#9a69f5"),
                    timeline_bg: c("#273b4a"),
                    timeline_filled: c("#9a69f5"),
                    font: c("#273b4a"),
                    toggle_enabled: c("white"),
                },
            },
            ThemePreset::Midnight => ColorPreferences {
                track_list: TrackListColors {
                    bg: c("#1d1e1f"),
                    highlight: c("#343436"),
                    font: c("whitesmoke"),
                    scrollbar: c("rgba(190, 190, 190, 0.25)"),
                },
                control_panel: ControlPanelColors {
                    bg: c("#131313"),
                    icon: c("#596669"),
                    icon_highlight: c("#b4b3b3"),
                    timeline_bg: c("#273b4a"),
                    timeline_filled: c("#b4b3b3"),
                    font: c("#596669"),
                    toggle_enabled: c("white"),
                },
            },
            ThemePreset::Autumn => ColorPreferences {
                track_list: TrackListColors {
                    bg: c("#1e3226"),
                    highlight: c("#2f4638"),
                    font: c("#fbedc3"),
                    scrollbar: c("rgba(190, 190, 190, 0.25)"),
                },
                control_panel: ControlPanelColors {
                    bg: c("linear-gradient(to bottom, #c27e35, #76290b)"),
                    icon: c("#1e3226"),
                    icon_highlight: c("#fbdec3"),
                    timeline_bg: c("#1e3226"),
                    timeline_filled: c("#76290b"),
                    font: c("#1e3226"),
                    // Shipped without the leading '#'; kept verbatim.
                    toggle_enabled: c("fbdec3"),
                },
            },
            ThemePreset::Navy => ColorPreferences {
                track_list: TrackListColors {
                    bg: c("#2f4156"),
                    highlight: c("#3d546e"),
                    font: c("#f5efeb"),
                    scrollbar: c("rgba(190, 190, 190, 0.25)"),
                },
                control_panel: ControlPanelColors {
                    bg: c("#f5efeb"),
                    icon: c("#567c8d"),
                    icon_highlight: c("#c8d9e6"),
                    timeline_bg: c("#2f4156"),
                    timeline_filled: c("#567c8d"),
                    font: c("#567c8d"),
                    toggle_enabled: c("#2f4156"),
                },
            },
            ThemePreset::Light => ColorPreferences {
                track_list: TrackListColors {
                    bg: c("#f5f5f5"),
                    highlight: c("#e2e2e2"),
                    font: c("#2b2b2b"),
                    scrollbar: c("rgba(0, 0, 0, 0.15)"),
                },
                control_panel: ControlPanelColors {
                    bg: c("#ffffff"),
                    icon: c("#4a4a4a"),
                    icon_highlight: c("#7c5cff"),
                    timeline_bg: c("#d9d9d9"),
                    timeline_filled: c("#7c5cff"),
                    font: c("#4a4a4a"),
                    toggle_enabled: c("#2b2b2b"),
                },
            },
            ThemePreset::Embers => ColorPreferences {
                track_list: TrackListColors {
                    bg: c("#191210"),
                    highlight: c("#2a1d18"),
                    font: c("#f3e3d3"),
                    scrollbar: c("rgba(190, 190, 190, 0.25)"),
                },
                control_panel: ControlPanelColors {
                    bg: c("linear-gradient(to bottom, #3b1d12, #120b08)"),
                    icon: c("#8a5a44"),
                    icon_highlight: c("#ff6b35"),
                    timeline_bg: c("#3b1d12"),
                    timeline_filled: c("#ff6b35"),
                    font: c("#e0b894"),
                    toggle_enabled: c("#ffd9a0"),
                },
            },
        }
    }
}
