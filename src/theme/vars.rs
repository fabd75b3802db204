/// The named style variables the presentation layer colors itself from.
///
/// This is the whole vocabulary; preference fields map onto these and
/// nothing else. The names are the later-schema spellings (`--track-list-*`;
/// older documents said `--song-list-*` for the same four variables).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum StyleVar {
    TrackListBg,
    TrackListBgHighlight,
    TrackListFontCol,
    TrackListScrollbar,
    ControlPanelBg,
    ControlPanelIcon,
    ControlPanelIconHighlight,
    ControlPanelTimelineBg,
    ControlPanelTimelineFill,
    ControlPanelFontCol,
    ControlPanelButtonToggleEnabled,
}

impl StyleVar {
    pub const ALL: [StyleVar; 11] = [
        StyleVar::TrackListBg,
        StyleVar::TrackListBgHighlight,
        StyleVar::TrackListFontCol,
        StyleVar::TrackListScrollbar,
        StyleVar::ControlPanelBg,
        StyleVar::ControlPanelIcon,
        StyleVar::ControlPanelIconHighlight,
        StyleVar::ControlPanelTimelineBg,
        StyleVar::ControlPanelTimelineFill,
        StyleVar::ControlPanelFontCol,
        StyleVar::ControlPanelButtonToggleEnabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleVar::TrackListBg => "--track-list-bg",
            StyleVar::TrackListBgHighlight => "--track-list-bg-highlight",
            StyleVar::TrackListFontCol => "--track-list-font-col",
            StyleVar::TrackListScrollbar => "--track-list-scrollbar",
            StyleVar::ControlPanelBg => "--control-panel-bg",
            StyleVar::ControlPanelIcon => "--control-panel-icon",
            StyleVar::ControlPanelIconHighlight => "--control-panel-icon-highlight",
            StyleVar::ControlPanelTimelineBg => "--control-panel-timeline-bg",
            StyleVar::ControlPanelTimelineFill => "--control-panel-timeline-fill",
            StyleVar::ControlPanelFontCol => "--control-panel-font-col",
            StyleVar::ControlPanelButtonToggleEnabled => {
                "--control-panel-button-toggle-enabled"
            }
        }
    }
}

impl std::fmt::Display for StyleVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
