use crate::prefs::ColorPreferences;

use super::vars::StyleVar;

/// The static association between preference fields and style variables.
///
/// One row per variable, checked by the compiler against [`StyleVar::ALL`]'s
/// length; adding a variable without wiring its preference field will not
/// build. Unset fields come through as `None` and are skipped by the
/// applier.
pub(super) fn style_entries(
    colors: &ColorPreferences,
) -> [(StyleVar, Option<&str>); StyleVar::ALL.len()] {
    let list = &colors.track_list;
    let panel = &colors.control_panel;
    [
        (StyleVar::TrackListBg, list.bg.as_deref()),
        (StyleVar::TrackListBgHighlight, list.highlight.as_deref()),
        (StyleVar::TrackListFontCol, list.font.as_deref()),
        (StyleVar::TrackListScrollbar, list.scrollbar.as_deref()),
        (StyleVar::ControlPanelBg, panel.bg.as_deref()),
        (StyleVar::ControlPanelIcon, panel.icon.as_deref()),
        (
            StyleVar::ControlPanelIconHighlight,
            panel.icon_highlight.as_deref(),
        ),
        (
            StyleVar::ControlPanelTimelineBg,
            panel.timeline_bg.as_deref(),
        ),
        (
            StyleVar::ControlPanelTimelineFill,
            panel.timeline_filled.as_deref(),
        ),
        (StyleVar::ControlPanelFontCol, panel.font.as_deref()),
        (
            StyleVar::ControlPanelButtonToggleEnabled,
            panel.toggle_enabled.as_deref(),
        ),
    ]
}
