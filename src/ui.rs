//! UI rendering helpers for the terminal user interface.
//!
//! Everything here colors itself from the resolved style variables owned by
//! the `ThemeService`; a variable that does not resolve to a terminal color
//! leaves the widget at its terminal default.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState,
    },
};

use crate::app::App;
use crate::config::UiSettings;
use crate::theme::{StyleVar, ThemeService};

/// Style with only the foreground taken from a variable.
fn fg(theme: &ThemeService, var: StyleVar) -> Style {
    match theme.terminal_color(var) {
        Some(c) => Style::default().fg(c),
        None => Style::default(),
    }
}

/// Style with only the background taken from a variable.
fn bg(theme: &ThemeService, var: StyleVar) -> Style {
    match theme.terminal_color(var) {
        Some(c) => Style::default().bg(c),
        None => Style::default(),
    }
}

/// Format a byte count the way file managers do.
fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

fn controls_text() -> String {
    [
        "[j/k] move",
        "[gg/G] top/bottom",
        "[t] theme",
        "[r] rescan",
        "[q] quit",
    ]
    .join(" | ")
}

/// Render the whole shell: header, track list, control panel, status line.
pub fn draw(f: &mut Frame, app: &App, theme: &ThemeService, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], ui, theme);
    draw_track_list(f, chunks[1], app, theme);
    draw_control_panel(f, chunks[2], app, theme);
    draw_status_line(f, chunks[3], app);
}

fn draw_header(f: &mut Frame, area: ratatui::layout::Rect, ui: &UiSettings, theme: &ThemeService) {
    let header = Paragraph::new(ui.header_text.clone())
        .alignment(Alignment::Center)
        .style(fg(theme, StyleVar::TrackListFontCol))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_track_list(f: &mut Frame, area: ratatui::layout::Rect, app: &App, theme: &ThemeService) {
    let base = bg(theme, StyleVar::TrackListBg).patch(fg(theme, StyleVar::TrackListFontCol));
    let highlight = bg(theme, StyleVar::TrackListBgHighlight).add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = if app.has_tracks() {
        app.tracks
            .iter()
            .map(|t| {
                ListItem::new(Line::from(vec![
                    Span::raw(t.name.clone()),
                    Span::styled(
                        format!("  ({})", format_size(t.len())),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]))
            })
            .collect()
    } else {
        vec![ListItem::new("  no tracks in this folder")]
    };

    let list = List::new(items)
        .style(base)
        .highlight_style(highlight)
        .highlight_symbol("> ")
        .block(Block::default().borders(Borders::ALL).title(" tracks "));

    let mut state = ListState::default().with_selected(if app.has_tracks() {
        Some(app.selected)
    } else {
        None
    });
    f.render_stateful_widget(list, area, &mut state);

    if app.tracks.len() > 1 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .style(fg(theme, StyleVar::TrackListScrollbar));
        let mut sb_state = ScrollbarState::new(app.tracks.len()).position(app.selected);
        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut sb_state,
        );
    }
}

fn draw_control_panel(f: &mut Frame, area: ratatui::layout::Rect, app: &App, theme: &ThemeService) {
    let panel_bg = bg(theme, StyleVar::ControlPanelBg);
    let icon = fg(theme, StyleVar::ControlPanelIcon);
    let icon_hl = fg(theme, StyleVar::ControlPanelIconHighlight);
    let font = fg(theme, StyleVar::ControlPanelFontCol);
    let toggle = fg(theme, StyleVar::ControlPanelButtonToggleEnabled);

    let track_text = match app.selected_track() {
        Some(t) => t.name.clone(),
        None => "-".to_string(),
    };

    let controls = Line::from(vec![
        Span::styled("⏮  ", icon),
        Span::styled("⏯  ", icon_hl),
        Span::styled("⏭   ", icon),
        Span::styled(track_text, font),
        Span::raw("   "),
        Span::styled(format!("[{}]", app.preset.name()), toggle),
    ]);

    // Decorative timeline: no playback position exists, so show the cursor's
    // position in the list instead.
    let width = area.width.saturating_sub(2) as usize;
    let filled = if app.tracks.len() > 1 {
        width * app.selected / (app.tracks.len() - 1)
    } else {
        0
    };
    let timeline = Line::from(vec![
        Span::styled(
            "━".repeat(filled),
            fg(theme, StyleVar::ControlPanelTimelineFill),
        ),
        Span::styled(
            "─".repeat(width.saturating_sub(filled)),
            fg(theme, StyleVar::ControlPanelTimelineBg),
        ),
    ]);

    let panel = Paragraph::new(vec![controls, timeline])
        .style(panel_bg)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(panel, area);
}

fn draw_status_line(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let status = match &app.status {
        Some(msg) => msg.clone(),
        None => controls_text(),
    };
    let line = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(line, area);
}
