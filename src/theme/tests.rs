use ratatui::style::Color;
use tempfile::tempdir;

use crate::prefs::{ControlPanelColors, PrefsStore, UserPreferences};

use super::*;

#[test]
fn midnight_preset_sets_the_documented_backgrounds_exactly() {
    let mut theme = ThemeService::empty();
    theme.apply(&ThemePreset::Midnight.colors());

    assert_eq!(theme.get(StyleVar::TrackListBg), Some("#1d1e1f"));
    assert_eq!(theme.get(StyleVar::ControlPanelBg), Some("#131313"));
}

#[test]
fn every_preset_fills_every_variable() {
    for preset in ThemePreset::ALL {
        let mut theme = ThemeService::empty();
        theme.apply(&preset.colors());
        for var in StyleVar::ALL {
            assert!(
                theme.get(var).is_some(),
                "{} left {var} unset",
                preset.name()
            );
        }
    }
}

#[test]
fn partial_block_only_touches_the_named_variable() {
    let mut theme = ThemeService::new();
    let before = theme.snapshot();

    let partial = crate::prefs::ColorPreferences {
        control_panel: ControlPanelColors {
            bg: Some("#101010".to_string()),
            ..ControlPanelColors::default()
        },
        ..crate::prefs::ColorPreferences::default()
    };
    theme.apply(&partial);

    let after = theme.snapshot();
    assert_eq!(after.get(&StyleVar::ControlPanelBg).map(String::as_str), Some("#101010"));
    for var in StyleVar::ALL {
        if var == StyleVar::ControlPanelBg {
            continue;
        }
        assert_eq!(before.get(&var), after.get(&var), "{var} changed");
    }
}

#[test]
fn load_and_apply_without_persisted_document_is_a_no_op() {
    let dir = tempdir().unwrap();
    let store = PrefsStore::new(dir.path().join("user-preferences.toml"));

    let mut theme = ThemeService::new();
    let before = theme.snapshot();
    theme.load_and_apply(&store);
    assert_eq!(before, theme.snapshot());
}

#[test]
fn load_and_apply_with_malformed_document_is_a_no_op() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("user-preferences.toml");
    std::fs::write(&path, "not = [ valid").unwrap();
    let store = PrefsStore::new(path);

    let mut theme = ThemeService::new();
    let before = theme.snapshot();
    theme.load_and_apply(&store);
    assert_eq!(before, theme.snapshot());
}

#[test]
fn load_and_apply_merges_the_persisted_block() {
    let dir = tempdir().unwrap();
    let store = PrefsStore::new(dir.path().join("user-preferences.toml"));

    let mut prefs = UserPreferences::default();
    prefs.colors = ThemePreset::Navy.colors();
    store.save(&prefs).unwrap();

    let mut theme = ThemeService::new();
    theme.load_and_apply(&store);
    assert_eq!(theme.get(StyleVar::TrackListBg), Some("#2f4156"));
    assert_eq!(theme.get(StyleVar::ControlPanelBg), Some("#f5efeb"));
}

#[test]
fn preset_cycling_visits_all_and_wraps() {
    let mut seen = Vec::new();
    let mut preset = ThemePreset::Default;
    for _ in 0..ThemePreset::ALL.len() {
        seen.push(preset);
        preset = preset.next();
    }
    assert_eq!(seen, ThemePreset::ALL.to_vec());
    assert_eq!(preset, ThemePreset::Default);
}

#[test]
fn parse_color_handles_hex_forms() {
    assert_eq!(parse_color("#1d1e1f"), Some(Color::Rgb(0x1d, 0x1e, 0x1f)));
    assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_color("  #131313  "), Some(Color::Rgb(0x13, 0x13, 0x13)));
    assert_eq!(parse_color("#12345"), None);
}

#[test]
fn parse_color_handles_rgb_calls_and_drops_alpha() {
    assert_eq!(
        parse_color("rgba(190, 190, 190, 0.25)"),
        Some(Color::Rgb(190, 190, 190))
    );
    assert_eq!(parse_color("rgb(0, 128, 255)"), Some(Color::Rgb(0, 128, 255)));
    assert_eq!(parse_color("rgb(oops)"), None);
}

#[test]
fn parse_color_handles_names_and_gradients() {
    assert_eq!(parse_color("white"), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_color("whitesmoke"), Some(Color::Rgb(245, 245, 245)));
    assert_eq!(
        parse_color("linear-gradient(to bottom, #582da7, #d76d77, #ffaf7b)"),
        Some(Color::Rgb(0x58, 0x2d, 0xa7))
    );
    assert_eq!(parse_color("fbdec3"), None);
    assert_eq!(parse_color("conic-gradient(red)"), None);
}

#[test]
fn terminal_color_resolves_through_the_service() {
    let mut theme = ThemeService::empty();
    theme.apply(&ThemePreset::Default.colors());

    // The default control panel background is a gradient; the terminal gets
    // its first stop.
    assert_eq!(
        theme.terminal_color(StyleVar::ControlPanelBg),
        Some(Color::Rgb(0x58, 0x2d, 0xa7))
    );
    assert_eq!(
        theme.terminal_color(StyleVar::TrackListFontCol),
        Some(Color::Rgb(255, 255, 255))
    );
    assert_eq!(ThemeService::empty().terminal_color(StyleVar::TrackListBg), None);
}
