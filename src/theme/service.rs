use std::collections::BTreeMap;

use ratatui::style::Color;
use tracing::debug;

use crate::prefs::{ColorPreferences, PrefsStore};

use super::color::parse_color;
use super::mapping::style_entries;
use super::presets::ThemePreset;
use super::vars::StyleVar;

/// Owns the current value of every style variable.
///
/// The service is the style application target: preference blocks merge into
/// it, the presentation layer reads resolved values out of it. No rendering
/// environment is needed to observe either side.
pub struct ThemeService {
    vars: BTreeMap<StyleVar, String>,
}

impl ThemeService {
    /// A service seeded with the default preset, so every variable has a
    /// value before any preferences are applied.
    pub fn new() -> Self {
        let mut service = Self::empty();
        service.apply(&ThemePreset::Default.colors());
        service
    }

    /// A service with no variables set. Mostly useful for observing exactly
    /// what one `apply` call touches.
    pub fn empty() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Merge a (possibly partial) color block into the current state.
    ///
    /// Set fields override their variable; absent fields leave the current
    /// value in place. A missing field is not an error.
    pub fn apply(&mut self, colors: &ColorPreferences) {
        for (var, value) in style_entries(colors) {
            if let Some(value) = value {
                self.vars.insert(var, value.to_string());
            }
        }
    }

    /// Read the persisted preferences and apply their color blocks.
    ///
    /// No persisted document is a no-op; a malformed one is logged by the
    /// store and skipped here. Either way the UI comes up.
    pub fn load_and_apply(&mut self, store: &PrefsStore) {
        let Some(prefs) = store.load_lenient() else {
            debug!("no persisted preferences, keeping current theme");
            return;
        };
        self.apply(&prefs.colors);
    }

    /// The current raw value of a variable, if set.
    pub fn get(&self, var: StyleVar) -> Option<&str> {
        self.vars.get(&var).map(String::as_str)
    }

    /// The current value of a variable resolved to a terminal color.
    ///
    /// Unset or unparseable values are `None`; widgets then keep their
    /// terminal defaults.
    pub fn terminal_color(&self, var: StyleVar) -> Option<Color> {
        self.get(var).and_then(parse_color)
    }

    /// Snapshot of all currently-set variables, for diffing in tests.
    pub fn snapshot(&self) -> BTreeMap<StyleVar, String> {
        self.vars.clone()
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new()
    }
}
