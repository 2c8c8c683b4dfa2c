//! Vietnamese/English localization.
//!
//! UI strings are looked up by key in a static bilingual table. Per-row
//! catalog text (item names, disposal tips) carries both languages inline as
//! [`LocalizedText`] and never goes through the key table.

mod format;
mod table;


use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub use format::{format_number, format_time_ago};
pub use table::TRANSLATIONS;

// =============================================================================
// Language
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    #[default]
    Vi,
    En,
}

impl Lang {
    pub fn toggled(self) -> Self {
        match self {
            Lang::Vi => Lang::En,
            Lang::En => Lang::Vi,
        }
    }

    /// Short code shown on the header toggle button.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Vi => "VI",
            Lang::En => "EN",
        }
    }
}

/// A string carried in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub vi: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(vi: &'static str, en: &'static str) -> Self {
        Self { vi, en }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Vi => self.vi,
            Lang::En => self.en,
        }
    }
}

// =============================================================================
// Resource
// =============================================================================

/// A string table maps localization keys to text for a single language.
pub type StringTable = BTreeMap<&'static str, &'static str>;

/// Active language plus one string table per language.
#[derive(Resource, Debug, Clone)]
pub struct LocalizationState {
    pub lang: Lang,
    pub tables: BTreeMap<Lang, StringTable>,
}

impl Default for LocalizationState {
    fn default() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(
            Lang::Vi,
            TRANSLATIONS.iter().map(|(k, vi, _)| (*k, *vi)).collect(),
        );
        tables.insert(
            Lang::En,
            TRANSLATIONS.iter().map(|(k, _, en)| (*k, *en)).collect(),
        );
        Self {
            lang: Lang::default(),
            tables,
        }
    }
}

impl LocalizationState {
    /// Look up a key in the active language, falling back to the key itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(text) => text,
            None => {
                debug!("missing translation key: {}", key);
                key
            }
        }
    }

    /// Look up a key, returning `None` if it is not in the table.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.tables
            .get(&self.lang)
            .and_then(|table| table.get(key).copied())
    }

    pub fn toggle(&mut self) {
        self.lang = self.lang.toggled();
        info!("language switched to {}", self.lang.code());
    }

    /// Pick the active-language variant of inline text.
    pub fn pick(&self, text: &LocalizedText) -> &'static str {
        text.get(self.lang)
    }

    pub fn time_ago(&self, elapsed_ms: u64) -> String {
        format_time_ago(elapsed_ms, self.lang)
    }
}

// =============================================================================
// Plugin
// =============================================================================

/// Flip the active language.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ToggleLanguage;

pub fn apply_language_toggle(
    mut requests: EventReader<ToggleLanguage>,
    mut state: ResMut<LocalizationState>,
) {
    for _ in requests.read() {
        state.toggle();
    }
}

pub struct LocalizationPlugin;

impl Plugin for LocalizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocalizationState>()
            .add_event::<ToggleLanguage>()
            .add_systems(
                Update,
                apply_language_toggle.in_set(crate::SimulationSet::Input),
            );
    }
}
