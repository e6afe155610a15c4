use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";
pub const TRANSITION_KEY: &str = "transitionDirection";

pub const DEFAULT_DIRECTION: &str = "slide-right";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn flip(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    // doubles as the body class the palettes key off
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    pub theme: Theme,
    pub transition_direction: String,
    pub sidebar_open: bool,
}

// One instance for the whole session, held in a root-provided signal.
// Views read snapshots; every mutation goes through the operations here,
// which persist before the signal write propagates.
pub struct PreferenceStore<S> {
    prefs: Preferences,
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    // missing or unparseable values silently fall back to the defaults
    pub fn load(store: S) -> Self {
        let theme = store.get(THEME_KEY).unwrap_or(Theme::Dark);
        let transition_direction = store
            .get(TRANSITION_KEY)
            .unwrap_or_else(|_| String::from(DEFAULT_DIRECTION));

        PreferenceStore {
            prefs: Preferences {
                theme,
                transition_direction,
                sidebar_open: false,
            },
            store,
        }
    }

    pub fn get(&self) -> Preferences {
        self.prefs.clone()
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.theme = self.prefs.theme.flip();
        self.store.set(THEME_KEY, self.prefs.theme);

        debug!("theme set to {:?}", self.prefs.theme);

        self.prefs.theme
    }

    pub fn set_transition_direction(&mut self, direction: &str) {
        self.prefs.transition_direction = direction.to_owned();
        self.store.set(TRANSITION_KEY, direction);
    }

    // in-memory only
    pub fn toggle_sidebar(&mut self) {
        self.prefs.sidebar_open = !self.prefs.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::storage::memory::MemoryStore;

    #[test]
    fn fresh_load_defaults_to_dark() {
        let store = PreferenceStore::load(MemoryStore::new());

        let prefs = store.get();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.transition_direction, DEFAULT_DIRECTION);
        assert!(!prefs.sidebar_open);
    }

    #[test]
    fn invalid_persisted_theme_falls_back_to_dark() {
        let mem = MemoryStore::new();
        mem.raw_set(THEME_KEY, "\"solarized\"");

        assert_eq!(PreferenceStore::load(mem.clone()).theme(), Theme::Dark);

        mem.raw_set(THEME_KEY, "not even json");
        assert_eq!(PreferenceStore::load(mem).theme(), Theme::Dark);
    }

    #[test]
    fn toggle_theme_twice_is_identity_and_persists() {
        let mem = MemoryStore::new();
        let mut store = PreferenceStore::load(mem.clone());

        let original = store.theme();

        assert_eq!(store.toggle_theme(), Theme::Light);
        let persisted: Theme =
            serde_json::from_str(&mem.raw_get(THEME_KEY).unwrap()).unwrap();
        assert_eq!(persisted, store.theme());

        assert_eq!(store.toggle_theme(), original);
        let persisted: Theme =
            serde_json::from_str(&mem.raw_get(THEME_KEY).unwrap()).unwrap();
        assert_eq!(persisted, original);
    }

    #[test]
    fn persisted_theme_survives_reload() {
        let mem = MemoryStore::new();

        PreferenceStore::load(mem.clone()).toggle_theme();

        assert_eq!(PreferenceStore::load(mem).theme(), Theme::Light);
    }

    #[test]
    fn transition_direction_accepts_any_string() {
        let mem = MemoryStore::new();
        let mut store = PreferenceStore::load(mem.clone());

        store.set_transition_direction("spiral");

        assert_eq!(store.get().transition_direction, "spiral");
        assert_eq!(
            PreferenceStore::load(mem).get().transition_direction,
            "spiral"
        );
    }

    #[test]
    fn sidebar_toggle_is_memory_only() {
        let mem = MemoryStore::new();
        let mut store = PreferenceStore::load(mem.clone());

        store.toggle_sidebar();
        assert!(store.get().sidebar_open);

        store.toggle_sidebar();
        assert!(!store.get().sidebar_open);

        // never written through the port
        assert!(mem.raw_get("sidebarOpen").is_none());

        // and a reload starts closed again
        store.toggle_sidebar();
        assert!(!PreferenceStore::load(mem).get().sidebar_open);
    }
}
