//! Light/dark theme with the choice kept in `localStorage`.

use log::{debug, info};
use web_sys::window;

use crate::config;

const LIGHT_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// Where the preference lives between visits.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    current: ThemePreference,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the stored preference once; anything unknown means default.
    pub fn load(store: S) -> Self {
        let current = store
            .load(config::THEME_STORAGE_KEY)
            .as_deref()
            .and_then(ThemePreference::from_stored)
            .unwrap_or_default();
        debug!("Loaded theme preference: {}", current.as_str());
        Self { store, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.store.save(config::THEME_STORAGE_KEY, self.current.as_str());
        info!("Theme switched to {}", self.current.as_str());
        self.current
    }
}

/// Puts the theme class on `<body>`.
pub fn apply(theme: ThemePreference) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = match theme {
        ThemePreference::Light => classes.add_1(LIGHT_CLASS),
        ThemePreference::Dark => classes.remove_1(LIGHT_CLASS),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.save(key, value);
            store
        }

        fn stored(&self) -> Option<String> {
            self.0.borrow().get(config::THEME_STORAGE_KEY).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn missing_or_unknown_value_means_dark() {
        assert_eq!(ThemeController::load(MemoryStore::default()).current(), ThemePreference::Dark);
        let odd = MemoryStore::with(config::THEME_STORAGE_KEY, "sepia");
        assert_eq!(ThemeController::load(odd).current(), ThemePreference::Dark);
    }

    #[test]
    fn stored_value_applies_before_any_toggle() {
        let store = MemoryStore::with(config::THEME_STORAGE_KEY, "light");
        assert_eq!(ThemeController::load(store).current(), ThemePreference::Light);
    }

    #[test]
    fn toggle_parity_from_light() {
        for n in 0..7 {
            let store = MemoryStore::with(config::THEME_STORAGE_KEY, "light");
            let mut controller = ThemeController::load(store.clone());
            for _ in 0..n {
                controller.toggle();
            }
            let expected = if n % 2 == 0 { "light" } else { "dark" };
            assert_eq!(store.stored().as_deref(), Some(expected), "after {n} toggles");
        }
    }

    #[test]
    fn first_toggle_from_default_goes_light() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone());
        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(store.stored().as_deref(), Some("light"));
    }
}
