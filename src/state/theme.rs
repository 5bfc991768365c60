use log::info;
use web_sys::window;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Only the two persisted spellings are recognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Resolves the theme to start with. Any non-empty stored entry wins and
/// means dark only when it reads `"dark"`; a missing or empty entry defers
/// to the operating system preference.
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.filter(|value| !value.is_empty()) {
        Some(value) => Theme::parse(value).unwrap_or(Theme::Light),
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Key-value slot the theme preference is persisted in.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// `window.localStorage`, keyed by [`THEME_STORAGE_KEY`]. Every call is a
/// silent no-op when storage is unavailable (private mode, sandboxed iframe).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
            .flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(THEME_STORAGE_KEY, value);
        }
    }
}

/// Single writer of the theme flag. Components only ever read the
/// [`Theme`] value it hands out.
pub struct ThemeController<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, prefers_dark: bool) -> Self {
        let stored = store.load();
        let theme = initial_theme(stored.as_deref(), prefers_dark);
        info!("Initial theme: {} (stored: {:?})", theme.as_str(), stored);
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(self.theme.as_str());
        info!("Theme switched to {}", self.theme.as_str());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl MemoryStore {
        fn with(value: &str) -> Self {
            Self(Rc::new(RefCell::new(Some(value.to_string()))))
        }

        fn value(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value()
        }

        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn stored_preference_beats_system_preference() {
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn unrecognised_stored_value_reads_as_light() {
        assert_eq!(initial_theme(Some("solarized"), true), Theme::Light);
        assert_eq!(initial_theme(Some("Dark"), true), Theme::Light);
    }

    #[test]
    fn empty_stored_value_defers_to_system_preference() {
        assert_eq!(initial_theme(Some(""), true), Theme::Dark);
        assert_eq!(initial_theme(Some(""), false), Theme::Light);
    }

    #[test]
    fn load_does_not_write() {
        let store = MemoryStore::default();
        let controller = ThemeController::load(store.clone(), true);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(store.value(), None);
    }

    #[test]
    fn toggle_persists_every_change() {
        let store = MemoryStore::with("light");
        let mut controller = ThemeController::load(store.clone(), false);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_flag_and_stored_entry() {
        for start in ["dark", "light"] {
            let store = MemoryStore::with(start);
            let mut controller = ThemeController::load(store.clone(), start == "light");
            let original = controller.theme();

            controller.toggle();
            controller.toggle();

            assert_eq!(controller.theme(), original);
            assert_eq!(store.value().as_deref(), Some(start));
        }
    }
}
