use std::sync::Arc;

use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainResult, Storage, StorageKey};

use crate::persisted::Persisted;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl core::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme {other:?} (expected light, dark or system)")),
        }
    }
}

/// UI preferences, persisted under `ui-settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiSettings {
    pub sidebar_collapsed: bool,
    pub theme: Theme,
    pub language: String,
    pub compact_tables: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            theme: Theme::default(),
            language: "en".to_string(),
            compact_tables: false,
        }
    }
}

#[derive(Debug)]
pub struct UiSettingsStore {
    state: Persisted<UiSettings>,
}

impl UiSettingsStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            state: Persisted::load(storage, StorageKey::UiSettings),
        }
    }

    pub fn settings(&self) -> &UiSettings {
        self.state.get()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.settings().sidebar_collapsed
    }

    /// Flip the sidebar flag; returns the new value.
    pub fn toggle_sidebar(&mut self) -> DomainResult<bool> {
        self.state.update(|s| s.sidebar_collapsed = !s.sidebar_collapsed)?;
        Ok(self.sidebar_collapsed())
    }

    pub fn set_theme(&mut self, theme: Theme) -> DomainResult<()> {
        self.state.update(|s| s.theme = theme)
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> DomainResult<()> {
        let language = language.into();
        self.state.update(|s| s.language = language)
    }

    pub fn set_compact_tables(&mut self, compact: bool) -> DomainResult<()> {
        self.state.update(|s| s.compact_tables = compact)
    }

    pub fn reset(&mut self) -> DomainResult<()> {
        self.state.reset()
    }
}

#[cfg(test)]
mod tests {
    use erpdesk_core::{FileStorage, MemoryStorage};
    use proptest::prelude::*;

    use super::*;

    fn store() -> (Arc<dyn Storage>, UiSettingsStore) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = UiSettingsStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn preferences_survive_a_reload() {
        let (storage, mut ui) = store();
        ui.set_theme(Theme::Dark).unwrap();
        ui.set_language("es").unwrap();
        ui.set_compact_tables(true).unwrap();
        assert!(ui.toggle_sidebar().unwrap());

        let reloaded = UiSettingsStore::load(storage.clone());
        assert_eq!(
            reloaded.settings(),
            &UiSettings {
                sidebar_collapsed: true,
                theme: Theme::Dark,
                language: "es".into(),
                compact_tables: true,
            }
        );
        let raw = storage.get("ui-settings").unwrap().unwrap();
        assert!(raw.contains("\"sidebarCollapsed\":true"));
    }

    #[test]
    fn file_storage_keeps_preferences_across_restarts() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(dir.path()).unwrap());
            let mut ui = UiSettingsStore::load(storage);
            ui.toggle_sidebar().unwrap();
            ui.set_theme(Theme::Light).unwrap();
        }
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(dir.path()).unwrap());
        let ui = UiSettingsStore::load(storage);
        assert!(ui.sidebar_collapsed());
        assert_eq!(ui.settings().theme, Theme::Light);
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_the_flag(start in any::<bool>()) {
            let (_storage, mut ui) = store();
            if start {
                ui.toggle_sidebar().unwrap();
            }
            prop_assert_eq!(ui.sidebar_collapsed(), start);
            ui.toggle_sidebar().unwrap();
            ui.toggle_sidebar().unwrap();
            prop_assert_eq!(ui.sidebar_collapsed(), start);
        }
    }
}
