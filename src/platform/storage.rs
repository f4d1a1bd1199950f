//! LocalStorage-backed settings store

use crate::settings::{DrillSettings, SettingsStore};

/// Settings persisted in the browser's LocalStorage
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self {
            key: DrillSettings::STORAGE_KEY,
        }
    }
}

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl SettingsStore for LocalStorageStore {
    fn load_raw(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok().flatten()
    }

    fn save_raw(&mut self, json: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, json).is_err() {
                    log::warn!("LocalStorage rejected settings write");
                }
            }
            None => log::warn!("LocalStorage unavailable, settings not saved"),
        }
    }
}
