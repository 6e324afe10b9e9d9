//! `localStorage`-backed preferences.
//!
//! Values are stored as plain strings (`theme` → `dark`), not JSON, so pages
//! that set them from inline scripts read back the same thing.

use gloo_storage::{LocalStorage, Storage};
use tracing::warn;
use vt_core::{Error, PreferenceStore, Result};

pub struct LocalPreferences {
    available: bool,
}

impl LocalPreferences {
    pub fn new() -> Self {
        let available = matches!(gloo_utils::window().local_storage(), Ok(Some(_)));
        if !available {
            warn!("localStorage unavailable; preferences will not persist");
        }
        Self { available }
    }
}

impl Default for LocalPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.available {
            return Err(Error::Storage("localStorage unavailable".to_owned()));
        }
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| Error::Storage(format!("{err:?}")))
    }
}
