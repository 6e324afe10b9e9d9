//! Persistent key-value preferences (browser `localStorage` in production).

use crate::error::Result;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
