//! Deterministic stand-ins for the browser, used by unit tests.

mod scheduler;
mod view;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

pub use scheduler::ManualScheduler;
pub use view::FakeView;

use crate::analytics::AnalyticsSink;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::host::Host;
use crate::prefs::PreferenceStore;

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryPreferences {
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::Storage("quota exceeded".to_owned()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Analytics sink that remembers what it was given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<(String, Value)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn forward(&self, event: &str, data: &Value) -> bool {
        self.events
            .borrow_mut()
            .push((event.to_owned(), data.clone()));
        true
    }
}

/// All fakes bundled, with typed access for assertions.
pub struct TestHost {
    pub view: Rc<FakeView>,
    pub scheduler: Rc<ManualScheduler>,
    pub prefs: Rc<MemoryPreferences>,
    pub sink: Rc<RecordingSink>,
    pub config: SiteConfig,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            view: Rc::new(FakeView::new()),
            scheduler: Rc::new(ManualScheduler::new()),
            prefs: Rc::new(MemoryPreferences::default()),
            sink: Rc::new(RecordingSink::default()),
            config: SiteConfig::default(),
        }
    }

    pub fn host(&self) -> Host {
        Host {
            view: self.view.clone(),
            scheduler: self.scheduler.clone(),
            prefs: self.prefs.clone(),
            analytics: self.sink.clone(),
            config: Rc::new(self.config.clone()),
        }
    }
}
