use std::rc::Rc;

use crate::analytics::AnalyticsSink;
use crate::config::SiteConfig;
use crate::prefs::PreferenceStore;
use crate::scheduler::Scheduler;
use crate::view::View;

/// Platform services shared by every component.
///
/// Clone-friendly; all fields are reference counted.
#[derive(Clone)]
pub struct Host {
    pub view: Rc<dyn View>,
    pub scheduler: Rc<dyn Scheduler>,
    pub prefs: Rc<dyn PreferenceStore>,
    pub analytics: Rc<dyn AnalyticsSink>,
    pub config: Rc<SiteConfig>,
}

impl Host {
    pub fn view(&self) -> &dyn View {
        &*self.view
    }

    pub fn scheduler(&self) -> &dyn Scheduler {
        &*self.scheduler
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Lock or release page scrolling behind overlays.
    pub fn lock_scroll(&self, locked: bool) {
        let body = self.view.body();
        self.view
            .set_style(body, "overflow", if locked { "hidden" } else { "" });
    }
}
