//! Service details dialog.

use std::cell::Cell;

use tracing::debug;
use vt_content::Service;

use crate::host::Host;
use crate::role::Role;
use crate::view::Node;

pub struct ServiceModal {
    host: Host,
    shown: Cell<Option<Service>>,
}

impl ServiceModal {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            shown: Cell::new(None),
        }
    }

    pub fn node(&self) -> Option<Node> {
        self.host.view().find(Role::ServiceModal)
    }

    pub fn is_open(&self) -> bool {
        let view = self.host.view();
        self.node().is_some_and(|modal| view.has_class(modal, "active"))
    }

    /// Service currently displayed, if the dialog is open.
    pub fn service(&self) -> Option<Service> {
        if self.is_open() { self.shown.get() } else { None }
    }

    /// Open the dialog for `key`; unknown keys fall back to web development.
    pub fn open(&self, key: &str) {
        let Some(modal) = self.node() else {
            return;
        };
        let view = self.host.view();
        let service = Service::from_key(key);
        let content = service.content();

        if let Some(title) = view.find_within(modal, Role::ModalTitle).into_iter().next() {
            view.set_text(title, content.title);
        }
        if let Some(body) = view.find_within(modal, Role::ModalBody).into_iter().next() {
            view.set_html(body, &content.render_body());
        }

        view.add_class(modal, "active");
        view.set_attr(modal, "aria-hidden", "false");
        if let Some(first) = view.find_within(modal, Role::Focusable).into_iter().next() {
            view.focus(first);
        }
        self.host.lock_scroll(true);
        self.shown.set(Some(service));
        debug!(requested = key, service = service.key(), "service modal opened");
    }

    /// Hide the dialog and drop focus. Focus is not returned to the trigger.
    pub fn close(&self) {
        let Some(modal) = self.node() else {
            return;
        };
        let view = self.host.view();
        view.remove_class(modal, "active");
        view.set_attr(modal, "aria-hidden", "true");
        self.host.lock_scroll(false);
        if let Some(active) = view.active_element() {
            view.blur(active);
        }
        self.shown.set(None);
    }

    /// Clicks on the backdrop (the dialog root itself) dismiss it.
    pub fn on_backdrop_click(&self, target: Node) {
        if self.node() == Some(target) {
            self.close();
        }
    }
}
