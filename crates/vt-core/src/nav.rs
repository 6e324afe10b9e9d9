//! Mobile navigation menu and in-page anchor handling.

use std::rc::Rc;

use tracing::debug;

use crate::host::Host;
use crate::role::Role;
use crate::smooth_scroll::SmoothScroller;
use crate::view::{EventOutcome, Key, KeyPress, Node};

pub struct NavController {
    host: Host,
    scroller: Rc<SmoothScroller>,
}

impl NavController {
    pub fn new(host: Host, scroller: Rc<SmoothScroller>) -> Self {
        Self { host, scroller }
    }

    pub fn is_open(&self) -> bool {
        let view = self.host.view();
        view.find(Role::NavMenu)
            .is_some_and(|menu| view.has_class(menu, "active"))
    }

    pub fn toggle(&self) {
        let view = self.host.view();
        let (Some(menu), Some(toggle)) = (view.find(Role::NavMenu), view.find(Role::NavToggle))
        else {
            return;
        };
        let open = !view.has_class(menu, "active");
        view.toggle_class(menu, "active", open);
        view.toggle_class(toggle, "active", open);
        view.set_attr(toggle, "aria-expanded", if open { "true" } else { "false" });
        self.host.lock_scroll(open);
        debug!(open, "mobile menu toggled");
    }

    pub fn close(&self) {
        let view = self.host.view();
        let (Some(menu), Some(toggle)) = (view.find(Role::NavMenu), view.find(Role::NavToggle))
        else {
            return;
        };
        view.remove_class(menu, "active");
        view.remove_class(toggle, "active");
        view.set_attr(toggle, "aria-expanded", "false");
        self.host.lock_scroll(false);
    }

    /// Enter or Space on the toggle acts like a click.
    pub fn on_toggle_key(&self, press: KeyPress) -> EventOutcome {
        match press.key {
            Key::Enter | Key::Space => {
                self.toggle();
                EventOutcome::PreventDefault
            }
            _ => EventOutcome::PassThrough,
        }
    }

    /// Close the menu when a click lands outside the navbar.
    pub fn on_document_click(&self, target: Node) {
        let view = self.host.view();
        let Some(navbar) = view.find(Role::Navbar) else {
            return;
        };
        if !view.contains(navbar, target) && self.is_open() {
            self.close();
        }
    }

    /// Same-page anchors scroll smoothly instead of jumping. Bare `#` links
    /// are left alone.
    pub fn on_anchor_click(&self, anchor: Node) -> EventOutcome {
        let view = self.host.view();
        let href = view.attr(anchor, "href").unwrap_or_default();
        let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return EventOutcome::PassThrough;
        };
        if let Some(target) = view.by_id(id) {
            self.scroller.scroll_to(target);
        }
        EventOutcome::PreventDefault
    }
}
