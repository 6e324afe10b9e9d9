//! Page start-up chores: loading overlay, deferred images, font preload.

use std::rc::{Rc, Weak};

use tracing::debug;

use crate::host::Host;
use crate::role::Role;
use crate::view::Node;

pub struct LoadingScreen {
    host: Host,
    me: Weak<LoadingScreen>,
}

impl LoadingScreen {
    pub fn new(host: Host) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            host,
            me: me.clone(),
        })
    }

    /// Fade the overlay out after the hide delay, then drop it from layout.
    pub fn schedule_hide(&self) {
        let me = self.me.clone();
        self.host.scheduler().set_timeout(
            self.host.config().loading_hide_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    me.hide();
                }
            }),
        );
    }

    fn hide(&self) {
        let Some(screen) = self.host.view().find(Role::LoadingScreen) else {
            return;
        };
        self.host.view().add_class(screen, "hidden");
        let me = self.me.clone();
        self.host.scheduler().set_timeout(
            self.host.config().loading_remove_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    me.host.view().set_style(screen, "display", "none");
                }
            }),
        );
    }
}

/// Images whose real source sits in `data-src` until they scroll into view.
pub struct LazyImages {
    host: Host,
}

impl LazyImages {
    pub fn new(host: Host) -> Self {
        Self { host }
    }

    /// Lazy images that still carry a deferred source.
    pub fn targets(&self) -> Vec<Node> {
        let view = self.host.view();
        view.find_all(Role::LazyImage)
            .into_iter()
            .filter(|img| view.attr(*img, "data-src").is_some_and(|s| !s.is_empty()))
            .collect()
    }

    /// Swap in the deferred source. Returns true once the image no longer
    /// needs observing.
    pub fn on_intersect(&self, img: Node, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let view = self.host.view();
        if let Some(src) = view.attr(img, "data-src").filter(|s| !s.is_empty()) {
            view.set_attr(img, "src", &src);
            view.remove_attr(img, "data-src");
            debug!(%src, "lazy image loaded");
        }
        true
    }
}

/// Ask the browser to fetch the web font stylesheet early.
pub fn preload_fonts(host: &Host) -> Node {
    let view = host.view();
    let link = view.create("link");
    view.set_attr(link, "rel", "preload");
    view.set_attr(link, "href", &host.config().preload_font_href);
    view.set_attr(link, "as", "style");
    view.append(view.head(), link);
    link
}
