//! Scroll-driven visual state: navbar shading, back-to-top button, progress
//! bar, parallax.
//!
//! Scroll events are coalesced so that at most one pass runs per animation
//! frame, no matter how many events arrive in between.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::warn;

use crate::host::Host;
use crate::role::Role;
use crate::smooth_scroll::SmoothScroller;

/// Percentage of the scrollable distance already covered. Not finite when
/// the document is shorter than the viewport.
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    scroll_top / (document_height - viewport_height) * 100.0
}

/// Replace the `translateY(...)` term of a transform, keeping the rest.
pub fn with_translate_y(transform: &str, y: f64) -> String {
    let mut rest = String::with_capacity(transform.len());
    let mut remaining = transform;
    while let Some(start) = remaining.find("translateY(") {
        rest.push_str(&remaining[..start]);
        match remaining[start..].find(')') {
            Some(end) => remaining = &remaining[start + end + 1..],
            None => {
                remaining = "";
            }
        }
    }
    rest.push_str(remaining);
    let rest = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        format!("translateY({y}px)")
    } else {
        format!("{rest} translateY({y}px)")
    }
}

pub struct ScrollEngine {
    host: Host,
    scroller: Rc<SmoothScroller>,
    frame_pending: Cell<bool>,
    me: Weak<ScrollEngine>,
}

impl ScrollEngine {
    pub fn new(host: Host, scroller: Rc<SmoothScroller>) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            host,
            scroller,
            frame_pending: Cell::new(false),
            me: me.clone(),
        })
    }

    /// Scroll event entry point.
    pub fn on_scroll(&self) {
        if self.frame_pending.replace(true) {
            return;
        }
        let me = self.me.clone();
        let scheduler = self.host.scheduler();
        let frame = scheduler.request_frame(Box::new(move |_| {
            if let Some(me) = me.upgrade() {
                me.handle_scroll();
                me.frame_pending.set(false);
            }
        }));
        if !scheduler.is_pending(frame) {
            warn!("no animation frame for scroll pass; running it now");
            self.handle_scroll();
            self.frame_pending.set(false);
        }
    }

    pub fn handle_scroll(&self) {
        let view = self.host.view();
        let cfg = self.host.config();
        let y = view.scroll_y();

        if let Some(navbar) = view.find(Role::Navbar) {
            view.toggle_class(navbar, "scrolled", y > cfg.navbar_scrolled_px);
        }
        if let Some(button) = view.find(Role::BackToTop) {
            view.toggle_class(button, "visible", y > cfg.back_to_top_px);
        }
        if let Some(bar) = view.find(Role::ScrollProgress) {
            let pct = scroll_progress(y, view.document_height(), view.viewport_height());
            view.set_style(bar, "width", &format!("{pct}%"));
        }
        self.update_parallax(y);
    }

    /// Back-to-top button: eased scroll to the top, superseding any scroll
    /// already in flight.
    pub fn scroll_to_top(&self) {
        self.scroller.scroll_to_y(0.0);
    }

    fn update_parallax(&self, y: f64) {
        let view = self.host.view();
        let cfg = self.host.config();

        for (i, shape) in view.find_all(Role::HeroShape).into_iter().enumerate() {
            let speed = cfg.shape_parallax_base + i as f64 * cfg.parallax_step;
            let transform = format!(
                "translateY({}px) rotate({}deg)",
                y * speed,
                y * cfg.shape_rotation_factor
            );
            view.set_style(shape, "transform", &transform);
        }

        for (i, card) in view.find_all(Role::FloatingCard).into_iter().enumerate() {
            let speed = cfg.card_parallax_base + i as f64 * cfg.parallax_step;
            let current = view.style(card, "transform");
            view.set_style(card, "transform", &with_translate_y(&current, y * speed));
        }
    }
}
