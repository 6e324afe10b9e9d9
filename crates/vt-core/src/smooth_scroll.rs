//! Eased viewport scrolling to in-page targets.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::host::Host;
use crate::scheduler::TaskSlot;
use crate::view::Node;

/// Quadratic ease-in-out: position at `t` ms of a `d` ms move from `b` by `c`.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

#[derive(Debug, Clone, Copy)]
struct Flight {
    from: f64,
    distance: f64,
    started_at: Option<f64>,
}

/// Owns one animation at a time; a new target supersedes the running one.
pub struct SmoothScroller {
    host: Host,
    frame: TaskSlot,
    flight: Cell<Option<Flight>>,
    me: Weak<SmoothScroller>,
}

impl SmoothScroller {
    pub fn new(host: Host) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            host,
            frame: TaskSlot::new(),
            flight: Cell::new(None),
            me: me.clone(),
        })
    }

    /// Animate to `target`, leaving room for the fixed header.
    pub fn scroll_to(&self, target: Node) {
        let view = self.host.view();
        let destination = view.offset_top(target) - self.host.config().header_offset_px;
        self.scroll_to_y(destination);
    }

    pub fn scroll_to_y(&self, destination: f64) {
        let from = self.host.view().scroll_y();
        debug!(from, destination, "smooth scroll");
        self.flight.set(Some(Flight {
            from,
            distance: destination - from,
            started_at: None,
        }));
        self.schedule_frame();
    }

    /// Scroll to the element with `id`, if there is one.
    pub fn scroll_to_section(&self, id: &str) {
        if let Some(section) = self.host.view().by_id(id) {
            self.scroll_to(section);
        }
    }

    pub fn cancel(&self) {
        self.frame.cancel(self.host.scheduler());
        self.flight.set(None);
    }

    pub fn is_animating(&self) -> bool {
        self.frame.is_active(self.host.scheduler())
    }

    fn schedule_frame(&self) {
        let me = self.me.clone();
        let handle = self.host.scheduler().request_frame(Box::new(move |ts| {
            if let Some(me) = me.upgrade() {
                me.step(ts);
            }
        }));
        self.frame.replace(self.host.scheduler(), handle);
    }

    fn step(&self, now: f64) {
        let Some(mut flight) = self.flight.get() else {
            return;
        };
        let start = *flight.started_at.get_or_insert(now);
        self.flight.set(Some(flight));

        let duration = self.host.config().smooth_scroll_ms;
        let elapsed = now - start;
        let y = ease_in_out_quad(elapsed, flight.from, flight.distance, duration);
        self.host.view().scroll_to(y);

        if elapsed < duration {
            self.schedule_frame();
        } else {
            self.flight.set(None);
        }
    }
}
