//! Testimonial carousel.
//!
//! The item list is captured once at construction. Auto-rotation uses a
//! single repeating timer; starting always cancels the previous one, so at
//! most one timer is ever live.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::host::Host;
use crate::role::Role;
use crate::scheduler::TaskSlot;
use crate::view::Node;

pub struct Carousel {
    host: Host,
    items: Vec<Node>,
    dots: Vec<Node>,
    index: Cell<usize>,
    rotation: TaskSlot,
    me: Weak<Carousel>,
}

impl Carousel {
    pub fn new(host: Host) -> Rc<Self> {
        let view = host.view();
        let items = view.find_all(Role::Testimonial);
        let dots = view.find_all(Role::TestimonialDot);
        Rc::new_cyclic(|me| Self {
            host,
            items,
            dots,
            index: Cell::new(0),
            rotation: TaskSlot::new(),
            me: me.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> usize {
        self.index.get()
    }

    /// Activate testimonial `index` and its dot. An out-of-range index
    /// clears every item but is still recorded, as the markup helpers expect.
    pub fn show(&self, index: usize) {
        let view = self.host.view();
        for item in &self.items {
            view.remove_class(*item, "active");
        }
        for dot in &self.dots {
            view.remove_class(*dot, "active");
        }
        if let Some(item) = self.items.get(index) {
            view.add_class(*item, "active");
        }
        if let Some(dot) = self.dots.get(index) {
            view.add_class(*dot, "active");
        }
        self.index.set(index);
    }

    pub fn next(&self) {
        if self.is_empty() {
            return;
        }
        self.show((self.current() + 1) % self.len());
    }

    pub fn prev(&self) {
        if self.is_empty() {
            return;
        }
        let current = self.current().min(self.len() - 1);
        self.show(if current == 0 { self.len() - 1 } else { current - 1 });
    }

    pub fn start(&self) {
        if self.is_empty() {
            return;
        }
        let me = self.me.clone();
        let handle = self.host.scheduler().set_interval(
            self.host.config().carousel_interval_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    me.next();
                }
            }),
        );
        self.rotation.replace(self.host.scheduler(), handle);
        debug!(items = self.len(), "testimonial rotation started");
    }

    pub fn stop(&self) {
        self.rotation.cancel(self.host.scheduler());
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_active(self.host.scheduler())
    }

    pub fn on_mouse_enter(&self) {
        self.stop();
    }

    pub fn on_mouse_leave(&self) {
        self.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;
    use crate::view::View;

    fn carousel(n: usize) -> (TestHost, Rc<Carousel>, Vec<Node>, Vec<Node>) {
        let t = TestHost::new();
        let body = t.view.body();
        let slider = t.view.el("div", body, &[("class", "testimonials-slider")]);
        let items: Vec<_> = (0..n)
            .map(|_| t.view.el("div", slider, &[("class", "testimonial-item")]))
            .collect();
        let dots: Vec<_> = (0..n)
            .map(|_| t.view.el("button", body, &[("class", "nav-dot")]))
            .collect();
        let c = Carousel::new(t.host());
        (t, c, items, dots)
    }

    #[test]
    fn next_is_cyclic_for_any_size() {
        for n in 1..=6 {
            let (_t, c, _, _) = carousel(n);
            for start in 0..n {
                c.show(start);
                for _ in 0..n {
                    c.next();
                }
                assert_eq!(c.current(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn prev_inverts_next() {
        let (_t, c, _, _) = carousel(4);
        for start in 0..4 {
            c.show(start);
            c.next();
            c.prev();
            assert_eq!(c.current(), start);
            c.prev();
            c.next();
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn show_activates_exactly_one_item_and_dot() {
        let (t, c, items, dots) = carousel(3);
        c.show(2);
        let active: Vec<_> = items.iter().map(|n| t.view.has_class(*n, "active")).collect();
        assert_eq!(active, [false, false, true]);
        assert!(t.view.has_class(dots[2], "active"));
        assert!(!t.view.has_class(dots[0], "active"));
    }

    #[test]
    fn rotation_advances_every_interval() {
        let (t, c, _, _) = carousel(3);
        c.start();
        t.scheduler.advance(4999);
        assert_eq!(c.current(), 0);
        t.scheduler.advance(1);
        assert_eq!(c.current(), 1);
        t.scheduler.advance(10_000);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn double_start_keeps_single_timer() {
        let (t, c, _, _) = carousel(3);
        c.start();
        c.start();
        assert_eq!(t.scheduler.interval_count(), 1);
        t.scheduler.advance(5000);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn hover_pauses_without_resetting() {
        let (t, c, _, _) = carousel(3);
        c.start();
        t.scheduler.advance(5000);
        c.on_mouse_enter();
        assert!(!c.is_rotating());
        t.scheduler.advance(20_000);
        assert_eq!(c.current(), 1);
        c.on_mouse_leave();
        assert!(c.is_rotating());
        t.scheduler.advance(5000);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let (t, c, _, _) = carousel(0);
        c.start();
        c.next();
        c.prev();
        assert_eq!(t.scheduler.pending_count(), 0);
        assert_eq!(c.current(), 0);
    }
}
