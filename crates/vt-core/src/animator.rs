//! Reveal-on-scroll animations and the statistics count-up.
//!
//! The browser glue owns the `IntersectionObserver`; it observes every node
//! returned by [`RevealAnimator::targets`] and forwards entries to
//! [`RevealAnimator::on_intersect`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::host::Host;
use crate::role::Role;
use crate::scheduler::TaskSlot;
use crate::view::Node;

pub const REVEAL_CLASS: &str = "aos-animate";
pub const OBSERVER_THRESHOLD: f64 = 0.1;
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Leading integer of an attribute value, `parseInt` style: `"150+"` is 150.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// One `.stat-number` counting from zero to its `data-target`.
struct StatCounter {
    host: Host,
    node: Node,
    target: f64,
    step: f64,
    current: Cell<f64>,
    frame: TaskSlot,
    me: Weak<StatCounter>,
}

impl StatCounter {
    fn new(host: Host, node: Node, target: i64) -> Rc<Self> {
        let target = target as f64;
        let step = host.config().counter_step(target);
        Rc::new_cyclic(|me| Self {
            host,
            node,
            target,
            step,
            current: Cell::new(0.0),
            frame: TaskSlot::new(),
            me: me.clone(),
        })
    }

    fn restart(&self) {
        self.frame.cancel(self.host.scheduler());
        self.current.set(0.0);
        self.tick();
    }

    fn tick(&self) {
        let view = self.host.view();
        let current = self.current.get();
        if current < self.target {
            let next = current + self.step;
            self.current.set(next);
            let shown = next.ceil().min(self.target);
            view.set_text(self.node, &format!("{}", shown as i64));

            let me = self.me.clone();
            let handle = self.host.scheduler().request_frame(Box::new(move |_| {
                if let Some(me) = me.upgrade() {
                    me.tick();
                }
            }));
            self.frame.replace(self.host.scheduler(), handle);
        } else {
            view.set_text(self.node, &format!("{}", self.target as i64));
        }
    }
}

pub struct RevealAnimator {
    host: Host,
    counters: RefCell<HashMap<Node, Rc<StatCounter>>>,
}

impl RevealAnimator {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            counters: RefCell::new(HashMap::new()),
        }
    }

    /// Elements to observe: everything flagged with `data-aos` plus every section.
    pub fn targets(&self) -> Vec<Node> {
        let view = self.host.view();
        let mut nodes = view.find_all(Role::RevealTarget);
        for section in view.find_all(Role::Section) {
            if !nodes.contains(&section) {
                nodes.push(section);
            }
        }
        nodes
    }

    /// Intersection callback. Each element's side effects fire on first reveal only.
    pub fn on_intersect(&self, node: Node, is_intersecting: bool) {
        if !is_intersecting {
            return;
        }
        let view = self.host.view();
        if view.has_class(node, REVEAL_CLASS) {
            return;
        }
        view.add_class(node, REVEAL_CLASS);

        if view.has_class(node, "stats") {
            self.animate_stats();
        }
        if view.has_class(node, "hero") {
            self.animate_hero();
        }
    }

    pub fn animate_stats(&self) {
        let view = self.host.view();
        for node in view.find_all(Role::StatCounter) {
            let Some(target) = view
                .attr(node, "data-target")
                .as_deref()
                .and_then(parse_leading_int)
            else {
                debug!(?node, "stat counter without numeric target skipped");
                continue;
            };
            let counter = self
                .counters
                .borrow_mut()
                .entry(node)
                .or_insert_with(|| StatCounter::new(self.host.clone(), node, target))
                .clone();
            counter.restart();
        }
    }

    pub fn animate_hero(&self) {
        let view = self.host.view();
        if let Some(title) = view.find(Role::HeroTitle) {
            if !view.has_class(title, "animated") {
                view.add_class(title, "animated");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;
    use crate::view::View;

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("150"), Some(150));
        assert_eq!(parse_leading_int(" 98%"), Some(98));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn targets_cover_flagged_elements_and_sections_once() {
        let t = TestHost::new();
        let body = t.view.body();
        let card = t.view.el("div", body, &[("data-aos", "fade-up")]);
        let plain = t.view.el("section", body, &[]);
        let flagged = t.view.el("section", body, &[("data-aos", "zoom")]);
        let anim = RevealAnimator::new(t.host());
        assert_eq!(anim.targets(), vec![card, flagged, plain]);
    }

    #[test]
    fn counter_reaches_exact_target() {
        let t = TestHost::new();
        let body = t.view.body();
        let stats = t.view.el("section", body, &[("class", "stats")]);
        let hundred = t.view.el("span", stats, &[("class", "stat-number"), ("data-target", "100")]);
        let odd = t.view.el("span", stats, &[("class", "stat-number"), ("data-target", "37")]);
        let anim = RevealAnimator::new(t.host());

        anim.on_intersect(stats, true);
        assert!(t.view.has_class(stats, REVEAL_CLASS));
        assert_eq!(t.view.text(hundred), "1");

        let mut seen = Vec::new();
        for _ in 0..200 {
            t.scheduler.advance(16);
            seen.push(t.view.text(hundred).parse::<i64>().unwrap());
        }
        assert!(seen.iter().all(|v| *v <= 100));
        assert!(seen.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(t.view.text(hundred), "100");
        assert_eq!(t.view.text(odd), "37");
        assert_eq!(t.scheduler.pending_count(), 0);
    }

    #[test]
    fn counter_runs_roughly_125_frames() {
        let t = TestHost::new();
        let stats = t.view.el("div", t.view.body(), &[("class", "stats"), ("data-aos", "")]);
        let n = t.view.el("span", stats, &[("class", "stat-number"), ("data-target", "500")]);
        let anim = RevealAnimator::new(t.host());
        anim.on_intersect(stats, true);

        t.scheduler.advance(16 * 100);
        assert_ne!(t.view.text(n), "500");
        t.scheduler.advance(16 * 30);
        assert_eq!(t.view.text(n), "500");
    }

    #[test]
    fn reveal_side_effects_fire_once() {
        let t = TestHost::new();
        let body = t.view.body();
        let hero = t.view.el("section", body, &[("class", "hero")]);
        let title = t.view.el("h1", hero, &[("class", "hero-title")]);
        let stats = t.view.el("section", body, &[("class", "stats")]);
        let n = t.view.el("span", stats, &[("class", "stat-number"), ("data-target", "10")]);
        let anim = RevealAnimator::new(t.host());

        anim.on_intersect(hero, false);
        assert!(!t.view.has_class(hero, REVEAL_CLASS));

        anim.on_intersect(hero, true);
        anim.on_intersect(hero, true);
        assert!(t.view.has_class(title, "animated"));
        assert_eq!(t.view.class_name(hero), "hero aos-animate");

        anim.on_intersect(stats, true);
        t.scheduler.run_frames(500);
        assert_eq!(t.view.text(n), "10");

        anim.on_intersect(stats, true);
        assert_eq!(t.view.text(n), "10");
        assert_eq!(t.scheduler.pending_count(), 0);
    }

    #[test]
    fn non_numeric_target_is_skipped() {
        let t = TestHost::new();
        let stats = t.view.el("section", t.view.body(), &[("class", "stats")]);
        let n = t.view.el("span", stats, &[("class", "stat-number"), ("data-target", "many")]);
        t.view.set_text(n, "many");
        let anim = RevealAnimator::new(t.host());
        anim.on_intersect(stats, true);
        assert_eq!(t.view.text(n), "many");
        assert_eq!(t.scheduler.pending_count(), 0);
    }
}
