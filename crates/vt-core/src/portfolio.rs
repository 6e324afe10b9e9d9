//! Portfolio category filter.
//!
//! Showing an item puts it back in layout first and fades it in on the next
//! tick; hiding fades it out first and drops it from layout once the
//! transition has run. A newer filter supersedes any transition still
//! pending for the same item.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::host::Host;
use crate::role::Role;
use crate::scheduler::TaskSlot;
use crate::view::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None | Some("all") => Filter::All,
            Some(category) => Filter::Category(category.to_owned()),
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

pub struct PortfolioFilter {
    host: Host,
    transitions: RefCell<HashMap<Node, Rc<TaskSlot>>>,
    me: Weak<PortfolioFilter>,
}

impl PortfolioFilter {
    pub fn new(host: Host) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            host,
            transitions: RefCell::new(HashMap::new()),
            me: me.clone(),
        })
    }

    /// Filter button activation.
    pub fn on_filter_click(&self, button: Node) {
        let view = self.host.view();
        for other in view.find_all(Role::FilterButton) {
            view.remove_class(other, "active");
            view.set_attr(other, "aria-selected", "false");
        }
        view.add_class(button, "active");
        view.set_attr(button, "aria-selected", "true");

        let filter = Filter::from_attr(view.attr(button, "data-filter").as_deref());
        self.apply(&filter);
    }

    pub fn apply(&self, filter: &Filter) {
        let view = self.host.view();
        debug!(?filter, "portfolio filter");
        for item in view.find_all(Role::PortfolioItem) {
            let category = view.attr(item, "data-category");
            if filter.matches(category.as_deref()) {
                self.show(item);
            } else {
                self.hide(item);
            }
        }
    }

    fn slot(&self, item: Node) -> Rc<TaskSlot> {
        self.transitions
            .borrow_mut()
            .entry(item)
            .or_insert_with(|| Rc::new(TaskSlot::new()))
            .clone()
    }

    fn show(&self, item: Node) {
        let view = self.host.view();
        view.set_style(item, "display", "block");
        let me = self.me.clone();
        let handle = self.host.scheduler().set_timeout(
            self.host.config().filter_fade_in_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    let view = me.host.view();
                    view.set_style(item, "opacity", "1");
                    view.set_style(item, "transform", "scale(1)");
                }
            }),
        );
        self.slot(item).replace(self.host.scheduler(), handle);
    }

    fn hide(&self, item: Node) {
        let view = self.host.view();
        view.set_style(item, "opacity", "0");
        view.set_style(item, "transform", "scale(0.8)");
        let me = self.me.clone();
        let handle = self.host.scheduler().set_timeout(
            self.host.config().filter_fade_out_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    me.host.view().set_style(item, "display", "none");
                }
            }),
        );
        self.slot(item).replace(self.host.scheduler(), handle);
    }
}
