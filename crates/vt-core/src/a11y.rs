//! Accessibility helpers: skip link, live-region announcements, aria-label
//! backfill, global Escape handling and the modal focus trap.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::debug;
use vt_content::strings;

use crate::host::Host;
use crate::modal::ServiceModal;
use crate::nav::NavController;
use crate::role::Role;
use crate::scheduler::TaskSlot;
use crate::view::{EventOutcome, Key, KeyPress, Node, View};

pub const MAIN_CONTENT_ID: &str = "main-content";
pub const LIVE_REGION_ID: &str = "live-region";

const BUTTON_ICON_LABELS: [(&str, &str); 2] = [
    ("fa-times", strings::LABEL_CLOSE),
    ("fa-arrow-up", strings::LABEL_BACK_TO_TOP),
];

const SOCIAL_ICON_LABELS: [(&str, &str); 5] = [
    ("linkedin", "LinkedIn"),
    ("instagram", "Instagram"),
    ("twitter", "Twitter"),
    ("github", "GitHub"),
    ("whatsapp", "WhatsApp"),
];

fn label_for(icon_class: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(needle, _)| icon_class.contains(needle))
        .map(|(_, label)| *label)
}

/// Off-screen region whose text is read out by screen readers.
///
/// Text is cleared shortly after each announcement so that repeating the
/// same message is announced again.
pub struct LiveRegion {
    host: Host,
    node: Cell<Option<Node>>,
    clear: TaskSlot,
    me: Weak<LiveRegion>,
}

impl LiveRegion {
    pub fn new(host: Host) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            host,
            node: Cell::new(None),
            clear: TaskSlot::new(),
            me: me.clone(),
        })
    }

    pub fn install(&self) {
        let view = self.host.view();
        let region = view.create("div");
        view.set_attr(region, "aria-live", "polite");
        view.set_attr(region, "aria-atomic", "true");
        view.set_class_name(region, "sr-only");
        view.set_id(region, LIVE_REGION_ID);
        view.append(view.body(), region);
        self.node.set(Some(region));
    }

    pub fn node(&self) -> Option<Node> {
        self.node.get()
    }

    pub fn announce(&self, message: &str) {
        let Some(region) = self.node.get() else {
            return;
        };
        self.host.view().set_text(region, message);

        let me = self.me.clone();
        let handle = self.host.scheduler().set_timeout(
            self.host.config().announcement_clear_ms,
            Box::new(move || {
                if let Some(me) = me.upgrade() {
                    if let Some(region) = me.node.get() {
                        me.host.view().set_text(region, "");
                    }
                }
            }),
        );
        self.clear.replace(self.host.scheduler(), handle);
    }
}

/// Keep Tab and Shift+Tab cycling inside `container`.
pub fn trap_focus(view: &dyn View, container: Node, press: KeyPress) -> EventOutcome {
    if press.key != Key::Tab {
        return EventOutcome::PassThrough;
    }
    let focusable = view.find_within(container, Role::Focusable);
    let (Some(&first), Some(&last)) = (focusable.first(), focusable.last()) else {
        return EventOutcome::PassThrough;
    };
    let active = view.active_element();

    if press.shift && active == Some(first) {
        view.focus(last);
        EventOutcome::PreventDefault
    } else if !press.shift && active == Some(last) {
        view.focus(first);
        EventOutcome::PreventDefault
    } else {
        EventOutcome::PassThrough
    }
}

pub struct Accessibility {
    host: Host,
    nav: Rc<NavController>,
    modal: Rc<ServiceModal>,
}

impl Accessibility {
    pub fn new(host: Host, nav: Rc<NavController>, modal: Rc<ServiceModal>) -> Self {
        Self { host, nav, modal }
    }

    /// Skip link, main landmark and aria-label backfill.
    pub fn install(&self) {
        let view = self.host.view();
        let skip = view.create("a");
        view.set_attr(skip, "href", &format!("#{MAIN_CONTENT_ID}"));
        view.set_class_name(skip, "skip-link");
        view.set_text(skip, strings::SKIP_LINK);
        view.prepend(view.body(), skip);

        if let Some(hero) = view.find(Role::Hero) {
            view.set_id(hero, MAIN_CONTENT_ID);
        }

        self.enhance_aria_labels();
    }

    pub fn enhance_aria_labels(&self) {
        let view = self.host.view();
        let mut labelled = 0usize;

        for button in view.find_all(Role::UnlabelledButton) {
            let Some(icon) = view.find_within(button, Role::Icon).into_iter().next() else {
                continue;
            };
            if !view.text(button).trim().is_empty() {
                continue;
            }
            if let Some(label) = label_for(&view.class_name(icon), &BUTTON_ICON_LABELS) {
                view.set_attr(button, "aria-label", label);
                labelled += 1;
            }
        }

        for link in view.find_all(Role::SocialLink) {
            let Some(icon) = view.find_within(link, Role::Icon).into_iter().next() else {
                continue;
            };
            if let Some(label) = label_for(&view.class_name(icon), &SOCIAL_ICON_LABELS) {
                view.set_attr(link, "aria-label", label);
                labelled += 1;
            }
        }
        debug!(labelled, "aria labels backfilled");
    }

    /// Document-level keydown.
    pub fn on_keydown(&self, press: KeyPress) -> EventOutcome {
        if press.key == Key::Escape {
            if self.modal.is_open() {
                self.modal.close();
            } else if self.nav.is_open() {
                self.nav.close();
            }
            return EventOutcome::PassThrough;
        }

        if self.modal.is_open() {
            if let Some(dialog) = self.modal.node() {
                return trap_focus(self.host.view(), dialog, press);
            }
        }
        EventOutcome::PassThrough
    }
}
