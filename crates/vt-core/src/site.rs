//! Every page component wired to one [`Host`].
//!
//! The browser crate builds a single `Site`, calls [`Site::init`] once the
//! document is ready, and routes DOM events to the fields or to the
//! document-level handlers below.

use std::rc::Rc;

use serde_json::Value;
use tracing::info;
use vt_content::Severity;

use crate::a11y::{Accessibility, LiveRegion};
use crate::analytics::Tracker;
use crate::animator::RevealAnimator;
use crate::carousel::Carousel;
use crate::form::ContactForm;
use crate::host::Host;
use crate::modal::ServiceModal;
use crate::nav::NavController;
use crate::notify::Notifier;
use crate::perf::{LazyImages, LoadingScreen, preload_fonts};
use crate::portfolio::PortfolioFilter;
use crate::role::Role;
use crate::scroll::ScrollEngine;
use crate::smooth_scroll::SmoothScroller;
use crate::theme::ThemeController;
use crate::view::{EventOutcome, KeyPress, Node};

pub struct Site {
    pub host: Host,
    pub loading: Rc<LoadingScreen>,
    pub theme: ThemeController,
    pub scroller: Rc<SmoothScroller>,
    pub nav: Rc<NavController>,
    pub scroll: Rc<ScrollEngine>,
    pub animator: RevealAnimator,
    pub carousel: Rc<Carousel>,
    pub portfolio: Rc<PortfolioFilter>,
    pub live: Rc<LiveRegion>,
    pub notifier: Rc<Notifier>,
    pub form: Rc<ContactForm>,
    pub modal: Rc<ServiceModal>,
    pub a11y: Accessibility,
    pub lazy_images: LazyImages,
    pub tracker: Tracker,
}

impl Site {
    pub fn new(host: Host) -> Self {
        let scroller = SmoothScroller::new(host.clone());
        let nav = Rc::new(NavController::new(host.clone(), scroller.clone()));
        let modal = Rc::new(ServiceModal::new(host.clone()));
        let live = LiveRegion::new(host.clone());
        let notifier = Notifier::new(host.clone(), live.clone());

        Self {
            loading: LoadingScreen::new(host.clone()),
            theme: ThemeController::new(host.clone()),
            scroll: ScrollEngine::new(host.clone(), scroller.clone()),
            animator: RevealAnimator::new(host.clone()),
            carousel: Carousel::new(host.clone()),
            portfolio: PortfolioFilter::new(host.clone()),
            form: ContactForm::new(host.clone(), notifier.clone()),
            a11y: Accessibility::new(host.clone(), nav.clone(), modal.clone()),
            lazy_images: LazyImages::new(host.clone()),
            tracker: Tracker::new(host.clone()),
            scroller,
            nav,
            modal,
            live,
            notifier,
            host,
        }
    }

    /// One-time page setup. Listener registration is left to the caller.
    pub fn init(&self, os_prefers_dark: bool) {
        self.loading.schedule_hide();
        self.theme.init(os_prefers_dark);
        self.carousel.start();
        self.live.install();
        self.a11y.install();
        preload_fonts(&self.host);
        info!(
            testimonials = self.carousel.len(),
            theme = %self.theme.current(),
            "site initialised"
        );
    }

    /// Document-level click: outside-menu dismissal, menu links and analytics.
    pub fn on_document_click(&self, target: Node) {
        let view = self.host.view();
        if view.closest(target, Role::NavLink).is_some() {
            self.nav.close();
        } else {
            self.nav.on_document_click(target);
        }
        self.tracker.on_document_click(target);
    }

    pub fn on_keydown(&self, press: KeyPress) -> EventOutcome {
        self.a11y.on_keydown(press)
    }

    /// `showNotification(message, type)` from markup.
    pub fn show_notification(&self, message: &str, severity: &str) {
        self.notifier.show(message, Severity::from_key(severity));
    }

    /// `trackEvent(name, data)` from markup; missing data is an empty object.
    pub fn track_event(&self, name: &str, data: Option<Value>) {
        let data = data.unwrap_or_else(|| Value::Object(Default::default()));
        self.tracker.track_event(name, data);
    }
}
