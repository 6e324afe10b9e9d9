//! Event binding.
//!
//! Every listener lives for the lifetime of the page, so closures are
//! leaked with `forget` once registered.

use std::rc::Rc;

use vt_core::{EventOutcome, Key, KeyPress, Node, Role, Site, View};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, KeyboardEvent, MediaQueryListEvent};

use crate::dom::DomView;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Attach `handler` for `event` on `target` and leak the closure.
macro_rules! listen {
    ($target:expr, $event:expr, $ty:ty, $handler:expr) => {{
        let cb = Closure::wrap(Box::new($handler) as Box<dyn FnMut($ty)>);
        let _ = $target.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref());
        cb.forget();
    }};
}

fn key_press(event: &KeyboardEvent) -> KeyPress {
    KeyPress {
        key: Key::from_dom(&event.key()),
        shift: event.shift_key(),
    }
}

fn finish(event: &Event, outcome: EventOutcome) {
    if outcome.prevented() {
        event.prevent_default();
    }
}

/// Listen on the element behind `node` for each node in `nodes`.
fn each<F>(dom: &Rc<DomView>, nodes: Vec<Node>, event: &str, handler: F)
where
    F: Fn(Node, Event) + Clone + 'static,
{
    for node in nodes {
        let Some(el) = dom.element(node) else {
            continue;
        };
        let handler = handler.clone();
        listen!(el, event, Event, move |e: Event| handler(node, e));
    }
}

/// Bind all page listeners. Call once after [`Site::init`].
pub fn bind_events(site: &Rc<Site>, dom: &Rc<DomView>) {
    bind_navigation(site, dom);
    bind_theme(site, dom);
    bind_scroll(site, dom);
    bind_portfolio(site, dom);
    bind_testimonials(site, dom);
    bind_contact_form(site, dom);
    bind_modal(site, dom);
    bind_document(site, dom);
}

fn bind_navigation(site: &Rc<Site>, dom: &Rc<DomView>) {
    if let Some(toggle) = dom.find(Role::NavToggle).and_then(|n| dom.element(n)) {
        let s = site.clone();
        listen!(toggle, "click", Event, move |_: Event| s.nav.toggle());
        let s = site.clone();
        listen!(toggle, "keydown", KeyboardEvent, move |e: KeyboardEvent| {
            let outcome = s.nav.on_toggle_key(key_press(&e));
            finish(&e, outcome);
        });
    }

    let s = site.clone();
    each(dom, dom.find_all(Role::HashLink), "click", move |node, e| {
        finish(&e, s.nav.on_anchor_click(node));
    });
}

fn bind_theme(site: &Rc<Site>, dom: &Rc<DomView>) {
    if let Some(toggle) = dom.find(Role::ThemeToggle).and_then(|n| dom.element(n)) {
        let s = site.clone();
        listen!(toggle, "click", Event, move |_: Event| {
            s.theme.toggle_theme();
        });
    }

    if let Ok(Some(query)) = dom.window().match_media(DARK_SCHEME_QUERY) {
        let s = site.clone();
        listen!(query, "change", MediaQueryListEvent, move |e: MediaQueryListEvent| {
            s.theme.on_os_change(e.matches());
        });
    }
}

fn bind_scroll(site: &Rc<Site>, dom: &Rc<DomView>) {
    let s = site.clone();
    let on_scroll =
        Closure::wrap(Box::new(move |_: Event| s.scroll.on_scroll()) as Box<dyn FnMut(_)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = dom
        .window()
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        );
    on_scroll.forget();

    if let Some(button) = dom.find(Role::BackToTop).and_then(|n| dom.element(n)) {
        let s = site.clone();
        listen!(button, "click", Event, move |_: Event| s.scroll.scroll_to_top());
    }
}

fn bind_portfolio(site: &Rc<Site>, dom: &Rc<DomView>) {
    let s = site.clone();
    each(dom, dom.find_all(Role::FilterButton), "click", move |node, _| {
        s.portfolio.on_filter_click(node);
    });
}

fn bind_testimonials(site: &Rc<Site>, dom: &Rc<DomView>) {
    if site.carousel.is_empty() {
        return;
    }
    let Some(slider) = dom.find(Role::TestimonialSlider).and_then(|n| dom.element(n)) else {
        return;
    };
    let s = site.clone();
    listen!(slider, "mouseenter", Event, move |_: Event| s.carousel.on_mouse_enter());
    let s = site.clone();
    listen!(slider, "mouseleave", Event, move |_: Event| s.carousel.on_mouse_leave());
}

fn bind_contact_form(site: &Rc<Site>, dom: &Rc<DomView>) {
    let Some(form) = site.form.form().and_then(|n| dom.element(n)) else {
        return;
    };
    let s = site.clone();
    listen!(form, "submit", Event, move |e: Event| {
        finish(&e, s.form.submit());
    });

    let controls = site.form.controls();
    let s = site.clone();
    each(dom, controls.clone(), "blur", move |node, _| s.form.on_blur(node));
    let s = site.clone();
    each(dom, controls, "input", move |node, _| s.form.on_input(node));

    let s = site.clone();
    each(dom, dom.find_all(Role::PhoneInput), "input", move |node, _| {
        s.form.on_phone_input(node);
    });
}

fn bind_modal(site: &Rc<Site>, dom: &Rc<DomView>) {
    let Some(modal) = site.modal.node().and_then(|n| dom.element(n)) else {
        return;
    };
    let s = site.clone();
    let d = dom.clone();
    listen!(modal, "click", Event, move |e: Event| {
        if let Some(target) = d.node_for_target(e.target()) {
            s.modal.on_backdrop_click(target);
        }
    });
}

fn bind_document(site: &Rc<Site>, dom: &Rc<DomView>) {
    let document = dom.document();

    let s = site.clone();
    let d = dom.clone();
    listen!(document, "click", Event, move |e: Event| {
        if let Some(target) = d.node_for_target(e.target()) {
            s.on_document_click(target);
        }
    });

    let s = site.clone();
    listen!(document, "keydown", KeyboardEvent, move |e: KeyboardEvent| {
        let outcome = s.on_keydown(key_press(&e));
        finish(&e, outcome);
    });
}
