//! IntersectionObserver wiring for reveal animations and deferred images.

use std::rc::Rc;

use tracing::{debug, warn};
use vt_core::Site;
use vt_core::animator::{OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::DomView;

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn entries(raw: &js_sys::Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    raw.iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
}

pub fn observe_reveals(site: &Rc<Site>, dom: &Rc<DomView>) -> Result<(), JsValue> {
    let s = site.clone();
    let d = dom.clone();
    let callback: EntryCallback = Closure::wrap(Box::new(
        move |raw: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries(&raw) {
                let node = d.node_for(&entry.target());
                s.animator.on_intersect(node, entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    init.set_root_margin(OBSERVER_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let targets = site.animator.targets();
    for node in &targets {
        if let Some(el) = dom.element(*node) {
            observer.observe(&el);
        }
    }
    debug!(count = targets.len(), "reveal targets observed");
    callback.forget();
    Ok(())
}

pub fn observe_lazy_images(site: &Rc<Site>, dom: &Rc<DomView>) -> Result<(), JsValue> {
    let targets = site.lazy_images.targets();
    if targets.is_empty() {
        return Ok(());
    }

    let s = site.clone();
    let d = dom.clone();
    let callback: EntryCallback = Closure::wrap(Box::new(
        move |raw: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries(&raw) {
                let target = entry.target();
                let node = d.node_for(&target);
                if s.lazy_images.on_intersect(node, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    for node in &targets {
        if let Some(el) = dom.element(*node) {
            observer.observe(&el);
        }
    }
    callback.forget();
    Ok(())
}

/// Start both observers. Browsers without IntersectionObserver keep working,
/// just without reveal animations and deferred images.
pub fn observe_all(site: &Rc<Site>, dom: &Rc<DomView>) {
    if let Err(err) = observe_reveals(site, dom) {
        warn!(?err, "reveal observer unavailable");
    }
    if let Err(err) = observe_lazy_images(site, dom) {
        warn!(?err, "lazy image observer unavailable");
    }
}
