//! Functions exposed on `window` for inline `onclick` handlers in the markup.

use serde_json::Value;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::state::with_site;

fn string_arg(value: &JsValue) -> String {
    value.as_string().unwrap_or_default()
}

fn expose(name: &str, function: &JsValue) {
    let window = gloo_utils::window();
    if let Err(err) = js_sys::Reflect::set(&window, &JsValue::from_str(name), function) {
        warn!(%name, ?err, "could not expose window helper");
    }
}

macro_rules! expose0 {
    ($name:expr, $body:expr) => {{
        let cb = Closure::wrap(Box::new(move || with_site($body)) as Box<dyn FnMut()>);
        expose($name, cb.as_ref());
        cb.forget();
    }};
}

macro_rules! expose1 {
    ($name:expr, |$site:ident, $arg:ident| $body:expr) => {{
        let cb = Closure::wrap(Box::new(move |$arg: JsValue| {
            with_site(|$site| $body)
        }) as Box<dyn FnMut(JsValue)>);
        expose($name, cb.as_ref());
        cb.forget();
    }};
}

macro_rules! expose2 {
    ($name:expr, |$site:ident, $a:ident, $b:ident| $body:expr) => {{
        let cb = Closure::wrap(Box::new(move |$a: JsValue, $b: JsValue| {
            with_site(|$site| $body)
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        expose($name, cb.as_ref());
        cb.forget();
    }};
}

pub fn install() {
    expose1!("scrollToSection", |site, id| {
        site.scroller.scroll_to_section(&string_arg(&id))
    });
    expose1!("showTestimonial", |site, index| {
        let index = index.as_f64().unwrap_or(0.0).max(0.0) as usize;
        site.carousel.show(index)
    });
    expose0!("nextTestimonial", |site| site.carousel.next());
    expose0!("prevTestimonial", |site| site.carousel.prev());
    expose1!("openServiceModal", |site, key| {
        site.modal.open(&string_arg(&key))
    });
    expose0!("closeServiceModal", |site| site.modal.close());
    expose2!("showNotification", |site, message, severity| {
        let severity = severity.as_string().unwrap_or_else(|| "info".to_owned());
        site.show_notification(&string_arg(&message), &severity)
    });
    expose2!("trackEvent", |site, name, data| {
        let data = if data.is_undefined() || data.is_null() {
            None
        } else {
            match serde_wasm_bindgen::from_value::<Value>(data) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(%err, "trackEvent data is not JSON-like");
                    None
                }
            }
        };
        site.track_event(&string_arg(&name), data)
    });
}
