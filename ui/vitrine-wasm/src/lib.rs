//! Vitrine site front-end.
//!
//! Binds the `vt-core` components to the live document: concrete `View`,
//! timers, storage and analytics implementations, event listeners, and the
//! window-level helpers the markup calls from inline handlers.

pub mod analytics;
pub mod dom;
pub mod events;
pub mod globals;
pub mod logging;
pub mod observer;
pub mod scheduler;
pub mod state;
pub mod storage;

use std::rc::Rc;

use tracing::warn;
use vt_core::{Host, Site, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CONFIG_SCRIPT_ID: &str = "site-config";

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let raw = config_source();
    let parsed = SiteConfig::from_json(&raw);
    let config = match &parsed {
        Ok(config) => config.clone(),
        Err(_) => SiteConfig::default(),
    };
    logging::init(&config.log_filter);
    logging::watch_window_errors();
    if let Err(err) = parsed {
        warn!(%err, "ignoring page config");
    }

    globals::install();

    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move || {
            if let Err(err) = init(config) {
                tracing::error!(?err, "site initialisation failed");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        Ok(())
    } else {
        init(config)
    }
}

/// Text of `<script id="site-config" type="application/json">`, if present.
fn config_source() -> String {
    gloo_utils::document()
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn os_prefers_dark() -> bool {
    matches!(
        gloo_utils::window().match_media(events::DARK_SCHEME_QUERY),
        Ok(Some(query)) if query.matches()
    )
}

/// Main initialisation sequence, once the document is parsed.
fn init(config: SiteConfig) -> Result<(), JsValue> {
    let dom = Rc::new(dom::DomView::new()?);
    let host = Host {
        view: dom.clone(),
        scheduler: Rc::new(scheduler::BrowserScheduler::new()),
        prefs: Rc::new(storage::LocalPreferences::new()),
        analytics: Rc::new(analytics::GtagSink),
        config: Rc::new(config),
    };

    let site = Rc::new(Site::new(host));
    site.init(os_prefers_dark());
    events::bind_events(&site, &dom);
    observer::observe_all(&site, &dom);
    state::install(site);
    Ok(())
}
