//! Forwarding to a page-level `gtag` function, when one is loaded.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use vt_core::AnalyticsSink;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default)]
pub struct GtagSink;

impl AnalyticsSink for GtagSink {
    fn forward(&self, event: &str, data: &Value) -> bool {
        let window = gloo_utils::window();
        let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return false;
        };
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            return false;
        };

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let payload = match data.serialize(&serializer) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "could not convert event data");
                return false;
            }
        };
        match gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event),
            &payload,
        ) {
            Ok(_) => true,
            Err(err) => {
                warn!(?err, "gtag call failed");
                false
            }
        }
    }
}
