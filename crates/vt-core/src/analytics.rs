//! Lightweight event tracking.
//!
//! Events are always logged; when the page loads an analytics tag the sink
//! forwards them to it as well.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::host::Host;
use crate::role::Role;
use crate::view::Node;

pub trait AnalyticsSink {
    /// Forward an event to the external collector. Returns `false` when none is loaded.
    fn forward(&self, event: &str, data: &Value) -> bool;
}

/// Sink used when no collector is configured.
#[derive(Debug, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn forward(&self, _event: &str, _data: &Value) -> bool {
        false
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClickData {
    pub element_type: String,
    pub element_text: String,
    pub element_class: String,
}

pub struct Tracker {
    host: Host,
}

impl Tracker {
    pub fn new(host: Host) -> Self {
        Self { host }
    }

    pub fn track_event(&self, event: &str, data: Value) {
        let forwarded = self.host.analytics.forward(event, &data);
        info!(%event, %data, forwarded, "event tracked");
    }

    /// Classify a click on any element and track it when it lands on a CTA,
    /// a nav link or a service button.
    pub fn on_document_click(&self, target: Node) {
        let view = &*self.host.view;
        let Some(control) = view.closest(target, Role::TrackedControl) else {
            return;
        };

        let event = if view.has_class(control, "btn-primary") {
            "cta_click"
        } else if view.has_class(control, "nav-link") {
            "navigation_click"
        } else if view.has_class(control, "service-btn") {
            "service_interest"
        } else {
            return;
        };

        let data = ClickData {
            element_type: view.tag(control).to_lowercase(),
            element_text: view.text(control).trim().to_owned(),
            element_class: view.class_name(control),
        };
        match serde_json::to_value(&data) {
            Ok(value) => self.track_event(event, value),
            Err(err) => tracing::warn!("failed to encode click data: {err}"),
        }
    }
}
