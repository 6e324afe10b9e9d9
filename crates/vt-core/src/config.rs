//! Site tuning knobs.
//!
//! Defaults reproduce the production site. A page may override any subset by
//! embedding JSON in `<script id="site-config" type="application/json">`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset past which the navbar gets `scrolled`.
    pub navbar_scrolled_px: f64,
    /// Scroll offset past which the back-to-top button is shown.
    pub back_to_top_px: f64,
    /// Height of the fixed header subtracted from smooth-scroll targets.
    pub header_offset_px: f64,
    pub smooth_scroll_ms: f64,

    pub shape_parallax_base: f64,
    pub card_parallax_base: f64,
    pub parallax_step: f64,
    /// Degrees of rotation per scrolled pixel for hero shapes.
    pub shape_rotation_factor: f64,

    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,

    pub carousel_interval_ms: u32,
    pub filter_fade_in_ms: u32,
    pub filter_fade_out_ms: u32,
    pub submit_delay_ms: u32,

    pub notification_show_ms: u32,
    pub notification_dismiss_ms: u32,
    pub notification_remove_ms: u32,
    pub announcement_clear_ms: u32,

    pub loading_hide_ms: u32,
    pub loading_remove_ms: u32,

    pub preload_font_href: String,
    /// `tracing` filter directive used by the browser log subscriber.
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_px: 100.0,
            back_to_top_px: 500.0,
            header_offset_px: 70.0,
            smooth_scroll_ms: 800.0,
            shape_parallax_base: 0.5,
            card_parallax_base: 0.3,
            parallax_step: 0.1,
            shape_rotation_factor: 0.05,
            counter_duration_ms: 2000.0,
            counter_frame_ms: 16.0,
            carousel_interval_ms: 5000,
            filter_fade_in_ms: 10,
            filter_fade_out_ms: 300,
            submit_delay_ms: 2000,
            notification_show_ms: 100,
            notification_dismiss_ms: 5000,
            notification_remove_ms: 300,
            announcement_clear_ms: 1000,
            loading_hide_ms: 1500,
            loading_remove_ms: 500,
            preload_font_href: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800&display=swap".to_owned(),
            log_filter: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Per-frame counter increment for a given target.
    pub fn counter_step(&self, target: f64) -> f64 {
        target / (self.counter_duration_ms / self.counter_frame_ms)
    }
}
