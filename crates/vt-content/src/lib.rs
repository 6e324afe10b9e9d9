//! Static copy for the Vitrine site.
//!
//! Everything a visitor reads that is produced by code rather than markup
//! lives here: the service catalogue shown in the modal, notification
//! severities, and the pt-BR interface strings.

pub mod notice;
pub mod services;
pub mod strings;

pub use notice::Severity;
pub use services::{PriceTier, Service, ServiceContent};

/// Escape text for insertion into an HTML fragment.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
