//! Interaction logic for the Vitrine agency site.
//!
//! Components talk to the page only through the [`View`], [`Scheduler`],
//! [`PreferenceStore`] and [`AnalyticsSink`] traits bundled in a [`Host`],
//! so everything here runs unchanged under `cargo test` with the fakes in
//! [`testing`].

pub mod a11y;
pub mod analytics;
pub mod animator;
pub mod carousel;
pub mod config;
pub mod error;
pub mod form;
pub mod host;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod perf;
pub mod portfolio;
pub mod prefs;
pub mod role;
pub mod scheduler;
pub mod scroll;
pub mod site;
pub mod smooth_scroll;
pub mod theme;
pub mod view;

#[cfg(test)]
mod testing;

pub use analytics::{AnalyticsSink, NoopSink, Tracker};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use host::Host;
pub use prefs::PreferenceStore;
pub use role::Role;
pub use scheduler::{Scheduler, TaskHandle, TaskSlot};
pub use site::Site;
pub use theme::{Theme, ThemeController};
pub use view::{EventOutcome, Key, KeyPress, Node, View};
