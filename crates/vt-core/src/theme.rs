//! Light/dark theme.
//!
//! The applied theme lives in the `data-theme` attribute of the document
//! root. An explicit choice is persisted under [`THEME_KEY`]; until one
//! exists the page follows the OS colour scheme.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::host::Host;
use crate::role::Role;

pub const THEME_KEY: &str = "theme";
const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon offered by the toggle: the moon invites switching to dark.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme {:?}", self.0)
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

pub struct ThemeController {
    host: Host,
}

impl ThemeController {
    pub fn new(host: Host) -> Self {
        Self { host }
    }

    /// Apply the persisted theme, else the OS preference, else light.
    pub fn init(&self, os_prefers_dark: bool) {
        match self.stored() {
            Some(theme) => self.apply(theme),
            None => self.apply(Theme::from_os(os_prefers_dark)),
        }
    }

    /// Theme currently applied to the document. Defaults to light.
    pub fn current(&self) -> Theme {
        let view = self.host.view();
        view.attr(view.root(), THEME_ATTR)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// Apply and persist an explicit choice.
    pub fn set_theme(&self, theme: Theme) {
        self.apply(theme);
        if let Err(err) = self.host.prefs.set(THEME_KEY, theme.as_str()) {
            warn!("could not persist theme: {err}");
        }
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = self.current().flipped();
        self.set_theme(next);
        next
    }

    /// OS colour-scheme change. Ignored once the visitor has chosen a theme.
    pub fn on_os_change(&self, prefers_dark: bool) {
        if self.stored().is_some() {
            debug!("os theme change ignored: explicit preference stored");
            return;
        }
        self.apply(Theme::from_os(prefers_dark));
    }

    fn stored(&self) -> Option<Theme> {
        let raw = self.host.prefs.get(THEME_KEY)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!("ignoring stored theme: {err}");
                None
            }
        }
    }

    fn apply(&self, theme: Theme) {
        let view = self.host.view();
        view.set_attr(view.root(), THEME_ATTR, theme.as_str());
        if let Some(toggle) = view.find(Role::ThemeToggle) {
            if let Some(icon) = view.find_within(toggle, Role::Icon).into_iter().next() {
                view.set_class_name(icon, theme.toggle_icon());
            }
        }
        debug!(%theme, "theme applied");
    }
}
