use serde::{Deserialize, Serialize};

use crate::escape_html;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    #[serde(other)]
    Info,
}

impl Severity {
    /// Parse a severity key as passed from markup. Unknown keys fall back to `Info`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon name, without the `fa-` prefix.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }

    /// Class list of the notification container.
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.key())
    }
}

/// Inner markup of a notification. The message is escaped.
pub fn render_notification(message: &str, severity: Severity) -> String {
    format!(
        r#"<div class="notification-content"><i class="fas fa-{icon}"></i><span>{message}</span><button class="notification-close" type="button" onclick="this.parentElement.parentElement.remove()"><i class="fas fa-times"></i></button></div>"#,
        icon = severity.icon(),
        message = escape_html(message),
    )
}
