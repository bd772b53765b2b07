// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;

/// Severity level determines the toast's background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Error requiring the user's attention.
    Error,
    /// Neutral informational message; also the fallback for anything
    /// unrecognized.
    #[default]
    Info,
}

impl Severity {
    /// Returns the CSS background color for this severity level.
    #[must_use]
    pub fn css_color(self) -> &'static str {
        match self {
            Severity::Success => palette::SUCCESS,
            Severity::Error => palette::ERROR,
            Severity::Info => palette::INFO,
        }
    }

    /// Returns the CSS class suffix for this severity level.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
        }
    }

    /// Parses a severity name; unrecognized input falls back to `Info`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// A notification to be displayed to the user.
///
/// Carries a message key resolved through the i18n catalog at display time.
#[derive(Debug, Clone)]
pub struct Notification {
    severity: Severity,
    message_key: String,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.css_color(), Severity::Error.css_color());
        assert_ne!(Severity::Success.css_color(), Severity::Info.css_color());
        assert_ne!(Severity::Error.css_color(), Severity::Info.css_color());
    }

    #[test]
    fn parse_recognizes_known_severities() {
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("Error"), Severity::Error);
    }

    #[test]
    fn parse_falls_back_to_info() {
        assert_eq!(Severity::parse("warning"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
        assert_eq!(Severity::parse("fatal"), Severity::Info);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("k").severity(), Severity::Success);
        assert_eq!(Notification::error("k").severity(), Severity::Error);
        assert_eq!(Notification::info("k").severity(), Severity::Info);
    }

    #[test]
    fn notification_keeps_message_key() {
        let notification = Notification::success("notification-model-loaded");
        assert_eq!(notification.message_key(), "notification-model-loaded");
    }
}
