// SPDX-License-Identifier: MPL-2.0
//! Pure classification of viewer event payloads.
//!
//! The viewer attaches a `detail` object to its custom events. Absent or
//! malformed payloads are not errors here; they classify the same way an
//! empty object would.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Event};

/// Wording classes for a failed model load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The viewer reported `loadfailure`: asset missing or not a model format.
    NotFound,
    /// Anything else, including an absent detail payload.
    Generic,
}

impl LoadError {
    #[must_use]
    pub fn classify(detail_type: Option<&str>) -> Self {
        match detail_type {
            Some("loadfailure") => LoadError::NotFound,
            _ => LoadError::Generic,
        }
    }

    /// Returns the i18n message key for this error's toast.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            LoadError::NotFound => "notification-load-error-not-found",
            LoadError::Generic => "notification-load-error-generic",
        }
    }
}

/// AR session states reported through `ar-status` that the layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArStatus {
    SessionStarted,
    NotPresenting,
}

impl ArStatus {
    /// Parses a status string; unknown or absent states yield `None`.
    #[must_use]
    pub fn parse(status: Option<&str>) -> Option<Self> {
        match status {
            Some("session-started") => Some(ArStatus::SessionStarted),
            Some("not-presenting") => Some(ArStatus::NotPresenting),
            _ => None,
        }
    }

    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            ArStatus::SessionStarted => "AR session started",
            ArStatus::NotPresenting => "AR session ended",
        }
    }
}

/// Extracts a string field from an event's `detail` payload.
///
/// Returns `None` for plain events, non-object details, and missing or
/// non-string fields.
#[must_use]
pub fn detail_field(event: &Event, field: &str) -> Option<String> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    if !detail.is_object() {
        return None;
    }
    js_sys::Reflect::get(&detail, &JsValue::from_str(field))
        .ok()?
        .as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loadfailure_classifies_as_not_found() {
        assert_eq!(
            LoadError::classify(Some("loadfailure")),
            LoadError::NotFound
        );
    }

    #[test]
    fn other_and_absent_types_classify_as_generic() {
        assert_eq!(LoadError::classify(Some("networkfailure")), LoadError::Generic);
        assert_eq!(LoadError::classify(Some("")), LoadError::Generic);
        assert_eq!(LoadError::classify(None), LoadError::Generic);
    }

    #[test]
    fn load_error_message_keys_differ() {
        assert_ne!(
            LoadError::NotFound.message_key(),
            LoadError::Generic.message_key()
        );
    }

    #[test]
    fn ar_status_parses_known_states() {
        assert_eq!(
            ArStatus::parse(Some("session-started")),
            Some(ArStatus::SessionStarted)
        );
        assert_eq!(
            ArStatus::parse(Some("not-presenting")),
            Some(ArStatus::NotPresenting)
        );
    }

    #[test]
    fn ar_status_ignores_unknown_states() {
        assert_eq!(ArStatus::parse(Some("object-placed")), None);
        assert_eq!(ArStatus::parse(None), None);
    }

    #[test]
    fn ar_status_descriptions_name_the_transition() {
        assert!(ArStatus::SessionStarted.describe().contains("started"));
        assert!(ArStatus::NotPresenting.describe().contains("ended"));
    }
}
