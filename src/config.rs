// SPDX-License-Identifier: MPL-2.0
//! Page wiring configuration.
//!
//! The companion layer needs to know which elements on the host page it is
//! responsible for. Pages that follow the default markup need no
//! configuration at all; pages with different ids/selectors can embed a JSON
//! override in an inline `<script>` element:
//!
//! ```html
//! <script type="application/json" id="ar-companion-config">
//!   { "viewer_id": "bowl-viewer", "language": "en-US" }
//! </script>
//! ```
//!
//! A malformed or absent override never fails the mount; it falls back to
//! [`Config::default`].

use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Id of the optional inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "ar-companion-config";

pub const DEFAULT_VIEWER_ID: &str = "model-viewer";
pub const DEFAULT_AR_BUTTON_ID: &str = "ar-button";
pub const DEFAULT_STATUS_BADGE_SELECTOR: &str = ".status-badge span:last-child";
pub const DEFAULT_MODEL_INFO_SELECTOR: &str = ".model-info";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the viewer element. The only element the mount requires.
    pub viewer_id: String,
    /// Id of the AR trigger control. Optional on the page.
    pub ar_button_id: String,
    /// Selector for the status badge text node. Optional on the page.
    pub status_badge_selector: String,
    /// Selector for the model-info element the desktop banner is anchored to.
    pub model_info_selector: String,
    /// Locale override in BCP-47 form (e.g. `en-US`). Defaults to the
    /// browser language.
    pub language: Option<String>,
    /// Extension point; the registration call is currently disabled.
    pub enable_service_worker: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewer_id: DEFAULT_VIEWER_ID.to_string(),
            ar_button_id: DEFAULT_AR_BUTTON_ID.to_string(),
            status_badge_selector: DEFAULT_STATUS_BADGE_SELECTOR.to_string(),
            model_info_selector: DEFAULT_MODEL_INFO_SELECTOR.to_string(),
            language: None,
            enable_service_worker: false,
        }
    }
}

/// Parses a configuration override from JSON.
pub fn from_json(content: &str) -> Result<Config> {
    Ok(serde_json::from_str(content)?)
}

/// Loads the page configuration from the inline config element, if present.
///
/// Parse failures are logged and fall back to defaults so that a typo in the
/// page markup cannot take the whole layer down.
pub fn load(document: &Document) -> Config {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Config::default();
    };
    let content = element.text_content().unwrap_or_default();
    from_json(&content).unwrap_or_else(|err| {
        log::warn!("invalid page config, using defaults: {err}");
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_documented_selectors() {
        let config = Config::default();
        assert_eq!(config.viewer_id, "model-viewer");
        assert_eq!(config.ar_button_id, "ar-button");
        assert_eq!(config.status_badge_selector, ".status-badge span:last-child");
        assert_eq!(config.model_info_selector, ".model-info");
        assert!(config.language.is_none());
        assert!(!config.enable_service_worker);
    }

    #[test]
    fn from_json_parses_full_override() {
        let config = from_json(
            r##"{
                "viewer_id": "bowl-viewer",
                "ar_button_id": "ar-cta",
                "status_badge_selector": "#badge",
                "model_info_selector": "#info",
                "language": "en-US",
                "enable_service_worker": true
            }"##,
        )
        .expect("valid config should parse");

        assert_eq!(config.viewer_id, "bowl-viewer");
        assert_eq!(config.ar_button_id, "ar-cta");
        assert_eq!(config.status_badge_selector, "#badge");
        assert_eq!(config.model_info_selector, "#info");
        assert_eq!(config.language.as_deref(), Some("en-US"));
        assert!(config.enable_service_worker);
    }

    #[test]
    fn from_json_partial_override_keeps_remaining_defaults() {
        let config = from_json(r#"{ "viewer_id": "bowl-viewer" }"#).expect("should parse");
        assert_eq!(config.viewer_id, "bowl-viewer");
        assert_eq!(config.ar_button_id, DEFAULT_AR_BUTTON_ID);
        assert!(config.language.is_none());
    }

    #[test]
    fn from_json_rejects_malformed_content() {
        assert!(from_json("not = valid = json").is_err());
        assert!(from_json("").is_err());
    }
}
