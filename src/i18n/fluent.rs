// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    /// Builds the catalog from the embedded `.ftl` resources and resolves the
    /// requested locale against them.
    pub fn new(requested: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap();
        let current_locale = resolve_locale(requested, &available_locales)
            .unwrap_or(default_locale);

        Self {
            bundles,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves a message key; an unknown key echoes back as-is.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        key.to_string()
    }
}

/// Picks the first available locale matching the request by exact tag, then
/// by primary language.
fn resolve_locale(
    requested: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let requested: LanguageIdentifier = requested?.parse().ok()?;
    if available.contains(&requested) {
        return Some(requested);
    }
    available
        .iter()
        .find(|candidate| candidate.language == requested.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_en_us() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn unknown_request_falls_back_to_default() {
        let i18n = I18n::new(Some("xx-XX"));
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn unparsable_request_falls_back_to_default() {
        let i18n = I18n::new(Some("not a locale!"));
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn primary_language_matches_regional_request() {
        // `en-GB` is not shipped, but `en-US` shares the primary language.
        let i18n = I18n::new(Some("en-GB"));
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn tr_resolves_known_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("status-viewer-mode"), "3D Viewer Mode");
    }

    #[test]
    fn tr_echoes_unknown_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "no-such-key");
    }
}
