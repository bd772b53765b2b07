// SPDX-License-Identifier: MPL-2.0
//! One-shot page adaptation for non-mobile visitors.
//!
//! Desktop browsers get no AR session, so the page is reshaped to say so:
//! the status badge switches to a viewer-mode label, the AR button is
//! replaced with a disabled-looking hint, and an informational banner is
//! inserted after the model-info block. Each target element is optional on
//! the page; a missing one is skipped silently.
//!
//! Callers must invoke [`apply`] at most once per page load; a second call
//! would insert a second banner.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::Config;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;

/// Class name of the inserted banner.
pub const BANNER_CLASS: &str = "desktop-info";

/// Applies all desktop adaptations.
pub fn apply(document: &Document, config: &Config, i18n: &I18n) -> Result<()> {
    update_status_badge(document, &config.status_badge_selector, i18n);
    disable_ar_button(document, &config.ar_button_id, i18n);
    insert_banner(document, &config.model_info_selector, i18n)
}

fn update_status_badge(document: &Document, selector: &str, i18n: &I18n) {
    if let Ok(Some(badge)) = document.query_selector(selector) {
        badge.set_text_content(Some(&i18n.tr("status-viewer-mode")));
    }
}

fn disable_ar_button(document: &Document, id: &str, i18n: &I18n) {
    let Some(button) = document.get_element_by_id(id) else {
        return;
    };
    button.set_inner_html(&format!(
        "<span class=\"ar-icon\">💻</span><span class=\"ar-text\">{}</span>",
        i18n.tr("ar-button-desktop")
    ));
    if let Some(button) = button.dyn_ref::<HtmlElement>() {
        let style = button.style();
        let _ = style.set_property("cursor", "not-allowed");
        let _ = style.set_property("opacity", "0.6");
    }
}

/// Inserts the informational banner immediately after the model-info element.
fn insert_banner(document: &Document, anchor_selector: &str, i18n: &I18n) -> Result<()> {
    let Ok(Some(anchor)) = document.query_selector(anchor_selector) else {
        return Ok(());
    };
    let Some(parent) = anchor.parent_node() else {
        return Ok(());
    };

    let banner = document.create_element("div")?;
    banner.set_class_name(BANNER_CLASS);
    banner.set_attribute(
        "style",
        &format!(
            "margin-top: 1rem; padding: 1rem; background: {}; \
             border: 1px solid {}; border-radius: 12px; text-align: center; \
             color: {};",
            palette::BANNER_BACKGROUND,
            palette::BANNER_BORDER,
            palette::BANNER_TEXT,
        ),
    )?;
    banner.set_inner_html(&format!(
        "<strong>{}</strong><br><small>{}</small>",
        i18n.tr("desktop-info-title"),
        i18n.tr("desktop-info-body")
    ));

    parent.insert_before(&banner, anchor.next_sibling().as_ref())?;
    Ok(())
}
