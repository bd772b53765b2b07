// SPDX-License-Identifier: MPL-2.0
//! DOM construction for individual toasts.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::notification::Notification;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, palette, timing};

/// Class name shared by every toast; the presenter uses it to find and
/// replace the current toast.
pub const TOAST_CLASS: &str = "notification";

const STYLE_ELEMENT_ID: &str = "ar-companion-animations";

const KEYFRAMES: &str = "\
@keyframes slideInRight {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}";

/// Injects the slide-in/slide-out keyframes into the document head.
///
/// Idempotent: a second call finds the style element by id and does nothing.
pub fn ensure_animation_styles(document: &Document) -> Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(KEYFRAMES));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

/// Builds a toast element with the resolved message and entrance animation.
pub fn build(document: &Document, notification: &Notification, i18n: &I18n) -> Result<Element> {
    let severity = notification.severity();
    let element = document.create_element("div")?;
    element.set_class_name(&format!("{TOAST_CLASS} {}", severity.css_class()));
    element.set_text_content(Some(&i18n.tr(notification.message_key())));
    element.set_attribute(
        "style",
        &format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
             background: {}; color: {}; border-radius: 12px; \
             box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3); z-index: {}; \
             max-width: {}; font-size: 0.9rem; \
             animation: slideInRight {}ms ease-out;",
            severity.css_color(),
            palette::TOAST_TEXT,
            layout::TOAST_Z_INDEX,
            layout::TOAST_MAX_WIDTH,
            timing::TOAST_ANIMATION_MS,
        ),
    )?;
    Ok(element)
}

/// Switches a toast to its exit animation, leaving the rest of its inline
/// style untouched.
pub fn play_exit_animation(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(
            "animation",
            &format!("slideOutRight {}ms ease-out", timing::TOAST_ANIMATION_MS),
        );
    }
}
