// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast presenter.
//!
//! The presenter owns the "at most one toast on screen" invariant. There is
//! no queue: presenting while a toast is visible removes it immediately and
//! shows the new one in its place.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::Document;

use super::notification::Notification;
use super::toast::{self, TOAST_CLASS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::timing;

pub struct Presenter {
    document: Document,
    i18n: Rc<I18n>,
}

impl Presenter {
    #[must_use]
    pub fn new(document: Document, i18n: Rc<I18n>) -> Self {
        Self { document, i18n }
    }

    /// Shows `notification`, replacing any toast currently on the page.
    ///
    /// Schedules the teardown chain: after the display time the toast plays
    /// its exit animation, and one animation-length later it is removed.
    /// Neither timer is ever cancelled; if a newer toast replaced this one in
    /// the meantime, the element is already detached and removing it again is
    /// a no-op on the stale element only.
    pub fn present(&self, notification: &Notification) {
        if let Ok(Some(existing)) = self.document.query_selector(&format!(".{TOAST_CLASS}")) {
            existing.remove();
        }

        let element = match toast::build(&self.document, notification, &self.i18n) {
            Ok(element) => element,
            Err(err) => {
                log::debug!("toast construction failed: {err}");
                return;
            }
        };
        let Some(body) = self.document.body() else {
            return;
        };
        if body.append_child(&element).is_err() {
            return;
        }

        Timeout::new(timing::TOAST_DISMISS_MS, move || {
            toast::play_exit_animation(&element);
            Timeout::new(timing::TOAST_ANIMATION_MS, move || element.remove()).forget();
        })
        .forget();
    }
}
