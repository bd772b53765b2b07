// SPDX-License-Identifier: MPL-2.0
//! Click handling for the AR trigger control.
//!
//! On mobile the viewer element activates the AR session natively, so the
//! handler only provides press feedback. On desktop it explains why nothing
//! is going to happen.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::Config;
use crate::device::DeviceProfile;
use crate::ui::design_tokens::timing;
use crate::ui::notifications::{Notification, Presenter};

const PRESSED_TRANSFORM: &str = "translateX(-50%) scale(0.95)";
const RESTED_TRANSFORM: &str = "translateX(-50%) scale(1)";

/// Click subscription on the AR trigger control, if the page has one.
pub struct ArTrigger {
    listener: Option<EventListener>,
}

impl ArTrigger {
    /// Attaches the click handler. A page without the trigger control gets an
    /// inert `ArTrigger`.
    pub fn attach(
        document: &Document,
        config: &Config,
        profile: DeviceProfile,
        presenter: Rc<Presenter>,
    ) -> Self {
        let Some(button) = document.get_element_by_id(&config.ar_button_id) else {
            return Self { listener: None };
        };

        let target = button.clone();
        let listener = EventListener::new(&button, "click", move |_event| {
            if profile.is_mobile {
                log::info!("AR button clicked, handing off to the viewer");
                press_effect(&target);
            } else {
                presenter.present(&Notification::info("notification-ar-unavailable"));
            }
        });

        Self {
            listener: Some(listener),
        }
    }

    /// Leaks the listener so it lives for the rest of the page session.
    pub fn forget(self) {
        if let Some(listener) = self.listener {
            listener.forget();
        }
    }
}

/// Scales the button down and restores it shortly after.
///
/// Rapid clicks may stack restore timers; the effect is cosmetic and the
/// last timer wins.
fn press_effect(button: &Element) {
    let Some(button) = button.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = button.style().set_property("transform", PRESSED_TRANSFORM);
    let button = button.clone();
    Timeout::new(timing::PRESS_RESTORE_MS, move || {
        let _ = button.style().set_property("transform", RESTED_TRANSFORM);
    })
    .forget();
}
