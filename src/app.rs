// SPDX-License-Identifier: MPL-2.0
//! Page controller wiring the companion layer together.
//!
//! The `App` struct is constructed exactly once per page session. It derives
//! the device profile, applies the desktop adaptation where needed, and
//! attaches the viewer relay and AR trigger. This file keeps the policy
//! decisions (which elements are required, what happens on desktop, where
//! the extension points sit) in one place so the page-facing behavior is
//! easy to audit.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::config::{self, Config};
use crate::device::DeviceProfile;
use crate::diagnostics;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::{self, notifications};
use crate::viewer::{ArTrigger, ViewerRelay};

/// Root page controller.
///
/// Owns the immutable device profile, the single-toast presenter (shared
/// with the handlers), the live event listeners, and the one-shot
/// interaction flag.
pub struct App {
    profile: DeviceProfile,
    has_interacted: Rc<Cell<bool>>,
    relay: ViewerRelay,
    trigger: ArTrigger,
}

impl App {
    /// Mounts the layer onto the page.
    ///
    /// Fails only when the viewer element itself is missing; every other
    /// page element is optional and skipped silently.
    pub fn mount(window: &Window, document: &Document) -> Result<Self> {
        let config = config::load(document);
        let profile = DeviceProfile::detect(window);
        diagnostics::log_startup(window, profile);

        let requested_locale = config
            .language
            .clone()
            .or_else(|| window.navigator().language());
        let i18n = Rc::new(I18n::new(requested_locale.as_deref()));

        notifications::ensure_animation_styles(document)?;
        let presenter = Rc::new(notifications::Presenter::new(
            document.clone(),
            Rc::clone(&i18n),
        ));

        if !profile.is_mobile {
            ui::desktop::apply(document, &config, &i18n)?;
        }

        let viewer = document
            .get_element_by_id(&config.viewer_id)
            .ok_or_else(|| Error::Dom(format!("viewer element #{} not found", config.viewer_id)))?;

        let has_interacted = Rc::new(Cell::new(false));
        let relay = ViewerRelay::attach(&viewer, Rc::clone(&presenter), Rc::clone(&has_interacted));
        let trigger = ArTrigger::attach(document, &config, profile, presenter);

        maybe_register_service_worker(window, &config);

        Ok(Self {
            profile,
            has_interacted,
            relay,
            trigger,
        })
    }

    #[must_use]
    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    /// Whether the user has manipulated the camera at least once.
    #[must_use]
    pub fn has_interacted(&self) -> bool {
        self.has_interacted.get()
    }

    /// Leaks the controller's listeners; the page session owns them from here.
    pub fn forget(self) {
        self.relay.forget();
        self.trigger.forget();
    }
}

/// Extension point for PWA features.
///
/// The capability check is live, but the registration call stays out until a
/// worker script actually ships with the page.
fn maybe_register_service_worker(window: &Window, config: &Config) {
    let navigator = window.navigator();
    let supported =
        Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        return;
    }
    if config.enable_service_worker {
        log::warn!("service worker registration requested but no worker script is wired up");
    } else {
        log::debug!("service worker support detected, registration disabled");
    }
}
