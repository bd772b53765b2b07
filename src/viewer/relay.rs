// SPDX-License-Identifier: MPL-2.0
//! Event listeners translating viewer events into toasts and logs.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Element;

use super::events::{self, ArStatus, LoadError};
use crate::ui::notifications::{Notification, Presenter};

/// Subscriptions to the viewer element's lifecycle and status events.
///
/// Dropping the relay detaches the listeners; [`ViewerRelay::forget`] leaks
/// them for page-lifetime use.
pub struct ViewerRelay {
    listeners: Vec<EventListener>,
}

impl ViewerRelay {
    /// Attaches the `load`, `error`, `ar-status`, and `camera-change`
    /// listeners to the viewer element.
    pub fn attach(
        viewer: &Element,
        presenter: Rc<Presenter>,
        has_interacted: Rc<Cell<bool>>,
    ) -> Self {
        let mut listeners = Vec::with_capacity(4);

        {
            let presenter = Rc::clone(&presenter);
            listeners.push(EventListener::new(viewer, "load", move |_event| {
                log::info!("3D model loaded");
                presenter.present(&Notification::success("notification-model-loaded"));
            }));
        }

        {
            let presenter = Rc::clone(&presenter);
            listeners.push(EventListener::new(viewer, "error", move |event| {
                let detail_type = events::detail_field(event, "type");
                log::error!("model load failed (type: {:?})", detail_type);
                let error = LoadError::classify(detail_type.as_deref());
                presenter.present(&Notification::error(error.message_key()));
                log::info!("check that the USDZ/GLB file path is correct and reachable");
            }));
        }

        listeners.push(EventListener::new(viewer, "ar-status", move |event| {
            let status = events::detail_field(event, "status");
            log::debug!("ar status: {:?}", status);
            if let Some(status) = ArStatus::parse(status.as_deref()) {
                log::info!("{}", status.describe());
            }
        }));

        listeners.push(EventListener::new(viewer, "camera-change", move |_event| {
            // First manipulation only; later events are no-ops.
            if !has_interacted.replace(true) {
                log::info!("user interacted with the 3D model");
            }
        }));

        Self { listeners }
    }

    /// Leaks the listeners so they live for the rest of the page session.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}
