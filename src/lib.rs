// SPDX-License-Identifier: MPL-2.0
//! `ar_companion` is a device-aware enhancement layer for a single AR/3D
//! model-viewer web page, compiled to WebAssembly.
//!
//! It classifies the visiting device (iOS, Android, desktop) from ambient
//! browser signals, adapts the page for desktop visitors, relays load/error
//! status from the embedded viewer element into toast notifications, and adds
//! small cosmetic touches (button press feedback, transient toasts). The
//! viewer element itself is an opaque collaborator: it renders the model and
//! drives AR session activation natively.
//!
//! Pure logic (device classification, payload classification, severity
//! mapping, configuration) is target-independent and tested on the host;
//! everything touching the DOM is exercised under `wasm-bindgen-test`.

#![doc(html_root_url = "https://docs.rs/ar_companion/0.1.0")]

pub mod app;
pub mod config;
pub mod device;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod viewer;

use wasm_bindgen::prelude::*;

/// Module entry point, run once when the wasm module is instantiated.
///
/// Module scripts are deferred, so the document is fully parsed by the time
/// this executes. A mount failure (e.g. the viewer element is missing from
/// the page) is logged rather than propagated; the page itself still works
/// without the companion layer.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second init attempt (test harness, duplicate module load) is harmless.
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = gloo::utils::window();
    let document = gloo::utils::document();
    match app::App::mount(&window, &document) {
        Ok(app) => app.forget(),
        Err(err) => log::error!("page controller failed to mount: {err}"),
    }
    Ok(())
}
