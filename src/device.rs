// SPDX-License-Identifier: MPL-2.0
//! Device classification from ambient browser signals.
//!
//! The profile is derived exactly once at mount and never mutated. The
//! classification is a pure function of the user-agent string plus two
//! presence probes, so it stays deterministic and testable off-browser.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::Window;

const IOS_MARKERS: [&str; 3] = ["iPad", "iPhone", "iPod"];
const ANDROID_MARKER: &str = "Android";

/// Immutable classification of the visiting client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceProfile {
    pub is_ios: bool,
    pub is_android: bool,
    pub is_mobile: bool,
    pub ar_supported: bool,
}

impl DeviceProfile {
    /// Classifies a device from its raw signals.
    ///
    /// `ms_stream` excludes IE/Edge on Windows devices whose user agent
    /// impersonates an iPad. `xr_present` is a presence probe of the `xr`
    /// property on the navigator; it does not guarantee a usable AR session.
    #[must_use]
    pub fn classify(user_agent: &str, ms_stream: bool, xr_present: bool) -> Self {
        let is_ios = IOS_MARKERS.iter().any(|marker| user_agent.contains(marker)) && !ms_stream;
        let is_android = user_agent.contains(ANDROID_MARKER);
        Self {
            is_ios,
            is_android,
            is_mobile: is_ios || is_android,
            ar_supported: xr_present,
        }
    }

    /// Reads the ambient signals from the browser and classifies them.
    #[must_use]
    pub fn detect(window: &Window) -> Self {
        let navigator = window.navigator();
        let user_agent = navigator.user_agent().unwrap_or_default();
        let ms_stream = Reflect::get(window.as_ref(), &JsValue::from_str("MSStream"))
            .map(|value| value.is_truthy())
            .unwrap_or(false);
        let xr_present =
            Reflect::has(navigator.as_ref(), &JsValue::from_str("xr")).unwrap_or(false);
        Self::classify(&user_agent, ms_stream, xr_present)
    }
}
