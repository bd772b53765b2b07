// SPDX-License-Identifier: MPL-2.0
//! Best-effort startup diagnostics.
//!
//! Everything in this module is log-only: a device report emitted once at
//! mount, and a heap snapshot read from the non-standard `performance.memory`
//! object where the browser exposes it. Loss of either has no functional
//! impact on the page.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::device::DeviceProfile;

const BYTES_PER_MIB: f64 = 1_048_576.0;

/// One-shot device report logged at mount for debugging in the field.
#[derive(Debug, Clone, Serialize)]
pub struct StartupReport {
    #[serde(flatten)]
    pub profile: DeviceProfile,
    pub user_agent: String,
    pub platform: String,
}

impl StartupReport {
    #[must_use]
    pub fn collect(window: &Window, profile: DeviceProfile) -> Self {
        let navigator = window.navigator();
        Self {
            profile,
            user_agent: navigator.user_agent().unwrap_or_default(),
            platform: navigator.platform().unwrap_or_default(),
        }
    }

    pub fn log(&self) {
        match serde_json::to_string(self) {
            Ok(json) => log::info!("device info: {json}"),
            Err(err) => log::debug!("device report serialization failed: {err}"),
        }
    }
}

/// JS heap usage in whole MiB, as reported by `performance.memory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub used_mb: u64,
    pub total_mb: u64,
}

impl MemorySnapshot {
    #[must_use]
    pub fn from_bytes(used: f64, total: f64) -> Self {
        Self {
            used_mb: (used / BYTES_PER_MIB).round() as u64,
            total_mb: (total / BYTES_PER_MIB).round() as u64,
        }
    }

    /// Reads `performance.memory` via reflection.
    ///
    /// The property is Chromium-only and was never standardized, so every
    /// step tolerates a missing or differently-shaped object.
    #[must_use]
    pub fn capture(window: &Window) -> Option<Self> {
        let performance = window.performance()?;
        let memory =
            Reflect::get(performance.as_ref(), &JsValue::from_str("memory")).ok()?;
        if memory.is_undefined() || memory.is_null() {
            return None;
        }
        let used = Reflect::get(&memory, &JsValue::from_str("usedJSHeapSize"))
            .ok()?
            .as_f64()?;
        let total = Reflect::get(&memory, &JsValue::from_str("totalJSHeapSize"))
            .ok()?
            .as_f64()?;
        Some(Self::from_bytes(used, total))
    }
}

/// Logs the startup report and, where available, a heap snapshot.
pub fn log_startup(window: &Window, profile: DeviceProfile) {
    StartupReport::collect(window, profile).log();
    if let Some(memory) = MemorySnapshot::capture(window) {
        log::info!(
            "memory usage: {} MB used / {} MB total",
            memory.used_mb,
            memory.total_mb
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_rounds_to_whole_mib() {
        let snapshot = MemorySnapshot::from_bytes(10.0 * BYTES_PER_MIB, 32.0 * BYTES_PER_MIB);
        assert_eq!(snapshot.used_mb, 10);
        assert_eq!(snapshot.total_mb, 32);
    }

    #[test]
    fn from_bytes_rounds_half_up() {
        let snapshot = MemorySnapshot::from_bytes(1.5 * BYTES_PER_MIB, 2.4 * BYTES_PER_MIB);
        assert_eq!(snapshot.used_mb, 2);
        assert_eq!(snapshot.total_mb, 2);
    }

    #[test]
    fn startup_report_serializes_flat_profile() {
        let report = StartupReport {
            profile: DeviceProfile::classify("Mozilla/5.0 (iPhone)", false, true),
            user_agent: "Mozilla/5.0 (iPhone)".to_string(),
            platform: "iPhone".to_string(),
        };
        let json = serde_json::to_string(&report).expect("report should serialize");
        assert!(json.contains("\"is_ios\":true"));
        assert!(json.contains("\"ar_supported\":true"));
        assert!(json.contains("\"platform\":\"iPhone\""));
    }
}
