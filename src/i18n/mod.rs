// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for user-facing strings.
//!
//! All text the layer injects into the page (toast messages, the desktop
//! banner, the status badge label) is resolved through Fluent from `.ftl`
//! resources embedded at compile time. The locale comes from the page
//! configuration override when set, otherwise from the browser language,
//! falling back to `en-US`.

pub mod fluent;
