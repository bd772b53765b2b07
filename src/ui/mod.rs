// SPDX-License-Identifier: MPL-2.0
//! UI mutations the layer applies to the host page.
//!
//! # Components
//!
//! - [`desktop`] - One-shot page adaptation for non-mobile visitors
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Colors, timing, and layout constants for injected UI

pub mod design_tokens;
pub mod desktop;
pub mod notifications;
