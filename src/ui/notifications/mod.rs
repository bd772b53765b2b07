// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts appear temporarily in the top-right
//! corner to inform the user about viewer events (model loaded, load errors,
//! AR availability) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`presenter`] - Single-slot `Presenter` owning the display lifecycle
//! - [`toast`] - DOM construction for individual toasts
//!
//! # Design Considerations
//!
//! - At most one toast is on screen; a new one replaces the current one
//!   immediately, with no exit animation for the replaced toast
//! - Display time: 4s, then a 300ms slide-out before removal
//! - Teardown timers are never cancelled; a stale timer firing after its
//!   toast was superseded must do nothing

mod notification;
mod presenter;
mod toast;

pub use notification::{Notification, Severity};
pub use presenter::Presenter;
pub use toast::{ensure_animation_styles, TOAST_CLASS};
