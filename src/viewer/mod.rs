// SPDX-License-Identifier: MPL-2.0
//! Integration with the embedded viewer element.
//!
//! The viewer is an opaque collaborator: it renders the model, owns camera
//! controls, and activates AR sessions natively. This module listens to the
//! events it raises and to clicks on the AR trigger control.
//!
//! # Components
//!
//! - [`events`] - Pure classification of event payloads
//! - [`relay`] - Event listeners translating viewer events into toasts/logs
//! - [`trigger`] - Click handling for the AR trigger control

pub mod events;
pub mod relay;
pub mod trigger;

pub use relay::ViewerRelay;
pub use trigger::ArTrigger;
