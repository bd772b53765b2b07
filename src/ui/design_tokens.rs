// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the UI the layer injects.
//!
//! The host page owns its own stylesheet; everything here applies only to the
//! elements this crate creates (toasts, the desktop banner). Values are CSS
//! literals so they can be assembled straight into inline styles.

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    // Severity accents for toasts.
    pub const SUCCESS: &str = "rgba(79, 172, 254, 0.9)";
    pub const ERROR: &str = "rgba(245, 87, 108, 0.9)";
    pub const INFO: &str = "rgba(102, 126, 234, 0.9)";

    // Desktop banner accents (muted variants of the error accent).
    pub const BANNER_BACKGROUND: &str = "rgba(245, 87, 108, 0.1)";
    pub const BANNER_BORDER: &str = "rgba(245, 87, 108, 0.3)";
    pub const BANNER_TEXT: &str = "rgba(255, 255, 255, 0.8)";

    pub const TOAST_TEXT: &str = "white";
}

// ============================================================================
// Timing
// ============================================================================

pub mod timing {
    /// How long a toast stays on screen before its exit animation starts.
    pub const TOAST_DISMISS_MS: u32 = 4_000;
    /// Duration of the slide-in/slide-out animations.
    pub const TOAST_ANIMATION_MS: u32 = 300;
    /// How long the AR button stays scaled down after a press.
    pub const PRESS_RESTORE_MS: u32 = 200;
}

// ============================================================================
// Layout
// ============================================================================

pub mod layout {
    pub const TOAST_MAX_WIDTH: &str = "350px";
    pub const TOAST_Z_INDEX: &str = "1000";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(palette::SUCCESS, palette::ERROR);
        assert_ne!(palette::SUCCESS, palette::INFO);
        assert_ne!(palette::ERROR, palette::INFO);
    }

    #[test]
    fn exit_animation_is_shorter_than_display_time() {
        assert!(timing::TOAST_ANIMATION_MS < timing::TOAST_DISMISS_MS);
    }
}
