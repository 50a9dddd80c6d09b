// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the toast configuration.
//!
//! This module is the single source of truth for the numeric defaults used
//! across the crate.

// ==========================================================================
// Stack Geometry Defaults
// ==========================================================================

/// Default horizontal inset from the anchored edge, in pixels.
pub const DEFAULT_OFFSET_X: f32 = 20.0;

/// Default vertical inset from the anchored edge, in pixels.
pub const DEFAULT_OFFSET_Y: f32 = 20.0;

/// Default gap between stacked toasts, in pixels.
pub const DEFAULT_GAP: f32 = 20.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default open/reposition animation duration, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 500;

/// Fixed fade-out duration for closing toasts, in milliseconds.
///
/// Independent of the configured positional duration.
pub const CLOSE_FADE_MS: u64 = 200;

/// Opacity applied to dimmed (non-focused) toasts.
pub const DIMMED_OPACITY: f32 = 0.3;

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Default z-order base for toast nodes.
pub const DEFAULT_Z_INDEX: i32 = 9999;

/// Default delay before a toast closes automatically, in milliseconds.
pub const DEFAULT_AUTO_CLOSE_MS: u64 = 3000;

/// Backoff before retrying a close request deferred by an in-flight open,
/// in milliseconds.
pub const CLOSE_RETRY_MS: u64 = 100;

/// Grace period past a transition's expected end before the manager forces
/// completion of an unreported transition, in milliseconds.
pub const TRANSITION_GRACE_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_GAP >= 0.0);
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(CLOSE_FADE_MS > 0);
    assert!(DIMMED_OPACITY > 0.0);
    assert!(DIMMED_OPACITY < 1.0);
    assert!(CLOSE_RETRY_MS > 0);
    assert!(TRANSITION_GRACE_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_defaults_match_documented_values() {
        assert_eq!(DEFAULT_OFFSET_X, 20.0);
        assert_eq!(DEFAULT_OFFSET_Y, 20.0);
        assert_eq!(DEFAULT_GAP, 20.0);
    }

    #[test]
    fn animation_defaults_match_documented_values() {
        assert_eq!(DEFAULT_DURATION_MS, 500);
        assert_eq!(DEFAULT_AUTO_CLOSE_MS, 3000);
    }

    #[test]
    fn close_fade_is_shorter_than_open_duration() {
        assert!(CLOSE_FADE_MS < DEFAULT_DURATION_MS);
    }

    #[test]
    fn retry_backoff_is_shorter_than_open_duration() {
        assert!(CLOSE_RETRY_MS < DEFAULT_DURATION_MS);
    }
}
