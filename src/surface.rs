// SPDX-License-Identifier: MPL-2.0
//! The rendering surface seam.
//!
//! The manager never draws anything itself. It describes a toast as a
//! [`ToastView`], asks a [`Surface`] implementation to realize it as a
//! visual node, and drives that node through positional and opacity
//! transitions. The surface reports each requested transition back exactly
//! once through [`crate::manager::ToastManager::handle_transition_finished`]
//! with the token the request carried.
//!
//! Implementations decide what a node is: a DOM element, a toolkit widget,
//! a scene-graph item. The contract is behavioral:
//!
//! - `create` builds the node hidden or off-surface; the first `slide`
//!   brings it into place. If the view requests a close affordance or a
//!   link, user activation of either must route to
//!   [`crate::manager::ToastManager::close`] for that toast.
//! - `height` returns the node's rendered height in pixels, available from
//!   creation onward.
//! - Every `slide`/`fade` call must eventually deliver its token, even when
//!   the visual effect is skipped (reduced-motion hosts can report
//!   immediately). The manager tolerates a lost token with a fallback
//!   deadline, but that path is for faults, not normal operation.

use crate::config::Timing;
use crate::geometry::Placement;
use crate::spec::Link;
use crate::style::Category;
use std::time::Duration;

/// Surface-assigned identifier for a visual node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a surface-chosen value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Manager-assigned identifier tying a transition request to its one-shot
/// completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(pub(crate) u64);

impl TransitionToken {
    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Duration, curve, and optional start delay of a requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub duration: Duration,
    pub timing: Timing,
    /// Delay before the transition starts. Completion is expected after
    /// `delay + duration`.
    pub delay: Option<Duration>,
}

impl Motion {
    /// Total wall time from request to expected completion.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.unwrap_or_default() + self.duration
    }
}

/// Everything a surface needs to realize one toast node.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    /// Semantic category the classes were resolved from.
    pub category: Category,
    /// Resolved container classes, including any per-toast extras.
    pub container_classes: String,
    /// Resolved header classes.
    pub header_classes: String,
    /// Resolved body classes.
    pub body_classes: String,
    /// Resolved close-affordance classes.
    pub close_classes: String,
    /// Title text; the header region is omitted when absent.
    pub title: Option<String>,
    /// Body content; the body region is omitted when absent.
    pub body: Option<String>,
    /// Link the whole toast navigates to when activated.
    pub link: Option<Link>,
    /// Whether a close affordance is rendered.
    pub close_button: bool,
    /// Fixed width in pixels, if any.
    pub width: Option<f32>,
    /// Z-order for the node.
    pub z_index: i32,
}

/// Capability the manager consumes to render and animate toasts.
pub trait Surface {
    /// Builds a visual node for the view and attaches it to the
    /// presentation root, hidden until its first slide.
    fn create(&mut self, view: &ToastView) -> NodeId;

    /// Animates the node to a placement. Must report `token` exactly once
    /// when the movement finishes.
    fn slide(&mut self, node: NodeId, placement: Placement, motion: Motion, token: TransitionToken);

    /// Animates the node's opacity. Must report `token` exactly once when
    /// the fade finishes.
    fn fade(&mut self, node: NodeId, opacity: f32, motion: Motion, token: TransitionToken);

    /// Applies or clears the dimmed treatment on a node. Conventionally an
    /// opacity of [`crate::config::DIMMED_OPACITY`].
    fn set_dimmed(&mut self, node: NodeId, dimmed: bool);

    /// Disables the node's close affordance so it can no longer request a
    /// close.
    fn disable_dismiss(&mut self, node: NodeId);

    /// Rendered height of the node in pixels.
    fn height(&self, node: NodeId) -> f32;

    /// Detaches and destroys the node.
    fn remove(&mut self, node: NodeId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_total_includes_delay() {
        let motion = Motion {
            duration: Duration::from_millis(200),
            timing: Timing::Ease,
            delay: Some(Duration::from_millis(300)),
        };
        assert_eq!(motion.total(), Duration::from_millis(500));
    }

    #[test]
    fn motion_total_without_delay_is_duration() {
        let motion = Motion {
            duration: Duration::from_millis(200),
            timing: Timing::Ease,
            delay: None,
        };
        assert_eq!(motion.total(), Duration::from_millis(200));
    }
}
