// SPDX-License-Identifier: MPL-2.0
//! Anchor presets and placement computation.
//!
//! A toast's on-screen location is a pure function of the configured anchor
//! and its accumulated offsets. Nothing here touches the stack state; the
//! manager feeds offsets in, the surface interprets the resulting
//! [`Placement`].

use serde::{Deserialize, Serialize};

/// Sub-pixel tolerance for offset comparisons.
///
/// Offsets accumulate heights and gaps as `f32`, so the focused-toast check
/// compares against the base offset with this tolerance instead of exact
/// equality.
pub const PIXEL_TOLERANCE: f32 = 0.5;

/// The screen edge or corner toasts stack from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Returns whether this anchor stacks from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight)
    }

    /// Returns whether this anchor centers toasts horizontally.
    #[must_use]
    pub fn is_centered(self) -> bool {
        matches!(self, Anchor::TopCenter | Anchor::BottomCenter)
    }

    /// Computes the placement for a toast at the given offsets.
    ///
    /// `offset_x` is the fixed horizontal inset for left/right anchors and
    /// is ignored for centered anchors. `offset_y` is the accumulated
    /// distance from the anchored edge.
    #[must_use]
    pub fn place(self, offset_x: f32, offset_y: f32) -> Placement {
        let horizontal = match self {
            Anchor::TopCenter | Anchor::BottomCenter => Horizontal::Centered,
            Anchor::TopLeft | Anchor::BottomLeft => Horizontal::FromLeft(offset_x),
            Anchor::TopRight | Anchor::BottomRight => Horizontal::FromRight(offset_x),
        };
        let vertical = if self.is_top() {
            Vertical::FromTop(offset_y)
        } else {
            Vertical::FromBottom(offset_y)
        };
        Placement {
            horizontal,
            vertical,
        }
    }
}

/// Horizontal component of a placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    /// Centered on the horizontal axis.
    Centered,
    /// Inset from the left edge, in pixels.
    FromLeft(f32),
    /// Inset from the right edge, in pixels.
    FromRight(f32),
}

/// Vertical component of a placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertical {
    /// Inset from the top edge, in pixels.
    FromTop(f32),
    /// Inset from the bottom edge, in pixels.
    FromBottom(f32),
}

/// Resolved inset-from-edge coordinates handed to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Placement {
    /// Returns the vertical inset in pixels, regardless of edge.
    #[must_use]
    pub fn vertical_inset(self) -> f32 {
        match self.vertical {
            Vertical::FromTop(y) | Vertical::FromBottom(y) => y,
        }
    }
}

/// Compares two pixel offsets with sub-pixel tolerance.
#[must_use]
pub fn same_pixel(a: f32, b: f32) -> bool {
    (a - b).abs() < PIXEL_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_center_places_centered_from_bottom() {
        let p = Anchor::BottomCenter.place(20.0, 20.0);
        assert_eq!(p.horizontal, Horizontal::Centered);
        assert_eq!(p.vertical, Vertical::FromBottom(20.0));
    }

    #[test]
    fn top_center_places_centered_from_top() {
        let p = Anchor::TopCenter.place(20.0, 35.0);
        assert_eq!(p.horizontal, Horizontal::Centered);
        assert_eq!(p.vertical, Vertical::FromTop(35.0));
    }

    #[test]
    fn left_anchors_use_left_inset() {
        for anchor in [Anchor::TopLeft, Anchor::BottomLeft] {
            let p = anchor.place(12.0, 8.0);
            assert_eq!(p.horizontal, Horizontal::FromLeft(12.0));
        }
    }

    #[test]
    fn right_anchors_use_right_inset() {
        for anchor in [Anchor::TopRight, Anchor::BottomRight] {
            let p = anchor.place(12.0, 8.0);
            assert_eq!(p.horizontal, Horizontal::FromRight(12.0));
        }
    }

    #[test]
    fn top_anchors_report_top_edge() {
        assert!(Anchor::TopLeft.is_top());
        assert!(Anchor::TopCenter.is_top());
        assert!(Anchor::TopRight.is_top());
        assert!(!Anchor::BottomCenter.is_top());
    }

    #[test]
    fn only_center_anchors_center_horizontally() {
        assert!(Anchor::TopCenter.is_centered());
        assert!(Anchor::BottomCenter.is_centered());
        assert!(!Anchor::TopLeft.is_centered());
        assert!(!Anchor::BottomRight.is_centered());
    }

    #[test]
    fn vertical_inset_ignores_edge() {
        assert_eq!(Anchor::TopLeft.place(0.0, 42.0).vertical_inset(), 42.0);
        assert_eq!(Anchor::BottomRight.place(0.0, 42.0).vertical_inset(), 42.0);
    }

    #[test]
    fn default_anchor_is_bottom_center() {
        assert_eq!(Anchor::default(), Anchor::BottomCenter);
    }

    #[test]
    fn same_pixel_tolerates_sub_pixel_drift() {
        assert!(same_pixel(20.0, 20.0));
        assert!(same_pixel(20.0, 20.4));
        assert!(!same_pixel(20.0, 21.0));
    }
}
