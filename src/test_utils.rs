// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros, which handle the
//! floating-point precision issues `assert_eq!` cannot. Stack offsets
//! accumulate rendered heights as `f32`, so offset assertions go through
//! these.

#[allow(unused_imports)]
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for offset comparisons in pixels.
#[allow(dead_code)]
pub const OFFSET_EPSILON: f32 = 1e-3;
