// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` manages animated, stacked toast notifications on top of a
//! rendering surface the host supplies.
//!
//! The crate owns lifecycle sequencing and stack geometry and stays out of
//! the drawing business. A [`manager::ToastManager`] drives
//! any [`surface::Surface`] implementation: it creates nodes from resolved
//! [`surface::ToastView`]s, slides them into place one at a time, repacks
//! the stack as toasts come and go, and fades them out on close.
//!
//! # Overview
//!
//! ```no_run
//! use std::time::Instant;
//! use toast_stack::config::Config;
//! use toast_stack::manager::ToastManager;
//! use toast_stack::spec::ToastSpec;
//! # struct MySurface;
//! # impl toast_stack::surface::Surface for MySurface {
//! #     fn create(&mut self, _: &toast_stack::surface::ToastView) -> toast_stack::surface::NodeId { toast_stack::surface::NodeId::new(0) }
//! #     fn slide(&mut self, _: toast_stack::surface::NodeId, _: toast_stack::geometry::Placement, _: toast_stack::surface::Motion, _: toast_stack::surface::TransitionToken) {}
//! #     fn fade(&mut self, _: toast_stack::surface::NodeId, _: f32, _: toast_stack::surface::Motion, _: toast_stack::surface::TransitionToken) {}
//! #     fn set_dimmed(&mut self, _: toast_stack::surface::NodeId, _: bool) {}
//! #     fn disable_dismiss(&mut self, _: toast_stack::surface::NodeId) {}
//! #     fn height(&self, _: toast_stack::surface::NodeId) -> f32 { 40.0 }
//! #     fn remove(&mut self, _: toast_stack::surface::NodeId) {}
//! # }
//!
//! let mut toasts = ToastManager::new(Config::default(), MySurface);
//! let handle = toasts.push(ToastSpec::success("Profile saved"), Instant::now());
//!
//! // Later, from the host event loop:
//! // toasts.handle_transition_finished(token, Instant::now());
//! // toasts.tick(Instant::now());
//! let _ = handle;
//! ```
//!
//! Timing is explicit: hosts pass the current [`std::time::Instant`] into
//! every entry point and pump [`manager::ToastManager::tick`] against
//! [`manager::ToastManager::next_deadline`], which keeps the whole state
//! machine deterministic under test.

#![doc(html_root_url = "https://docs.rs/toast_stack/0.1.0")]

pub mod config;
pub mod error;
pub mod geometry;
pub mod manager;
pub mod spec;
pub mod style;
pub mod surface;
mod timer;

#[cfg(test)]
mod test_utils;

pub use config::{Config, Timing};
pub use geometry::{Anchor, Placement};
pub use manager::{StackEntry, ToastManager, TransitionState};
pub use spec::{AutoClose, Link, ToastId, ToastSpec};
pub use style::{Category, StyleSet, StyleTable};
pub use surface::{Motion, NodeId, Surface, ToastView, TransitionToken};
