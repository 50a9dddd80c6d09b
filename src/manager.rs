// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` owns the ordered stack of active toasts and every
//! transition between their lifecycle states:
//!
//! ```text
//! queued -> opening -> complete -> closing -> removed
//! ```
//!
//! Opening is single-flight: at most one toast animates in at a time, and
//! toasts pushed meanwhile wait in `queued` until the in-flight open
//! completes, then drain in push order. Closing is not serialized (several
//! toasts may fade out at once), but a close requested during an open is
//! deferred and retried on a fixed backoff until the gate clears.
//!
//! The manager is single-threaded and event-driven. Hosts supply the
//! current [`Instant`] at every entry point, deliver the surface's
//! transition-completion signals through [`ToastManager::handle_transition_finished`],
//! and call [`ToastManager::tick`] when the deadline reported by
//! [`ToastManager::next_deadline`] elapses.

use crate::config::{Config, Timing, CLOSE_FADE_MS, CLOSE_RETRY_MS, TRANSITION_GRACE_MS};
use crate::geometry::same_pixel;
use crate::spec::{AutoClose, ToastCallback, ToastId, ToastSpec};
use crate::surface::{Motion, NodeId, Surface, ToastView, TransitionToken};
use crate::timer::{TimerAction, TimerQueue};
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Fixed fade-out duration for closing toasts.
pub const CLOSE_FADE: Duration = Duration::from_millis(CLOSE_FADE_MS);

/// Backoff before a close deferred by an in-flight open is retried.
pub const CLOSE_RETRY_BACKOFF: Duration = Duration::from_millis(CLOSE_RETRY_MS);

/// Grace past a transition's expected end before completion is forced.
pub const TRANSITION_GRACE: Duration = Duration::from_millis(TRANSITION_GRACE_MS);

/// Lifecycle state of one stack entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// Pushed, waiting for the opening gate.
    Queued,
    /// Open transition in flight.
    Opening,
    /// Settled on screen.
    Complete,
    /// Fade-out in flight.
    Closing,
    /// Terminal; the entry leaves the stack in this state.
    Removed,
}

/// One active toast, owned by the manager.
pub struct StackEntry {
    id: ToastId,
    node: NodeId,
    position: u64,
    offset_x: f32,
    offset_y: f32,
    state: TransitionState,
    /// Whether the entry ever reached `opening` and claimed stack space.
    claimed: bool,
    dismiss_after: Option<Duration>,
    on_close: Option<ToastCallback>,
}

impl StackEntry {
    /// The toast's identifier, equal to the handle `push` returned.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// The surface node realizing this toast.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Monotonic stack position; lower positions were pushed earlier and
    /// sit further from the anchor.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Horizontal inset from the anchored edge.
    #[must_use]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    /// Accumulated vertical inset from the anchored edge.
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }
}

impl fmt::Debug for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackEntry")
            .field("id", &self.id)
            .field("node", &self.node)
            .field("position", &self.position)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("state", &self.state)
            .field("claimed", &self.claimed)
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
enum PendingKind {
    Open(ToastId),
    Close(ToastId),
}

/// Owns the toast stack and drives a [`Surface`] through it.
pub struct ToastManager<S: Surface> {
    config: Config,
    surface: S,
    stack: Vec<StackEntry>,
    timers: TimerQueue,
    pending: HashMap<TransitionToken, PendingKind>,
    next_position: u64,
    next_token: u64,
    pushed: u64,
}

impl<S: Surface> ToastManager<S> {
    /// Creates a manager over the given surface.
    pub fn new(config: Config, surface: S) -> Self {
        Self {
            config,
            surface,
            stack: Vec::new(),
            timers: TimerQueue::new(),
            pending: HashMap::new(),
            next_position: 0,
            next_token: 0,
            pushed: 0,
        }
    }

    /// Pushes a toast and returns its handle.
    ///
    /// The visual node is created immediately and the open transition is
    /// requested, subject to the single-flight gate; a gated toast stays
    /// `queued` and opens once the in-flight open completes. The spec's
    /// opened callback runs synchronously after the open request. Unless
    /// the spec disables it, automatic closing is scheduled from `now`.
    pub fn push(&mut self, spec: ToastSpec, now: Instant) -> ToastId {
        let ToastSpec {
            category,
            title,
            body,
            link,
            extra_style,
            close_button,
            width,
            z_index,
            auto_close,
            dismiss_after,
            on_open,
            on_close,
        } = spec;

        let styles = self.config.styles.get(category);
        let mut container_classes = styles.container.clone();
        if let Some(extra) = &extra_style {
            container_classes.push(' ');
            container_classes.push_str(extra);
        }
        let view = ToastView {
            category,
            container_classes,
            header_classes: styles.header.clone(),
            body_classes: styles.body.clone(),
            close_classes: styles.close.clone(),
            title,
            body,
            link,
            close_button: close_button.unwrap_or(true),
            width: width.or(self.config.width),
            z_index: z_index.unwrap_or(self.config.z_index),
        };

        let node = self.surface.create(&view);
        let id = ToastId::new();
        let position = self.next_position;
        self.next_position += 1;
        self.pushed += 1;
        self.stack.push(StackEntry {
            id,
            node,
            position,
            offset_x: self.config.offset_x,
            offset_y: self.config.offset_y,
            state: TransitionState::Queued,
            claimed: false,
            dismiss_after,
            on_close,
        });
        debug!("toast {} pushed at position {}", id.value(), position);

        self.open(id, now);
        if let Some(callback) = on_open {
            if let Some(entry) = self.get(id) {
                callback(entry);
            }
        }

        match auto_close {
            AutoClose::Disabled => {}
            AutoClose::Default => {
                let delay = self.config.auto_close();
                self.timers.schedule(now + delay, TimerAction::AutoClose(id));
            }
            AutoClose::After(delay) => {
                self.timers.schedule(now + delay, TimerAction::AutoClose(id));
            }
        }
        id
    }

    /// Requests a close with no fade delay.
    ///
    /// Returns true when the close is underway or the toast is already
    /// closing. Returns false when the toast no longer exists, or when the
    /// request was deferred behind an in-flight open; a deferred close is
    /// retried on a fixed backoff and needs no caller action.
    pub fn close(&mut self, id: ToastId, now: Instant) -> bool {
        self.request_close(id, None, now)
    }

    /// Requests a close whose fade starts after `delay`.
    pub fn close_after(&mut self, id: ToastId, delay: Duration, now: Instant) -> bool {
        self.request_close(id, Some(delay), now)
    }

    /// Requests a close for every active toast.
    pub fn close_all(&mut self, now: Instant) {
        let ids: Vec<ToastId> = self.stack.iter().map(StackEntry::id).collect();
        for id in ids {
            self.request_close(id, None, now);
        }
    }

    /// True iff any entry's open transition is in flight. This is the
    /// serialization gate for both the open and close paths.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.stack
            .iter()
            .any(|entry| entry.state == TransitionState::Opening)
    }

    /// The entry nearest the anchor: the one whose vertical offset sits at
    /// the configured base offset. Entries still `queued` also wait at the
    /// base offset but have not claimed it, so they are not considered.
    #[must_use]
    pub fn focused_toast(&self) -> Option<&StackEntry> {
        let base = self.config.offset_y;
        self.stack
            .iter()
            .find(|entry| entry.claimed && same_pixel(entry.offset_y, base))
    }

    /// Delivers the surface's one-shot completion signal for a requested
    /// transition. Unknown or stale tokens are ignored.
    pub fn handle_transition_finished(&mut self, token: TransitionToken, now: Instant) {
        let Some(kind) = self.pending.remove(&token) else {
            trace!("ignoring unknown transition token {}", token.value());
            return;
        };
        match kind {
            PendingKind::Open(id) => self.finish_open(id, now),
            PendingKind::Close(id) => self.finish_close(id),
        }
    }

    /// Fires every timer due at `now`: auto-closes, post-open dismissals,
    /// close retries, and transition fallbacks.
    pub fn tick(&mut self, now: Instant) {
        while let Some(action) = self.timers.pop_due(now) {
            match action {
                TimerAction::AutoClose(id) | TimerAction::DismissAfter(id) => {
                    self.request_close(id, None, now);
                }
                TimerAction::RetryClose { id, delay } => {
                    self.request_close(id, delay, now);
                }
                TimerAction::TransitionFallback(token) => {
                    if self.pending.contains_key(&token) {
                        warn!(
                            "transition {} never reported completion; forcing it",
                            token.value()
                        );
                        self.handle_transition_finished(token, now);
                    }
                }
            }
        }
    }

    /// Earliest pending timer deadline, if any. Hosts should call
    /// [`ToastManager::tick`] no later than this instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Looks up an active entry by handle.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&StackEntry> {
        self.stack.iter().find(|entry| entry.id == id)
    }

    /// Active entries in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &StackEntry> {
        self.stack.iter()
    }

    /// Number of active entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Total number of toasts pushed over the manager's lifetime.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Offsets of live entries are not rebased; reconfigure a quiescent
    /// stack, or close everything first.
    pub fn reconfigure(&mut self, config: Config) {
        self.config = config;
    }

    /// The underlying surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the underlying surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn index_of(&self, id: ToastId) -> Option<usize> {
        self.stack.iter().position(|entry| entry.id == id)
    }

    fn alloc_token(&mut self) -> TransitionToken {
        let token = TransitionToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Starts the open transition for a queued entry.
    ///
    /// Returns false without doing any work while another open is in
    /// flight; queued entries are drained when that open completes.
    fn open(&mut self, id: ToastId, now: Instant) -> bool {
        if self.is_opening() {
            trace!("open of toast {} gated by in-flight open", id.value());
            return false;
        }
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if self.stack[idx].state != TransitionState::Queued {
            return false;
        }

        self.stack[idx].state = TransitionState::Opening;
        self.stack[idx].claimed = true;
        let node = self.stack[idx].node;
        let height = self.surface.height(node);
        let motion = Motion {
            duration: self.config.duration(),
            timing: self.config.timing,
            delay: None,
        };
        let token = self.alloc_token();
        self.pending.insert(token, PendingKind::Open(id));
        self.timers.schedule(
            now + motion.total() + TRANSITION_GRACE,
            TimerAction::TransitionFallback(token),
        );
        let placement = self
            .config
            .anchor
            .place(self.stack[idx].offset_x, self.stack[idx].offset_y);
        self.surface.slide(node, placement, motion, token);
        debug!("toast {} opening", id.value());

        // Shift settled toasts away from the anchor to make room.
        let gap = self.config.gap;
        let dim_old = self.config.dim_old;
        let anchor = self.config.anchor;
        for i in 0..self.stack.len() {
            if self.stack[i].state != TransitionState::Complete {
                continue;
            }
            self.stack[i].offset_y += height + gap;
            let sibling = self.stack[i].node;
            let placement = anchor.place(self.stack[i].offset_x, self.stack[i].offset_y);
            let token = self.alloc_token();
            self.surface.slide(sibling, placement, motion, token);
            if dim_old {
                self.surface.set_dimmed(sibling, true);
            }
        }
        true
    }

    fn finish_open(&mut self, id: ToastId, now: Instant) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if self.stack[idx].state != TransitionState::Opening {
            return;
        }
        self.stack[idx].state = TransitionState::Complete;
        let dismiss_after = self.stack[idx].dismiss_after;
        debug!("toast {} complete", id.value());

        // Drain the earliest queued entry, if any.
        let next = self
            .stack
            .iter()
            .filter(|entry| entry.state == TransitionState::Queued)
            .min_by_key(|entry| entry.position)
            .map(StackEntry::id);
        if let Some(next) = next {
            self.open(next, now);
        }

        if let Some(delay) = dismiss_after {
            self.timers
                .schedule(now + delay, TimerAction::DismissAfter(id));
        }
    }

    fn request_close(&mut self, id: ToastId, delay: Option<Duration>, now: Instant) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if matches!(
            self.stack[idx].state,
            TransitionState::Closing | TransitionState::Removed
        ) {
            return true;
        }
        if self.is_opening() {
            trace!("close of toast {} deferred by in-flight open", id.value());
            self.timers
                .schedule(now + CLOSE_RETRY_BACKOFF, TimerAction::RetryClose { id, delay });
            return false;
        }

        let node = self.stack[idx].node;
        self.surface.disable_dismiss(node);
        self.stack[idx].state = TransitionState::Closing;
        let motion = Motion {
            duration: CLOSE_FADE,
            timing: Timing::Ease,
            delay,
        };
        let token = self.alloc_token();
        self.pending.insert(token, PendingKind::Close(id));
        self.timers.schedule(
            now + motion.total() + TRANSITION_GRACE,
            TimerAction::TransitionFallback(token),
        );
        self.surface.fade(node, 0.0, motion, token);
        debug!("toast {} closing", id.value());
        true
    }

    fn finish_close(&mut self, id: ToastId) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if self.stack[idx].state != TransitionState::Closing {
            return;
        }
        let mut entry = self.stack.remove(idx);
        entry.state = TransitionState::Removed;
        let height = self.surface.height(entry.node);
        if let Some(callback) = entry.on_close.take() {
            callback(&entry);
        }
        self.surface.remove(entry.node);
        debug!("toast {} removed", entry.id.value());

        // Entries that opened earlier slide back toward the anchor. An
        // entry that never opened claimed no space, so there is nothing to
        // reclaim.
        if entry.claimed {
            let reclaim = height + self.config.gap;
            let motion = Motion {
                duration: self.config.duration(),
                timing: self.config.timing,
                delay: None,
            };
            let anchor = self.config.anchor;
            for i in 0..self.stack.len() {
                if self.stack[i].position >= entry.position {
                    continue;
                }
                self.stack[i].offset_y -= reclaim;
                let node = self.stack[i].node;
                let placement = anchor.place(self.stack[i].offset_x, self.stack[i].offset_y);
                let token = self.alloc_token();
                self.surface.slide(node, placement, motion, token);
            }
        }

        // The survivor now at the base offset regains focus.
        let focused = self.focused_toast().map(StackEntry::node);
        if let Some(node) = focused {
            self.surface.set_dimmed(node, false);
        }
    }
}
