// SPDX-License-Identifier: MPL-2.0
//! Caller-facing toast description.
//!
//! A [`ToastSpec`] carries everything a single `push` needs: content,
//! per-toast overrides of the configured defaults, and lifecycle callbacks.
//! Every field is optional; absent title/body simply omit that region and an
//! absent category resolves to [`Category::Neutral`].

use crate::manager::StackEntry;
use crate::style::Category;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a pushed toast, returned as the caller's handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Auto-close policy for one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoClose {
    /// Close after the configured default delay.
    #[default]
    Default,
    /// Close after this delay instead.
    After(Duration),
    /// Never close automatically.
    Disabled,
}

/// Link target attached to a toast.
///
/// Clicking anywhere on a linked toast follows the link and closes the
/// toast; the surface owns the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Destination of the link.
    pub href: String,
    /// Target window, `_self` if not overridden.
    pub target: String,
}

/// Lifecycle callback invoked with the toast's stack entry.
pub type ToastCallback = Box<dyn FnOnce(&StackEntry)>;

/// Per-push toast description, built fluently.
///
/// # Examples
///
/// ```
/// use toast_stack::spec::{AutoClose, ToastSpec};
/// use std::time::Duration;
///
/// let spec = ToastSpec::success("Profile saved")
///     .title("Saved")
///     .auto_close(AutoClose::After(Duration::from_secs(5)));
/// ```
#[derive(Default)]
pub struct ToastSpec {
    pub(crate) category: Category,
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
    pub(crate) link: Option<Link>,
    pub(crate) extra_style: Option<String>,
    pub(crate) close_button: Option<bool>,
    pub(crate) width: Option<f32>,
    pub(crate) z_index: Option<i32>,
    pub(crate) auto_close: AutoClose,
    pub(crate) dismiss_after: Option<Duration>,
    pub(crate) on_open: Option<ToastCallback>,
    pub(crate) on_close: Option<ToastCallback>,
}

impl ToastSpec {
    /// Creates an empty spec in the neutral category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a spec with the given category and body content.
    pub fn with_body(category: Category, body: impl Into<String>) -> Self {
        Self {
            category,
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Creates a success toast.
    pub fn success(body: impl Into<String>) -> Self {
        Self::with_body(Category::Success, body)
    }

    /// Creates an error toast.
    pub fn error(body: impl Into<String>) -> Self {
        Self::with_body(Category::Error, body)
    }

    /// Creates a warning toast.
    pub fn warning(body: impl Into<String>) -> Self {
        Self::with_body(Category::Warning, body)
    }

    /// Creates an info toast.
    pub fn info(body: impl Into<String>) -> Self {
        Self::with_body(Category::Info, body)
    }

    /// Creates a neutral toast.
    pub fn neutral(body: impl Into<String>) -> Self {
        Self::with_body(Category::Neutral, body)
    }

    /// Sets the semantic category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the title shown in the header region.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body content.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Makes the whole toast a link to `href`, targeting `_self`.
    #[must_use]
    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.link = Some(Link {
            href: href.into(),
            target: "_self".to_string(),
        });
        self
    }

    /// Overrides the link's target window. No-op without a link.
    #[must_use]
    pub fn link_target(mut self, target: impl Into<String>) -> Self {
        if let Some(link) = self.link.as_mut() {
            link.target = target.into();
        }
        self
    }

    /// Appends extra class tokens to the resolved container classes.
    #[must_use]
    pub fn style(mut self, classes: impl Into<String>) -> Self {
        self.extra_style = Some(classes.into());
        self
    }

    /// Shows or hides the close affordance (shown by default).
    #[must_use]
    pub fn close_button(mut self, visible: bool) -> Self {
        self.close_button = Some(visible);
        self
    }

    /// Fixes the toast width in pixels, overriding the configured default.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Overrides the configured z-order base.
    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Sets the auto-close policy.
    #[must_use]
    pub fn auto_close(mut self, policy: AutoClose) -> Self {
        self.auto_close = policy;
        self
    }

    /// Dismisses the toast this long after its open transition completes.
    #[must_use]
    pub fn dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = Some(delay);
        self
    }

    /// Invoked synchronously once the open transition has been requested.
    #[must_use]
    pub fn on_open(mut self, callback: impl FnOnce(&StackEntry) + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    /// Invoked once when the toast's close transition completes.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce(&StackEntry) + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ToastSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastSpec")
            .field("category", &self.category)
            .field("title", &self.title)
            .field("body", &self.body)
            .field("link", &self.link)
            .field("extra_style", &self.extra_style)
            .field("close_button", &self.close_button)
            .field("width", &self.width)
            .field("z_index", &self.z_index)
            .field("auto_close", &self.auto_close)
            .field("dismiss_after", &self.dismiss_after)
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn constructors_set_category_and_body() {
        let spec = ToastSpec::success("saved");
        assert_eq!(spec.category, Category::Success);
        assert_eq!(spec.body.as_deref(), Some("saved"));

        assert_eq!(ToastSpec::error("e").category, Category::Error);
        assert_eq!(ToastSpec::warning("w").category, Category::Warning);
        assert_eq!(ToastSpec::info("i").category, Category::Info);
        assert_eq!(ToastSpec::neutral("n").category, Category::Neutral);
    }

    #[test]
    fn empty_spec_defaults_to_neutral() {
        let spec = ToastSpec::new();
        assert_eq!(spec.category, Category::Neutral);
        assert!(spec.title.is_none());
        assert!(spec.body.is_none());
        assert_eq!(spec.auto_close, AutoClose::Default);
    }

    #[test]
    fn link_defaults_to_self_target() {
        let spec = ToastSpec::new().link("https://example.com/status");
        let link = spec.link.expect("link set");
        assert_eq!(link.href, "https://example.com/status");
        assert_eq!(link.target, "_self");
    }

    #[test]
    fn link_target_overrides_default() {
        let spec = ToastSpec::new()
            .link("https://example.com")
            .link_target("_blank");
        assert_eq!(spec.link.expect("link set").target, "_blank");
    }

    #[test]
    fn link_target_without_link_is_ignored() {
        let spec = ToastSpec::new().link_target("_blank");
        assert!(spec.link.is_none());
    }

    #[test]
    fn builder_collects_overrides() {
        let spec = ToastSpec::success("done")
            .title("Saved")
            .style("shadow-lg")
            .close_button(false)
            .width(280.0)
            .z_index(50)
            .auto_close(AutoClose::Disabled)
            .dismiss_after(Duration::from_secs(2));

        assert_eq!(spec.title.as_deref(), Some("Saved"));
        assert_eq!(spec.extra_style.as_deref(), Some("shadow-lg"));
        assert_eq!(spec.close_button, Some(false));
        assert_eq!(spec.width, Some(280.0));
        assert_eq!(spec.z_index, Some(50));
        assert_eq!(spec.auto_close, AutoClose::Disabled);
        assert_eq!(spec.dismiss_after, Some(Duration::from_secs(2)));
    }

    #[test]
    fn debug_reports_callback_presence_only() {
        let spec = ToastSpec::new().on_open(|_| {});
        let rendered = format!("{spec:?}");
        assert!(rendered.contains("on_open: true"));
        assert!(rendered.contains("on_close: false"));
    }
}
