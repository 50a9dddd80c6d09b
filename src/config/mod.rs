// SPDX-License-Identifier: MPL-2.0
//! Toast stack configuration.
//!
//! The [`Config`] record is set once at manager construction and stays
//! immutable on the manager unless explicitly replaced. It serializes to
//! TOML so hosts can persist appearance settings; every field has a default
//! and partial files deserialize cleanly.
//!
//! # Examples
//!
//! ```
//! use toast_stack::config::Config;
//! use toast_stack::geometry::Anchor;
//!
//! let mut config = Config::default();
//! config.anchor = Anchor::TopRight;
//! config.gap = 12.0;
//! ```

use crate::error::Result;
use crate::geometry::Anchor;
use crate::style::StyleTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

mod defaults;

pub use defaults::{
    CLOSE_FADE_MS, CLOSE_RETRY_MS, DEFAULT_AUTO_CLOSE_MS, DEFAULT_DURATION_MS, DEFAULT_GAP,
    DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y, DEFAULT_Z_INDEX, DIMMED_OPACITY, TRANSITION_GRACE_MS,
};

/// Timing curve applied to positional and fade transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timing {
    #[default]
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Process-wide toast configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen edge or corner toasts stack from.
    pub anchor: Anchor,
    /// Horizontal inset from the anchored edge, in pixels.
    pub offset_x: f32,
    /// Base vertical inset from the anchored edge, in pixels.
    pub offset_y: f32,
    /// Gap between stacked toasts, in pixels.
    pub gap: f32,
    /// Open/reposition animation duration, in milliseconds.
    pub duration_ms: u64,
    /// Timing curve for animations.
    pub timing: Timing,
    /// Whether older toasts dim while a newer one is on top.
    pub dim_old: bool,
    /// Default toast width in pixels, if fixed.
    pub width: Option<f32>,
    /// Default z-order base for toast nodes.
    pub z_index: i32,
    /// Default delay before a toast closes automatically, in milliseconds.
    pub auto_close_ms: u64,
    /// Style sets keyed by semantic category.
    pub styles: StyleTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            gap: DEFAULT_GAP,
            duration_ms: DEFAULT_DURATION_MS,
            timing: Timing::default(),
            dim_old: true,
            width: None,
            z_index: DEFAULT_Z_INDEX,
            auto_close_ms: DEFAULT_AUTO_CLOSE_MS,
            styles: StyleTable::default(),
        }
    }
}

impl Config {
    /// Open/reposition animation duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Default auto-close delay.
    #[must_use]
    pub fn auto_close(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }
}

/// Loads a configuration from a TOML file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves a configuration to a TOML file.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.anchor, Anchor::BottomCenter);
        assert_eq!(config.offset_x, 20.0);
        assert_eq!(config.offset_y, 20.0);
        assert_eq!(config.gap, 20.0);
        assert_eq!(config.duration(), Duration::from_millis(500));
        assert_eq!(config.timing, Timing::Ease);
        assert!(config.dim_old);
        assert_eq!(config.width, None);
        assert_eq!(config.z_index, 9999);
        assert_eq!(config.auto_close(), Duration::from_millis(3000));
    }

    #[test]
    fn config_round_trips_through_file() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("toasts.toml");

        let mut config = Config::default();
        config.anchor = Anchor::TopRight;
        config.gap = 8.0;
        config.dim_old = false;
        config.width = Some(320.0);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let config: Config =
            toml::from_str("anchor = \"top-left\"\ngap = 10.0\n").expect("deserialize");
        assert_eq!(config.anchor, Anchor::TopLeft);
        assert_eq!(config.gap, 10.0);
        assert_eq!(config.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(config.z_index, DEFAULT_Z_INDEX);
    }

    #[test]
    fn timing_uses_kebab_case_names() {
        let config: Config = toml::from_str("timing = \"ease-in-out\"").expect("deserialize");
        assert_eq!(config.timing, Timing::EaseInOut);
    }

    #[test]
    fn load_missing_file_reports_io_error() {
        let dir = tempdir().expect("failed to create temporary directory");
        let missing = dir.path().join("absent.toml");
        let err = load_from_path(&missing).expect_err("load should fail");
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
