// SPDX-License-Identifier: MPL-2.0
//! Semantic categories and the per-category style table.
//!
//! Styles are opaque class strings the surface applies to the regions of a
//! toast node. The crate ships neutral class tokens as defaults; hosts
//! replace them with whatever their styling system expects.

use serde::{Deserialize, Serialize};

/// Semantic category of a toast, determining which style set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Success,
    Error,
    Warning,
    Info,
    /// Fallback category when a toast names none.
    #[default]
    Neutral,
}

impl Category {
    /// All categories, in table order.
    pub const ALL: [Category; 5] = [
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Info,
        Category::Neutral,
    ];
}

/// Presentation class strings for the regions of one toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSet {
    /// Classes applied to the toast container.
    pub container: String,
    /// Classes applied to the title region.
    pub header: String,
    /// Classes applied to the body region.
    pub body: String,
    /// Classes applied to the close affordance.
    pub close: String,
}

impl Default for StyleSet {
    fn default() -> Self {
        StyleSet::for_category(Category::Neutral)
    }
}

impl StyleSet {
    /// Default class tokens for a category.
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        let tag = match category {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::Neutral => "neutral",
        };
        Self {
            container: format!("toast toast--{tag}"),
            header: format!("toast__header toast__header--{tag}"),
            body: "toast__body".to_string(),
            close: format!("toast__close toast__close--{tag}"),
        }
    }
}

/// Style sets keyed by semantic category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub success: StyleSet,
    pub error: StyleSet,
    pub warning: StyleSet,
    pub info: StyleSet,
    pub neutral: StyleSet,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            success: StyleSet::for_category(Category::Success),
            error: StyleSet::for_category(Category::Error),
            warning: StyleSet::for_category(Category::Warning),
            info: StyleSet::for_category(Category::Info),
            neutral: StyleSet::for_category(Category::Neutral),
        }
    }
}

impl StyleTable {
    /// Returns the style set for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> &StyleSet {
        match category {
            Category::Success => &self.success,
            Category::Error => &self.error,
            Category::Warning => &self.warning,
            Category::Info => &self.info,
            Category::Neutral => &self.neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_neutral() {
        assert_eq!(Category::default(), Category::Neutral);
    }

    #[test]
    fn table_lookup_matches_category() {
        let table = StyleTable::default();
        for category in Category::ALL {
            let set = table.get(category);
            let expected = StyleSet::for_category(category);
            assert_eq!(set, &expected);
        }
    }

    #[test]
    fn default_sets_are_distinct_per_category() {
        let table = StyleTable::default();
        assert_ne!(table.success.container, table.error.container);
        assert_ne!(table.warning.header, table.info.header);
    }

    #[test]
    fn style_table_round_trips_through_toml() {
        let mut table = StyleTable::default();
        table.success.container = "bg-green border".to_string();
        let serialized = toml::to_string(&table).expect("serialize");
        let restored: StyleTable = toml::from_str(&serialized).expect("deserialize");
        assert_eq!(restored, table);
    }
}
