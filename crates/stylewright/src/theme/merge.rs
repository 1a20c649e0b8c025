//! Extend-merge of theme trees.
//!
//! Merging walks the union of keys of both trees, depth-first:
//!
//! | default   | extension | result                              |
//! |-----------|-----------|-------------------------------------|
//! | present   | absent    | default, unchanged                  |
//! | absent    | present   | extension, appended                 |
//! | subtree   | subtree   | merged recursively                  |
//! | any       | any       | (at least one scalar) extension     |
//!
//! Extensions never delete sibling defaults. The only way to drop default
//! keys is to replace a whole subtree with a scalar, or to replace a whole
//! category with [`ThemeTree::replace_categories`].
//!
//! Key order is defaults first, in their original order, followed by keys only
//! the extension knows about, in extension order. An overridden key keeps the
//! position it had in the default tree.

use tracing::debug;

use super::tree::{ThemeTree, ThemeValue};

impl ThemeTree {
    /// Merges `other` into this tree. Values from `other` take precedence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylewright::theme::ThemeTree;
    ///
    /// let base = ThemeTree::new().subtree(
    ///     "colors",
    ///     ThemeTree::new().scalar("red", "#FF0000").scalar("blue", "#0000FF"),
    /// );
    /// let user = ThemeTree::new().subtree(
    ///     "colors",
    ///     ThemeTree::new().scalar("red", "#000000").scalar("ny-red", "#C41E3A"),
    /// );
    ///
    /// let merged = base.merge(user);
    /// assert_eq!(merged.get_path("colors.red"), Some("#000000"));
    /// assert_eq!(merged.get_path("colors.blue"), Some("#0000FF"));
    /// assert_eq!(merged.get_path("colors.ny-red"), Some("#C41E3A"));
    /// ```
    pub fn merge(mut self, other: ThemeTree) -> Self {
        for (key, incoming) in other.entries {
            match self.entries.get_mut(&key) {
                Some(slot) => merge_value(slot, incoming),
                None => {
                    self.entries.insert(key, incoming);
                }
            }
        }
        self
    }

    /// Replaces whole top-level categories.
    ///
    /// Each category present in `replacements` is swapped in wholesale,
    /// discarding every key the current tree had under it. Categories the
    /// replacement does not mention are left alone.
    pub fn replace_categories(mut self, replacements: ThemeTree) -> Self {
        for (category, value) in replacements.entries {
            debug!(category = %category, "replacing theme category");
            self.entries.insert(category, value);
        }
        self
    }
}

fn merge_value(slot: &mut ThemeValue, incoming: ThemeValue) {
    match (slot, incoming) {
        (ThemeValue::Subtree(existing), ThemeValue::Subtree(incoming)) => {
            let current = std::mem::take(existing);
            *existing = current.merge(incoming);
        }
        (slot, incoming) => *slot = incoming,
    }
}

/// Merges `extension` over `default`, leaving both inputs untouched.
pub fn merge(default: &ThemeTree, extension: &ThemeTree) -> ThemeTree {
    default.clone().merge(extension.clone())
}

/// Folds any number of extension layers over `base`, left to right.
///
/// Later layers win over earlier ones; each step follows the [`merge`] rules.
pub fn merge_layers<I>(base: ThemeTree, layers: I) -> ThemeTree
where
    I: IntoIterator<Item = ThemeTree>,
{
    layers.into_iter().enumerate().fold(base, |acc, (idx, layer)| {
        debug!(layer = idx, keys = layer.len(), "merging theme layer");
        acc.merge(layer)
    })
}
