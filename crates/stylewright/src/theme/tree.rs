//! Theme tree: nested categories of design tokens.
//!
//! A [`ThemeTree`] maps category names (`colors`, `spacing`, ...) to either a
//! scalar token value or another tree. Key order is insertion order and is
//! preserved through merging, so everything derived from a tree (token lists,
//! serialized output, generated custom properties) is stable across builds.
//!
//! # Construction
//!
//! ```rust
//! use stylewright::theme::ThemeTree;
//!
//! let extension = ThemeTree::new().subtree(
//!     "colors",
//!     ThemeTree::new()
//!         .scalar("ny-red", "#C41E3A")
//!         .scalar("ny-gold", "#FFD700"),
//! );
//!
//! assert_eq!(extension.get_path("colors.ny-red"), Some("#C41E3A"));
//! ```
//!
//! Trees coming from configuration files are ingested from JSON values with
//! [`ThemeTree::from_json`], which rejects anything that is neither a scalar
//! nor a mapping.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ConfigError, Result};

use super::token::Token;

/// A node in a [`ThemeTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValue {
    /// A leaf token value, opaque to the engine.
    Scalar(String),
    /// A nested category.
    Subtree(ThemeTree),
}

impl ThemeValue {
    /// Returns the scalar value, if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ThemeValue::Scalar(value) => Some(value),
            ThemeValue::Subtree(_) => None,
        }
    }

    /// Returns the nested tree, if this node is a category.
    pub fn as_subtree(&self) -> Option<&ThemeTree> {
        match self {
            ThemeValue::Scalar(_) => None,
            ThemeValue::Subtree(tree) => Some(tree),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Scalar(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::Scalar(value)
    }
}

impl From<ThemeTree> for ThemeValue {
    fn from(tree: ThemeTree) -> Self {
        ThemeValue::Subtree(tree)
    }
}

/// An insertion-ordered mapping from category name to [`ThemeValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTree {
    pub(super) entries: IndexMap<String, ThemeValue>,
}

impl ThemeTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds a scalar token, returning the tree for chaining.
    pub fn scalar(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, ThemeValue::Scalar(value.into()));
        self
    }

    /// Adds a nested category, returning the tree for chaining.
    pub fn subtree(mut self, key: impl Into<String>, tree: ThemeTree) -> Self {
        self.insert(key, ThemeValue::Subtree(tree));
        self
    }

    /// Inserts a value, replacing any existing one in place.
    ///
    /// A replaced key keeps its original position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ThemeValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ThemeValue> {
        self.entries.shift_remove(key)
    }

    /// Returns the value stored directly under `key`.
    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.entries.get(key)
    }

    /// Looks up a node by its key sequence (`["spacing", "0.5"]`).
    pub fn lookup_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<&ThemeValue> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.entries.get(first.as_ref())?;
        for segment in rest {
            current = current.as_subtree()?.entries.get(segment.as_ref())?;
        }
        Some(current)
    }

    /// Looks up a scalar token by its key sequence.
    pub fn get_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<&str> {
        self.lookup_segments(segments).and_then(ThemeValue::as_scalar)
    }

    /// Looks up a node by dotted path (`"colors.red.500"`).
    ///
    /// Keys may contain dots themselves: `spacing.0.5` finds the key `0.5`
    /// under `spacing`. Shorter keys are tried first. When a path is ambiguous,
    /// use [`ThemeTree::lookup_segments`].
    pub fn lookup(&self, path: &str) -> Option<&ThemeValue> {
        self.find_dotted(path, &|_| true)
    }

    /// Looks up a scalar token by dotted path.
    pub fn get_path(&self, path: &str) -> Option<&str> {
        self.find_dotted(path, &|value| value.as_scalar().is_some())
            .and_then(ThemeValue::as_scalar)
    }

    fn find_dotted<'a>(
        &'a self,
        path: &str,
        accept: &dyn Fn(&ThemeValue) -> bool,
    ) -> Option<&'a ThemeValue> {
        let ends = path
            .match_indices('.')
            .map(|(idx, _)| idx)
            .chain(std::iter::once(path.len()));
        for end in ends {
            let Some(value) = self.entries.get(&path[..end]) else {
                continue;
            };
            if end == path.len() {
                if accept(value) {
                    return Some(value);
                }
            } else if let ThemeValue::Subtree(tree) = value {
                if let Some(found) = tree.find_dotted(&path[end + 1..], accept) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Returns true if `key` is present at this level.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys at this level, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the entries at this level, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the tree into leaf tokens, depth-first, in tree order.
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut prefix = Vec::new();
        self.collect_tokens(&mut prefix, &mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, prefix: &mut Vec<&'a str>, out: &mut Vec<Token>) {
        for (key, value) in &self.entries {
            prefix.push(key);
            match value {
                ThemeValue::Scalar(v) => out.push(Token::new(prefix.iter().copied(), v.clone())),
                ThemeValue::Subtree(tree) => tree.collect_tokens(prefix, out),
            }
            prefix.pop();
        }
    }

    /// Builds a tree from a JSON value, validating every node.
    ///
    /// Strings, numbers and booleans become scalars (numbers and booleans in
    /// their textual form); objects become subtrees. Anything else fails with
    /// [`ConfigError::InvalidTokenValue`] naming the offending path.
    ///
    /// # Errors
    ///
    /// Also fails if the top-level value is not an object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylewright::theme::ThemeTree;
    ///
    /// let tree = ThemeTree::from_json(&serde_json::json!({
    ///     "colors": { "ny-red": "#C41E3A" },
    ///     "opacity": { "50": 0.5 }
    /// })).unwrap();
    /// assert_eq!(tree.get_path("opacity.50"), Some("0.5"));
    ///
    /// let err = ThemeTree::from_json(&serde_json::json!({ "colors": { "x": null } }));
    /// assert!(err.is_err());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Self::from_json_at(value, "")
    }

    /// Like [`ThemeTree::from_json`], with error paths prefixed by `section`
    /// (`theme.extend`, `plugins[forms].theme`).
    pub(crate) fn from_json_at(value: &serde_json::Value, section: &str) -> Result<Self> {
        let mut path = Vec::new();
        if !section.is_empty() {
            path.push(section);
        }
        match value {
            serde_json::Value::Object(map) => Self::from_json_map(map, &mut path),
            other => Err(ConfigError::invalid_token(
                path.as_slice(),
                format!("expected a mapping of categories, found {}", kind(other)),
            )),
        }
    }

    fn from_json_map<'a>(
        map: &'a serde_json::Map<String, serde_json::Value>,
        path: &mut Vec<&'a str>,
    ) -> Result<Self> {
        let mut tree = ThemeTree::new();
        for (key, value) in map {
            path.push(key);
            let node = match value {
                serde_json::Value::String(s) => ThemeValue::Scalar(s.clone()),
                serde_json::Value::Number(n) => ThemeValue::Scalar(n.to_string()),
                serde_json::Value::Bool(b) => ThemeValue::Scalar(b.to_string()),
                serde_json::Value::Object(inner) => {
                    ThemeValue::Subtree(Self::from_json_map(inner, path)?)
                }
                other => {
                    return Err(ConfigError::invalid_token(
                        path.as_slice(),
                        format!("expected a scalar or a mapping, found {}", kind(other)),
                    ))
                }
            };
            tree.entries.insert(key.clone(), node);
            path.pop();
        }
        Ok(tree)
    }
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}

impl Serialize for ThemeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ThemeValue::Scalar(value) => serializer.serialize_str(value),
            ThemeValue::Subtree(tree) => tree.serialize(serializer),
        }
    }
}

impl Serialize for ThemeTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palette() -> ThemeTree {
        ThemeTree::new()
            .subtree(
                "colors",
                ThemeTree::new()
                    .scalar("red", "#FF0000")
                    .subtree("gray", ThemeTree::new().scalar("100", "#f3f4f6")),
            )
            .subtree("spacing", ThemeTree::new().scalar("1", "0.25rem"))
    }

    #[test]
    fn test_tree_new_is_empty() {
        let tree = ThemeTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_tree_get_path() {
        let tree = palette();
        assert_eq!(tree.get_path("colors.red"), Some("#FF0000"));
        assert_eq!(tree.get_path("colors.gray.100"), Some("#f3f4f6"));
        assert_eq!(tree.get_path("colors.gray"), None);
        assert_eq!(tree.get_path("colors.blue"), None);
        assert_eq!(tree.get_path("colors.red.extra"), None);
    }

    #[test]
    fn test_tree_dotted_keys_addressable() {
        let tree = ThemeTree::new().subtree(
            "spacing",
            ThemeTree::new()
                .scalar("0", "0px")
                .scalar("0.5", "0.125rem")
                .scalar("1", "0.25rem"),
        );
        assert_eq!(tree.get_path("spacing.0.5"), Some("0.125rem"));
        assert_eq!(tree.get_path("spacing.0"), Some("0px"));
        assert_eq!(tree.get_segments(&["spacing", "0.5"]), Some("0.125rem"));
        assert_eq!(tree.get_segments(&["spacing", "0", "5"]), None);
    }

    #[test]
    fn test_tree_dotted_lookup_backtracks_past_subtree() {
        let tree = ThemeTree::new()
            .subtree("a", ThemeTree::new().scalar("x", "1"))
            .scalar("a.b", "2");
        assert_eq!(tree.get_path("a.x"), Some("1"));
        assert_eq!(tree.get_path("a.b"), Some("2"));
        assert!(tree.lookup("a.c").is_none());
    }

    #[test]
    fn test_tokens_round_trip_through_segments() {
        let tree = ThemeTree::new().subtree(
            "spacing",
            ThemeTree::new().scalar("0.5", "0.125rem").scalar("2.5", "0.625rem"),
        );
        for token in tree.tokens() {
            assert_eq!(tree.get_segments(token.segments()), Some(token.value()));
            assert_eq!(tree.get_path(token.path()), Some(token.value()));
        }
    }

    #[test]
    fn test_tree_lookup_subtree() {
        let tree = palette();
        let gray = tree.lookup("colors.gray").and_then(ThemeValue::as_subtree);
        assert_eq!(gray.map(ThemeTree::len), Some(1));
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut tree = ThemeTree::new().scalar("a", "1").scalar("b", "2");
        tree.insert("a", "3");
        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(tree.get_path("a"), Some("3"));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut tree = ThemeTree::new()
            .scalar("a", "1")
            .scalar("b", "2")
            .scalar("c", "3");
        assert!(tree.remove("a").is_some());
        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_tokens_depth_first_in_order() {
        let tokens = palette().tokens();
        let paths: Vec<&str> = tokens.iter().map(|t| t.path()).collect();
        assert_eq!(paths, vec!["colors.red", "colors.gray.100", "spacing.1"]);
        assert_eq!(tokens[0].value(), "#FF0000");
    }

    // =========================================================================
    // JSON ingestion
    // =========================================================================

    #[test]
    fn test_from_json_preserves_key_order() {
        let tree = ThemeTree::from_json(&json!({
            "colors": { "ny-red": "#C41E3A", "ny-gold": "#FFD700", "amber": "#f59e0b" }
        }))
        .unwrap();
        let colors = tree.get("colors").and_then(ThemeValue::as_subtree).unwrap();
        let keys: Vec<&str> = colors.keys().collect();
        assert_eq!(keys, vec!["ny-red", "ny-gold", "amber"]);
    }

    #[test]
    fn test_from_json_scalars_stringified() {
        let tree = ThemeTree::from_json(&json!({
            "zIndex": { "10": 10 },
            "flags": { "enabled": true }
        }))
        .unwrap();
        assert_eq!(tree.get_path("zIndex.10"), Some("10"));
        assert_eq!(tree.get_path("flags.enabled"), Some("true"));
    }

    #[test]
    fn test_from_json_null_reports_path() {
        let err = ThemeTree::from_json(&json!({
            "colors": { "ok": "#fff", "broken": null }
        }))
        .unwrap_err();
        match err {
            ConfigError::InvalidTokenValue { path, message } => {
                assert_eq!(path, "colors.broken");
                assert!(message.contains("null"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_sequence_rejected() {
        let err = ThemeTree::from_json(&json!({
            "fontFamily": { "sans": ["Inter", "sans-serif"] }
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTokenValue { ref path, .. } if path == "fontFamily.sans"
        ));
    }

    #[test]
    fn test_from_json_non_object_root_rejected() {
        assert!(ThemeTree::from_json(&json!("colors")).is_err());
    }

    #[test]
    fn test_from_json_at_prefixes_error_paths() {
        let err = ThemeTree::from_json_at(&json!(null), "theme.extend").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTokenValue {
                path: "theme.extend".to_string(),
                message: "expected a mapping of categories, found null".to_string(),
            }
        );

        let err =
            ThemeTree::from_json_at(&json!({ "colors": { "x": [1] } }), "theme.extend").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTokenValue { ref path, .. } if path == "theme.extend.colors.x"
        ));
    }

    #[test]
    fn test_serialize_nested_map() {
        let value = serde_json::to_value(palette()).unwrap();
        assert_eq!(
            value,
            json!({
                "colors": { "red": "#FF0000", "gray": { "100": "#f3f4f6" } },
                "spacing": { "1": "0.25rem" }
            })
        );
    }
}
