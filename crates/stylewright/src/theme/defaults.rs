//! The built-in default theme.

use once_cell::sync::Lazy;

use crate::error::{ConfigError, Result};
use crate::util::yaml_to_json;

use super::tree::ThemeTree;

const DEFAULT_THEME_YAML: &str = include_str!("default_theme.yaml");

static DEFAULT_THEME: Lazy<ThemeTree> = Lazy::new(|| {
    parse_theme_yaml(DEFAULT_THEME_YAML).expect("embedded default theme must be a valid theme tree")
});

/// Returns the built-in default theme.
///
/// The tree is parsed once per process and never mutated; merging always
/// works on clones.
///
/// ```rust
/// let theme = stylewright::theme::default_theme();
/// assert_eq!(theme.get_path("colors.white"), Some("#ffffff"));
/// assert_eq!(theme.get_path("spacing.4"), Some("1rem"));
/// ```
pub fn default_theme() -> &'static ThemeTree {
    &DEFAULT_THEME
}

/// Parses a theme tree from a YAML document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed YAML and
/// [`ConfigError::InvalidTokenValue`] for nodes that are neither scalars nor
/// mappings.
pub fn parse_theme_yaml(yaml: &str) -> Result<ThemeTree> {
    let parse_error = |message: String| ConfigError::Parse {
        path: None,
        message,
    };
    let document: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| parse_error(e.to_string()))?;
    let json = yaml_to_json(document).map_err(parse_error)?;
    ThemeTree::from_json(&json)
}
