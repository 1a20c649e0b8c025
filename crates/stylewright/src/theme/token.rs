//! Flattened design tokens.

use std::fmt;

use serde::Serialize;

/// A resolved leaf of a theme tree: the keys leading to it and its value.
///
/// Tokens are the unit handed to class generators; `colors.ny-red` with value
/// `#C41E3A` is what ends up behind `bg-ny-red`, `text-ny-red` and friends.
/// Keys may themselves contain dots (`spacing."0.5"`), so the key sequence in
/// [`Token::segments`] is the authoritative address; [`Token::path`] is its
/// dotted rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    path: String,
    #[serde(skip)]
    segments: Vec<String>,
    value: String,
}

impl Token {
    /// Creates a token from its key sequence and a value.
    pub fn new<I, S>(segments: I, value: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        Self {
            path: segments.join("."),
            segments,
            value: value.into(),
        }
    }

    /// The full dotted path (`colors.red.500`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The keys leading to this token, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The token value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The top-level category (`colors` for `colors.red.500`).
    pub fn category(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or_default()
    }

    /// The keys below the category, joined with `-` (`red-500`).
    ///
    /// This is the suffix utility classes are usually named after. Dots inside
    /// a key are kept, so `spacing."0.5"` is named `0.5`.
    pub fn name(&self) -> String {
        self.segments.get(1..).unwrap_or_default().join("-")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.path, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_category_and_name() {
        let token = Token::new(["colors", "ny-red"], "#C41E3A");
        assert_eq!(token.category(), "colors");
        assert_eq!(token.name(), "ny-red");
    }

    #[test]
    fn test_token_nested_name() {
        let token = Token::new(["colors", "red", "500"], "#ef4444");
        assert_eq!(token.name(), "red-500");
    }

    #[test]
    fn test_token_top_level_has_empty_name() {
        let token = Token::new(["prefix"], "tw");
        assert_eq!(token.category(), "prefix");
        assert_eq!(token.name(), "");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(["colors", "ny-gold"], "#FFD700");
        assert_eq!(token.to_string(), "colors.ny-gold = #FFD700");
    }

    #[test]
    fn test_token_name_keeps_dots_inside_keys() {
        let token = Token::new(["spacing", "0.5"], "0.125rem");
        assert_eq!(token.path(), "spacing.0.5");
        assert_eq!(token.segments(), &["spacing".to_string(), "0.5".to_string()]);
        assert_eq!(token.category(), "spacing");
        assert_eq!(token.name(), "0.5");
    }

    #[test]
    fn test_token_serializes_path_and_value() {
        let token = Token::new(["spacing", "0.5"], "3px");
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            serde_json::json!({ "path": "spacing.0.5", "value": "3px" })
        );
    }
}
