//! Theme token trees and the extend-merge engine.
//!
//! A theme is a tree of design tokens: categories (`colors`, `spacing`, ...)
//! that nest down to scalar values. The engine ships a built-in
//! [`default_theme`]; user configuration layers on top of it.
//!
//! ## How Merging Works
//!
//! Extension trees are merged over the defaults key by key:
//!
//! ```yaml
//! # default
//! colors:
//!   red: "#FF0000"
//!   blue: "#0000FF"
//!
//! # extension
//! colors:
//!   red: "#000000"      # overrides the default
//!   ny-red: "#C41E3A"   # added after the defaults
//! ```
//!
//! resolves to `red: "#000000"`, `blue: "#0000FF"`, `ny-red: "#C41E3A"`.
//! Subtrees merge recursively; when either side is a scalar, the extension
//! wins outright. Nothing the extension does not mention is removed.
//!
//! ## Determinism
//!
//! Trees preserve insertion order, and merging keeps defaults in place while
//! appending new keys. Identical inputs always produce identically ordered
//! output, which keeps generated stylesheets diff-stable.

mod defaults;
mod merge;
mod token;
mod tree;

pub use defaults::{default_theme, parse_theme_yaml};
pub use merge::{merge, merge_layers};
pub use token::Token;
pub use tree::{ThemeTree, ThemeValue};
