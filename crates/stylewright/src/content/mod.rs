//! Content-source resolution.
//!
//! Content sources are the files a build scans for class-name usage. They are
//! declared as glob patterns relative to the configuration root:
//!
//! ```yaml
//! content:
//!   - ./index.html
//!   - ./src/**/*.{vue,js,ts,jsx,tsx}
//!   - "!./src/legacy/**"
//! ```
//!
//! [`resolve`] expands the patterns into a [`ContentFileSet`]: canonical
//! absolute paths, deduplicated, in first-seen order. Traversal is read-only.
//!
//! ## Missing Files
//!
//! A pattern rooted in a directory that does not exist simply matches
//! nothing. Only when *every* pattern comes up empty is a
//! [`NoContentFilesFound`](crate::ConfigError::NoContentFilesFound) warning
//! attached to the (empty, successful) result: a brand new project may not
//! have sources yet. An empty pattern list, on the other hand, is a fatal
//! [`EmptyContentSources`](crate::ConfigError::EmptyContentSources) error.
//!
//! ## Skipped Directories
//!
//! Version-control metadata (`.git`, `.hg`, `.svn`) is never traversed.
//! `node_modules` is skipped unless a pattern names it explicitly.

mod pattern;
mod resolver;

pub use pattern::PathPattern;
pub use resolver::{expand_pattern, resolve, ContentFileSet, ContentResolver};
