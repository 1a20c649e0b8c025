//! # Stylewright - Content Scanning and Theme Token Resolution
//!
//! `stylewright` is the configuration core of a utility-CSS build: it works
//! out *which files* to scan for class names and *which design tokens* the
//! generated classes may use. Scanning the files and emitting CSS are left to
//! the host build.
//!
//! ## Core Concepts
//!
//! - [`content::resolve`]: Expand glob patterns into an ordered, deduplicated
//!   [`ContentFileSet`]
//! - [`ThemeTree`]: Nested categories of design tokens (`colors.ny-red`)
//! - [`theme::merge`]: Extend-merge a user tree over the built-in defaults
//! - [`Config`]: The YAML/JSON configuration naming both
//! - [`resolve_config`]: One pass producing files and the resolved theme
//!
//! ## Quick Start
//!
//! ```rust
//! use stylewright::theme::{default_theme, merge, ThemeTree};
//!
//! let extension = ThemeTree::new().subtree(
//!     "colors",
//!     ThemeTree::new()
//!         .scalar("ny-red", "#C41E3A")
//!         .scalar("ny-gold", "#FFD700"),
//! );
//!
//! let resolved = merge(default_theme(), &extension);
//!
//! // Additions sit next to every default color
//! assert_eq!(resolved.get_path("colors.ny-red"), Some("#C41E3A"));
//! assert_eq!(resolved.get_path("colors.white"), Some("#ffffff"));
//! ```
//!
//! ## From Configuration
//!
//! ```rust
//! use stylewright::{resolve_config, Config};
//!
//! let config = Config::from_yaml(r##"
//! content:
//!   - ./index.html
//!   - ./src/**/*.{vue,js,ts,jsx,tsx}
//! theme:
//!   extend:
//!     colors:
//!       ny-red: "#C41E3A"
//!       ny-gold: "#FFD700"
//! "##).unwrap();
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("index.html"), "<h1 class=\"text-ny-red\">2025</h1>").unwrap();
//!
//! let resolved = resolve_config(&config, dir.path()).unwrap();
//! assert_eq!(resolved.files.len(), 1);
//! assert_eq!(resolved.theme.get_path("colors.ny-gold"), Some("#FFD700"));
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`ConfigError`]. An empty `content` list or a malformed
//! token value aborts resolution; finding no files at all is only a warning,
//! available from [`Resolved::warnings`].

pub mod config;
pub mod content;
mod error;
mod resolve;
pub mod theme;
mod util;

pub use config::{Config, PluginRef, ThemeConfig};
pub use content::{ContentFileSet, ContentResolver, PathPattern};
pub use error::{ConfigError, Result};
pub use resolve::{resolve_config, resolve_config_with, resolve_theme, Resolved};
pub use theme::{default_theme, ThemeTree, ThemeValue, Token};
