//! Content path patterns.
//!
//! A [`PathPattern`] is a glob relative to a base directory. Parsing splits it
//! into a static directory prefix (where traversal starts) and the glob
//! proper, which is matched against paths relative to that prefix:
//!
//! | Pattern | Walk root | Glob |
//! |---------|-----------|------|
//! | `./index.html` | *(literal)* | |
//! | `./src/**/*.{vue,js,ts}` | `src/` | `**/*.{vue,js,ts}` |
//! | `*.html` | `./` | `*.html` |
//! | `!src/legacy/**` | `src/legacy/` | `**` (negated) |
//!
//! Glob syntax: `*` stays within a path segment, `**` spans any number of
//! segments, `?` matches one character, `[...]` is a character class and
//! `{a,b}` an alternation.

use std::fmt;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{ConfigError, Result};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// A parsed content pattern, bound to its base directory.
#[derive(Clone)]
pub struct PathPattern {
    raw: String,
    negated: bool,
    base_dir: PathBuf,
    kind: PatternKind,
}

#[derive(Clone)]
enum PatternKind {
    /// No glob metacharacters: a single file, or every file below a directory.
    Literal(PathBuf),
    /// Glob matched against paths relative to `root`.
    Glob { root: PathBuf, matcher: GlobMatcher },
}

impl PathPattern {
    /// Parses `raw` relative to `base_dir`.
    ///
    /// A leading `!` negates the pattern; leading `./` segments are ignored.
    /// Absolute patterns ignore `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] for blank patterns and globs
    /// that fail to compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::Path;
    /// use stylewright::content::PathPattern;
    ///
    /// let pattern = PathPattern::parse("./src/**/*.{vue,js,ts,jsx,tsx}", "/project").unwrap();
    /// assert!(pattern.matches(Path::new("/project/src/App.vue")));
    /// assert!(pattern.matches(Path::new("/project/src/components/deep/Button.tsx")));
    /// assert!(!pattern.matches(Path::new("/project/src/styles.css")));
    /// assert!(!pattern.matches(Path::new("/project/index.html")));
    /// ```
    pub fn parse(raw: &str, base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let invalid = |message: &str| ConfigError::InvalidPattern {
            pattern: raw.to_string(),
            message: message.to_string(),
        };

        let trimmed = raw.trim();
        let (negated, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        let body = strip_current_dir(body);
        if body.is_empty() {
            return Err(invalid("pattern is empty"));
        }

        let kind = match body.find(GLOB_META) {
            None => PatternKind::Literal(base_dir.join(body)),
            Some(first_meta) => {
                // Everything up to the last separator before the first
                // metacharacter is a plain directory prefix.
                let (prefix, glob) = match body[..first_meta].rfind('/') {
                    Some(slash) => (&body[..=slash], &body[slash + 1..]),
                    None => ("", body),
                };
                let matcher = GlobBuilder::new(glob)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| invalid(&e.kind().to_string()))?
                    .compile_matcher();
                PatternKind::Glob {
                    root: base_dir.join(prefix),
                    matcher,
                }
            }
        };

        Ok(Self {
            raw: raw.to_string(),
            negated,
            base_dir,
            kind,
        })
    }

    /// The pattern as declared.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns true for `!`-prefixed exclusion patterns.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The directory the pattern is relative to.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns true if the pattern contains no glob metacharacters.
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, PatternKind::Literal(_))
    }

    /// The directory traversal starts from.
    ///
    /// For a literal pattern this is the literal path itself, which may name
    /// a file.
    pub fn walk_root(&self) -> &Path {
        match &self.kind {
            PatternKind::Literal(path) => path,
            PatternKind::Glob { root, .. } => root,
        }
    }

    /// Returns true if the pattern explicitly reaches into `dir_name`.
    ///
    /// Used to decide whether normally skipped directories such as
    /// `node_modules` should be traversed.
    pub(crate) fn mentions(&self, dir_name: &str) -> bool {
        self.raw.split(['/', '\\']).any(|segment| segment == dir_name)
    }

    /// Tests a path against the pattern, ignoring negation.
    ///
    /// Paths are compared lexically; callers pass paths built from the same
    /// base directory.
    pub fn matches(&self, path: &Path) -> bool {
        match &self.kind {
            PatternKind::Literal(literal) => path == literal || path.starts_with(literal),
            PatternKind::Glob { root, matcher } => match path.strip_prefix(root) {
                Ok(relative) => matcher.is_match(to_slash(relative)),
                Err(_) => false,
            },
        }
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathPattern")
            .field("raw", &self.raw)
            .field("negated", &self.negated)
            .field("walk_root", &self.walk_root())
            .finish()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn strip_current_dir(mut body: &str) -> &str {
    while let Some(rest) = body.strip_prefix("./") {
        body = rest.trim_start_matches('/');
    }
    body
}

/// Renders a relative path with `/` separators for glob matching.
pub(crate) fn to_slash(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
