//! Expansion of content patterns into a concrete file list.

use std::path::{Path, PathBuf};

use indexmap::set::{IndexSet, Slice};
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ConfigError, Result};

use super::pattern::PathPattern;

/// Directories never traversed.
const ALWAYS_SKIPPED: &[&str] = &[".git", ".hg", ".svn"];

/// Directories traversed only when a pattern names them explicitly.
const SKIPPED_UNLESS_NAMED: &[&str] = &["node_modules"];

/// The ordered, deduplicated result of resolving content patterns.
///
/// Paths are canonical and absolute. Order is first-seen order: patterns in
/// declaration order, files within a pattern sorted by name during traversal.
#[derive(Debug, Clone, Default)]
pub struct ContentFileSet {
    files: IndexSet<PathBuf>,
    warnings: Vec<ConfigError>,
}

impl ContentFileSet {
    /// The resolved paths, in order.
    pub fn paths(&self) -> &Slice<PathBuf> {
        self.files.as_slice()
    }

    /// Iterates over the resolved paths, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Number of resolved files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no file matched.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns true if `path` is part of the set.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    /// Non-fatal diagnostics raised during resolution.
    pub fn warnings(&self) -> &[ConfigError] {
        &self.warnings
    }
}

// Order matters: two sets with the same files in a different order differ.
impl PartialEq for ContentFileSet {
    fn eq(&self, other: &Self) -> bool {
        self.paths() == other.paths() && self.warnings == other.warnings
    }
}

impl Eq for ContentFileSet {}

impl IntoIterator for ContentFileSet {
    type Item = PathBuf;
    type IntoIter = indexmap::set::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl From<ContentFileSet> for Vec<PathBuf> {
    fn from(set: ContentFileSet) -> Self {
        set.files.into_iter().collect()
    }
}

/// Resolves content patterns against a root directory.
///
/// Patterns are expanded in parallel; the results are re-joined in
/// declaration order before deduplication, so the output never depends on
/// scheduling.
///
/// # Example
///
/// ```rust,ignore
/// use stylewright::content::ContentResolver;
///
/// let files = ContentResolver::new("./my-app")
///     .resolve(&["./index.html", "./src/**/*.{vue,js,ts,jsx,tsx}"])?;
/// for path in files.iter() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ContentResolver {
    root: PathBuf,
    parallel: bool,
}

impl ContentResolver {
    /// Creates a resolver for patterns relative to `root`.
    ///
    /// The root is canonicalized when it exists, so results are absolute.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        Self {
            root,
            parallel: true,
        }
    }

    /// Expands patterns one after the other on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The directory patterns are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `patterns` into a [`ContentFileSet`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyContentSources`] if `patterns` is empty
    /// - [`ConfigError::InvalidPattern`] if a pattern is blank or malformed
    ///
    /// Zero matches overall is not an error: the returned set is empty and
    /// carries a [`ConfigError::NoContentFilesFound`] warning.
    pub fn resolve<S: AsRef<str>>(&self, patterns: &[S]) -> Result<ContentFileSet> {
        if patterns.is_empty() {
            return Err(ConfigError::EmptyContentSources);
        }

        let parsed = patterns
            .iter()
            .map(|raw| PathPattern::parse(raw.as_ref(), &self.root))
            .collect::<Result<Vec<_>>>()?;
        let (negated, positive): (Vec<_>, Vec<_>) =
            parsed.into_iter().partition(PathPattern::is_negated);

        let expanded: Vec<Vec<PathBuf>> = if self.parallel && positive.len() > 1 {
            positive.par_iter().map(expand_pattern).collect()
        } else {
            positive.iter().map(expand_pattern).collect()
        };

        let mut files = IndexSet::new();
        for path in expanded.into_iter().flatten() {
            // Negations see both spellings, so a symlinked directory cannot
            // smuggle in an excluded file.
            let canonical = path.canonicalize().unwrap_or_else(|_| path.clone());
            if negated
                .iter()
                .any(|pattern| pattern.matches(&path) || pattern.matches(&canonical))
            {
                debug!(path = %path.display(), "excluded by negated pattern");
                continue;
            }
            files.insert(canonical);
        }

        let mut warnings = Vec::new();
        if files.is_empty() {
            let warning = ConfigError::NoContentFilesFound {
                patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        debug!(files = files.len(), "resolved content sources");
        Ok(ContentFileSet { files, warnings })
    }
}

/// Resolves `patterns` relative to `root_dir`.
///
/// Shorthand for [`ContentResolver::new`] followed by
/// [`ContentResolver::resolve`].
pub fn resolve<S: AsRef<str>>(patterns: &[S], root_dir: impl AsRef<Path>) -> Result<ContentFileSet> {
    ContentResolver::new(root_dir).resolve(patterns)
}

/// Lists the files a single (non-negated) pattern matches.
///
/// A walk root that does not exist yields nothing. Unreadable entries below
/// it are logged and skipped.
pub fn expand_pattern(pattern: &PathPattern) -> Vec<PathBuf> {
    let root = pattern.walk_root();
    if pattern.is_literal() && root.is_file() {
        return vec![root.to_path_buf()];
    }
    if !root.is_dir() {
        debug!(pattern = %pattern, root = %root.display(), "pattern root does not exist");
        return Vec::new();
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !entry.file_type().is_dir() || !is_skipped(entry.path(), pattern));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(pattern = %pattern, error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && pattern.matches(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!(pattern = %pattern, matches = files.len(), "expanded content pattern");
    files
}

fn is_skipped(dir: &Path, pattern: &PathPattern) -> bool {
    let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    ALWAYS_SKIPPED.contains(&name)
        || (SKIPPED_UNLESS_NAMED.contains(&name) && !pattern.mentions(name))
}
