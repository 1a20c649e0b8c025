//! One resolution pass over a configuration.
//!
//! [`resolve_config`] runs both engines in a fixed order and either returns
//! everything a build needs or fails before any output exists:
//!
//! 1. an empty `content` list is rejected before the theme is touched;
//! 2. content patterns are expanded into a [`ContentFileSet`];
//! 3. the theme is layered: defaults, category replacements, plugin tokens
//!    (declaration order), then `theme.extend`.

use std::path::Path;

use tracing::{debug, info_span};

use crate::config::{Config, PluginRef};
use crate::content::{ContentFileSet, ContentResolver};
use crate::error::{ConfigError, Result};
use crate::theme::{default_theme, merge_layers, ThemeTree, Token};

/// The outcome of a successful resolution pass.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Files to scan for class usage.
    pub files: ContentFileSet,
    /// The resolved theme tree.
    pub theme: ThemeTree,
    /// Plugin references, passed through unchanged.
    pub plugins: Vec<PluginRef>,
}

impl Resolved {
    /// The resolved theme flattened into tokens, in tree order.
    pub fn tokens(&self) -> Vec<Token> {
        self.theme.tokens()
    }

    /// Non-fatal diagnostics collected during the pass.
    pub fn warnings(&self) -> &[ConfigError] {
        self.files.warnings()
    }
}

/// Resolves `config` against the built-in default theme.
///
/// Content patterns are resolved relative to `root`, unless the
/// configuration was loaded from a file, in which case the file's directory
/// is used.
///
/// # Errors
///
/// Any fatal [`ConfigError`]; see [`ContentResolver::resolve`].
///
/// # Example
///
/// ```rust,no_run
/// use stylewright::{resolve_config, Config};
///
/// let config = Config::from_file("stylewright.config.yaml")?;
/// let resolved = resolve_config(&config, ".")?;
///
/// for path in resolved.files.iter() {
///     println!("scan {}", path.display());
/// }
/// for token in resolved.tokens() {
///     println!("{token}");
/// }
/// # Ok::<(), stylewright::ConfigError>(())
/// ```
pub fn resolve_config(config: &Config, root: impl AsRef<Path>) -> Result<Resolved> {
    resolve_config_with(config, root, default_theme())
}

/// Resolves `config` against an explicit base theme.
pub fn resolve_config_with(
    config: &Config,
    root: impl AsRef<Path>,
    base: &ThemeTree,
) -> Result<Resolved> {
    let _span = info_span!("resolve_config").entered();

    if config.content.is_empty() {
        return Err(ConfigError::EmptyContentSources);
    }

    let root = config.root_dir().unwrap_or(root.as_ref());
    let files = ContentResolver::new(root).resolve(&config.content)?;
    let theme = resolve_theme(config, base);
    debug!(
        files = files.len(),
        tokens = theme.tokens().len(),
        "configuration resolved"
    );

    Ok(Resolved {
        files,
        theme,
        plugins: config.plugins.clone(),
    })
}

/// Layers the configuration's theme sections over `base`.
pub fn resolve_theme(config: &Config, base: &ThemeTree) -> ThemeTree {
    let replaced = base.clone().replace_categories(config.theme.replace.clone());
    let plugin_layers = config
        .plugins
        .iter()
        .filter_map(|plugin| plugin.theme.clone());
    let user_layer = std::iter::once(config.theme.extend.clone());
    merge_layers(replaced, plugin_layers.chain(user_layer))
}
