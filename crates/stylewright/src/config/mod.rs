//! Build configuration.
//!
//! The configuration names the content sources to scan and the theme layers
//! to apply over the built-in defaults:
//!
//! ```yaml
//! content:
//!   - ./index.html
//!   - ./src/**/*.{vue,js,ts,jsx,tsx}
//! theme:
//!   extend:
//!     colors:
//!       ny-red: "#C41E3A"
//!       ny-gold: "#FFD700"
//! plugins: []
//! ```
//!
//! ## Theme Sections
//!
//! - `theme.extend` is merged over the defaults (see [`crate::theme`]).
//! - Any other key under `theme` replaces that whole default category:
//!   `theme: { colors: { brand: "#123456" } }` leaves `brand` as the only
//!   color. Replacements are applied before `extend`, so both can be combined.
//!
//! ## Plugins
//!
//! Plugin entries are passed through untouched, except for an optional
//! `theme` tree which is merged as an extension layer in declaration order,
//! before `theme.extend`. An entry may be a bare name:
//!
//! ```yaml
//! plugins:
//!   - forms
//!   - name: brand-colors
//!     options: { strategy: class }
//!     theme:
//!       colors:
//!         brand: "#0f766e"
//! ```
//!
//! Documents are YAML or JSON ([`Config::from_yaml`], [`Config::from_json`]).
//! Files are loaded with [`Config::from_file`] or found with
//! [`Config::discover`].

mod loader;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};
use crate::theme::ThemeTree;
use crate::util::yaml_to_json;

pub use loader::{ConfigFormat, CONFIG_EXTENSIONS, CONFIG_FILE_STEM};

/// A parsed build configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Content patterns, in declaration order.
    pub content: Vec<String>,
    /// Theme layers declared by the user.
    pub theme: ThemeConfig,
    /// Plugin references, passed through opaquely.
    pub plugins: Vec<PluginRef>,
    root_dir: Option<PathBuf>,
}

/// The `theme` section of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Top-level categories that replace their default counterparts.
    pub replace: ThemeTree,
    /// Tokens merged over the defaults.
    pub extend: ThemeTree,
}

/// A plugin entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginRef {
    /// Plugin identifier.
    pub name: String,
    /// Plugin options, uninterpreted.
    pub options: Value,
    /// Tokens contributed by the plugin, if any.
    pub theme: Option<ThemeTree>,
}

impl PluginRef {
    /// Creates a plugin reference with no options and no tokens.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
            theme: None,
        }
    }

    /// Attaches a token layer to the plugin.
    pub fn with_theme(mut self, theme: ThemeTree) -> Self {
        self.theme = Some(theme);
        self
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    content: Vec<String>,
    #[serde(default)]
    theme: Map<String, Value>,
    #[serde(default)]
    plugins: Vec<RawPlugin>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlugin {
    Name(String),
    Entry {
        name: String,
        #[serde(default)]
        options: Value,
        #[serde(default)]
        theme: Option<Value>,
    },
}

impl Config {
    /// Creates a configuration with the given content patterns and no theme.
    pub fn new<I, S>(content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the `theme.extend` tree.
    pub fn with_extend(mut self, extend: ThemeTree) -> Self {
        self.theme.extend = extend;
        self
    }

    /// Sets the categories that replace their defaults.
    pub fn with_replace(mut self, replace: ThemeTree) -> Self {
        self.theme.replace = replace;
        self
    }

    /// Appends a plugin reference.
    pub fn with_plugin(mut self, plugin: PluginRef) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Sets the directory content patterns are relative to.
    pub fn with_root_dir(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root.into());
        self
    }

    /// The directory content patterns are relative to.
    ///
    /// Set to the containing directory when loaded with
    /// [`from_file`](Config::from_file); `None` for in-memory documents.
    pub fn root_dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    /// Parses a YAML configuration document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylewright::Config;
    ///
    /// let config = Config::from_yaml(r##"
    /// content:
    ///   - ./index.html
    ///   - ./src/**/*.{vue,js,ts,jsx,tsx}
    /// theme:
    ///   extend:
    ///     colors:
    ///       ny-red: "#C41E3A"
    ///       ny-gold: "#FFD700"
    /// plugins: []
    /// "##).unwrap();
    ///
    /// assert_eq!(config.content.len(), 2);
    /// assert_eq!(config.theme.extend.get_path("colors.ny-gold"), Some("#FFD700"));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, ConfigFormat::Yaml, None)
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(json, ConfigFormat::Json, None)
    }

    pub(crate) fn parse(source: &str, format: ConfigFormat, path: Option<&Path>) -> Result<Self> {
        let parse_error = |message: String| ConfigError::Parse {
            path: path.map(Path::to_path_buf),
            message,
        };

        let document = match format {
            ConfigFormat::Json => {
                serde_json::from_str::<Value>(source).map_err(|e| parse_error(e.to_string()))?
            }
            ConfigFormat::Yaml => {
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(source).map_err(|e| parse_error(e.to_string()))?;
                yaml_to_json(yaml).map_err(parse_error)?
            }
        };
        let raw: RawConfig =
            serde_json::from_value(document).map_err(|e| parse_error(e.to_string()))?;

        let mut config = Self::from_raw(raw)?;
        config.root_dir = path.map(config_dir);
        Ok(config)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let mut theme = raw.theme;
        let extend = match theme.remove("extend") {
            Some(value) => ThemeTree::from_json_at(&value, "theme.extend")?,
            None => ThemeTree::new(),
        };
        let replace = ThemeTree::from_json_at(&Value::Object(theme), "theme")?;

        let plugins = raw
            .plugins
            .into_iter()
            .map(|plugin| match plugin {
                RawPlugin::Name(name) => Ok(PluginRef::new(name)),
                RawPlugin::Entry {
                    name,
                    options,
                    theme,
                } => {
                    let section = format!("plugins[{name}].theme");
                    let theme = theme
                        .as_ref()
                        .map(|value| ThemeTree::from_json_at(value, &section))
                        .transpose()?;
                    Ok(PluginRef {
                        name,
                        options,
                        theme,
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            content: raw.content,
            theme: ThemeConfig { replace, extend },
            plugins,
            root_dir: None,
        })
    }
}

/// The directory a config file lives in. A bare file name has an empty
/// parent, which means the current directory.
fn config_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
