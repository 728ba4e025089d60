//! Site configuration module.
//!
//! Handles loading, validating, and resolving `site.toml`. The file lives in
//! the site root and is optional: stock defaults are used for anything it
//! doesn't mention.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "_site"                       # Recreated on every build
//! index = "index.md"                         # Home page template
//! source_extension = "md"                    # Files picked up by discovery
//! output_extension = "html"                  # Extension of rendered pages
//! placeholder = "<!-- TABLE_OF_CONTENTS -->" # Replaced in the index template
//!
//! [renderer]
//! backend = "pandoc"    # "pandoc" or "builtin"
//! command = "pandoc"    # Executable used by the pandoc backend
//! from = "markdown"     # pandoc input format
//! to = "html"           # pandoc output format
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [renderer]
//! backend = "builtin"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Resolved Paths
//!
//! Components never read an ambient "current site". The root, output
//! directory and index template are resolved once into [`SitePaths`] and
//! passed down explicitly, so tests can point a build at any temp directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Output directory, relative to the site root unless absolute.
    pub output_dir: PathBuf,
    /// Index template, relative to the site root unless absolute.
    pub index: PathBuf,
    /// Extension (without dot) of source documents.
    pub source_extension: String,
    /// Extension (without dot) given to rendered documents.
    pub output_extension: String,
    /// Literal marker in the index template replaced by the table of contents.
    pub placeholder: String,
    /// Rendering collaborator settings.
    pub renderer: RendererConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("_site"),
            index: PathBuf::from("index.md"),
            source_extension: "md".to_string(),
            output_extension: "html".to_string(),
            placeholder: "<!-- TABLE_OF_CONTENTS -->".to_string(),
            renderer: RendererConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self.index.as_os_str().is_empty() {
            return Err(ConfigError::Validation("index must not be empty".into()));
        }
        validate_extension("source_extension", &self.source_extension)?;
        validate_extension("output_extension", &self.output_extension)?;
        if self.placeholder.is_empty() {
            return Err(ConfigError::Validation(
                "placeholder must not be empty".into(),
            ));
        }
        if self.renderer.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "renderer.command must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn validate_extension(key: &str, ext: &str) -> Result<(), ConfigError> {
    if ext.is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if ext.starts_with('.') {
        return Err(ConfigError::Validation(format!(
            "{key} must not start with a dot (got {ext:?})"
        )));
    }
    Ok(())
}

/// Which rendering collaborator turns Markdown into HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// External `pandoc` subprocess.
    #[default]
    Pandoc,
    /// In-process pulldown-cmark conversion.
    Builtin,
}

/// Rendering collaborator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    pub backend: Backend,
    /// Executable invoked by the pandoc backend.
    pub command: String,
    /// pandoc `-f` argument.
    pub from: String,
    /// pandoc `-t` argument.
    pub to: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Pandoc,
            command: "pandoc".to_string(),
            from: "markdown".to_string(),
            to: "html".to_string(),
        }
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `site.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the site root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Absolute locations every pipeline component works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    /// Canonical site root. Discovery starts here.
    pub root: PathBuf,
    /// Output directory, recreated on every build.
    pub output: PathBuf,
    /// Index template document.
    pub index: PathBuf,
}

impl SitePaths {
    /// Resolve the configured output and index locations against `root`.
    ///
    /// The root must exist; it is canonicalized so that ancestor checks in
    /// discovery compare like with like.
    pub fn resolve(root: &Path, config: &SiteConfig) -> Result<Self, ConfigError> {
        let root = root.canonicalize()?;
        let output = root.join(&config.output_dir);
        let index = root.join(&config.index);
        Ok(Self {
            root,
            output,
            index,
        })
    }
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# sitedown configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Output directory. Deleted and recreated on every build, so never point it
# at the site root or one of its parents.
output_dir = "_site"

# Home page template. Rendered to <output_dir>/index.html with the title
# "Home". It is not rendered as a regular page.
index = "index.md"

# Extension of source documents picked up by discovery (no leading dot).
source_extension = "md"

# Extension given to rendered documents and used in index links.
output_extension = "html"

# Marker in the index template replaced by the generated table of contents.
placeholder = "<!-- TABLE_OF_CONTENTS -->"

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[renderer]
# "pandoc" shells out to an external pandoc; "builtin" converts in-process.
backend = "pandoc"

# Executable used by the pandoc backend. Must be on PATH.
command = "pandoc"

# pandoc input (-f) and output (-t) formats.
from = "markdown"
to = "html"
"##
}
