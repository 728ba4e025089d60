//! Shared types passed between discovery, the build driver and output.

use crate::title::TitleSource;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Document path (relative to the site root) → resolved title.
///
/// A `BTreeMap` so iteration is always in path-component order, which keeps
/// the generated table of contents deterministic.
pub type TitleMap = BTreeMap<PathBuf, String>;

/// A source document and where its rendered form goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Source path relative to the site root (e.g. `notes/tips.md`)
    pub source: PathBuf,
    /// Output path relative to the output directory (e.g. `notes/tips.html`)
    pub output: PathBuf,
    /// Display title
    pub title: String,
    /// Which extraction rule produced the title
    pub title_source: TitleSource,
}

/// Result of a full build, consumed by [`crate::output`].
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Rendered pages in path order.
    pub pages: Vec<Page>,
    /// Absolute path of the rendered home page.
    pub index: PathBuf,
    /// Absolute path of the output directory.
    pub output_dir: PathBuf,
    /// Name of the renderer that produced the site.
    pub renderer: String,
}
