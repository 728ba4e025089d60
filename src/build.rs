//! Full site build.
//!
//! ```text
//! index.md present?  ── no ──→ MissingIndex (nothing touched)
//!        │
//!  recreate _site/
//!        │
//!  discover ─→ for each page: read → title → render → _site/<page>.html
//!        │
//!  title map ─→ table of contents ─→ index.md template ─→ _site/index.html
//! ```
//!
//! Builds are always complete rebuilds. The output directory is deleted and
//! recreated first, so no state survives between runs. Pages are processed
//! one at a time and the first failure aborts the build; whatever was already
//! written is left as-is and must not be treated as a usable site.

use crate::config::{ConfigError, SiteConfig, SitePaths};
use crate::discover::{self, DiscoverError};
use crate::naming::fallback_title;
use crate::render::{RenderError, Renderer, write_rendered};
use crate::title::resolve_title;
use crate::toc::{self, HOME_TITLE};
use crate::types::{BuildReport, Page, TitleMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Index template not found: {0}")]
    MissingIndex(PathBuf),
    #[error("Refusing to delete output directory {0}: it contains the site root")]
    UnsafeOutputDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Discovery error: {0}")]
    Discover(#[from] DiscoverError),
    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: RenderError },
}

/// Rebuild the whole site into `paths.output`.
pub fn build(
    paths: &SitePaths,
    config: &SiteConfig,
    renderer: &dyn Renderer,
) -> Result<BuildReport, BuildError> {
    let template = read_index_template(&paths.index)?;
    recreate_output_dir(paths)?;

    let sources = discover::discover(paths, &config.source_extension)?;
    info!(pages = sources.len(), renderer = renderer.name(), "rendering pages");

    let mut pages = Vec::with_capacity(sources.len());
    let mut titles = TitleMap::new();
    for source in sources {
        let text = fs::read_to_string(paths.root.join(&source))?;
        let page = resolve_page(&source, &text, &config.output_extension);
        let output = paths.output.join(&page.output);
        debug!(source = %source.display(), title = %page.title, "rendering page");
        write_rendered(renderer, &text, &output, &page.title).map_err(|e| BuildError::Render {
            path: source.clone(),
            source: e,
        })?;
        titles.insert(source, page.title.clone());
        pages.push(page);
    }

    let index_text = toc::synthesize_index(
        &template,
        &titles,
        &config.placeholder,
        &config.output_extension,
    );
    let index = paths.output.join(format!("index.{}", config.output_extension));
    write_rendered(renderer, &index_text, &index, HOME_TITLE).map_err(|e| {
        BuildError::Render {
            path: paths.index.clone(),
            source: e,
        }
    })?;
    info!(output = %paths.output.display(), "build complete");

    Ok(BuildReport {
        pages,
        index,
        output_dir: paths.output.clone(),
        renderer: renderer.name().to_string(),
    })
}

/// Discover pages and resolve their titles without rendering anything.
pub fn check(paths: &SitePaths, config: &SiteConfig) -> Result<Vec<Page>, BuildError> {
    read_index_template(&paths.index)?;
    let sources = discover::discover(paths, &config.source_extension)?;
    let mut pages = Vec::with_capacity(sources.len());
    for source in sources {
        let text = fs::read_to_string(paths.root.join(&source))?;
        pages.push(resolve_page(&source, &text, &config.output_extension));
    }
    Ok(pages)
}

/// Title and output location for one document.
pub fn resolve_page(source: &Path, text: &str, output_extension: &str) -> Page {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let title = resolve_title(text, &fallback_title(&stem));
    Page {
        source: source.to_path_buf(),
        output: source.with_extension(output_extension),
        title: title.text,
        title_source: title.source,
    }
}

fn read_index_template(index: &Path) -> Result<String, BuildError> {
    match fs::read_to_string(index) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(BuildError::MissingIndex(index.to_path_buf()))
        }
        Err(e) => Err(BuildError::Io(e)),
    }
}

/// Delete and recreate the output directory.
///
/// Refuses when the output directory is the root or one of its ancestors,
/// since deleting it would delete the sources.
fn recreate_output_dir(paths: &SitePaths) -> Result<(), BuildError> {
    if discover::is_within(&paths.root, &paths.output) {
        return Err(BuildError::UnsafeOutputDir(paths.output.clone()));
    }
    if paths.output.exists() {
        debug!(path = %paths.output.display(), "removing previous output");
        fs::remove_dir_all(&paths.output)?;
    }
    fs::create_dir_all(&paths.output)?;
    Ok(())
}
