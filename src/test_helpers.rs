//! Shared test utilities for the sitedown test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = site_with(&[
//!     ("index.md", "# Home\n\n<!-- TABLE_OF_CONTENTS -->"),
//!     ("guide.md", "# Guide"),
//! ]);
//! let paths = site_paths(&site);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::{SiteConfig, SitePaths};
use crate::types::Page;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create a temp site from `(relative path, contents)` pairs.
pub fn site_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, contents) in files {
        write_file(tmp.path(), rel, contents);
    }
    tmp
}

/// Write `contents` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Resolve default-config paths for a temp site.
pub fn site_paths(site: &TempDir) -> SitePaths {
    SitePaths::resolve(site.path(), &SiteConfig::default()).unwrap()
}

// =========================================================================
// Report lookups. Panics with a clear message on miss.
// =========================================================================

/// Find a page by its source path (forward slashes). Panics if not found.
pub fn find_page<'a>(pages: &'a [Page], source: &str) -> &'a Page {
    pages
        .iter()
        .find(|p| p.source == Path::new(source))
        .unwrap_or_else(|| {
            let sources: Vec<String> = pages
                .iter()
                .map(|p| p.source.display().to_string())
                .collect();
            panic!("page '{source}' not found. Available: {sources:?}")
        })
}

/// All page titles in report order.
pub fn page_titles(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(|p| p.title.as_str()).collect()
}
