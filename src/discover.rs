//! Source document discovery.
//!
//! Walks the site root and returns every source document, as a path relative
//! to the root, in a deterministic order.
//!
//! ## Inclusion Rules
//!
//! A file is a source document when all of these hold:
//!
//! - its extension is the configured source extension (`md` by default)
//! - it is not inside the output directory, even when that directory is
//!   nested under the root (`_site/old.md` is skipped, `_site2/new.md` isn't)
//! - no path segment below the root starts with `.` (`.github/README.md`,
//!   `docs/.draft.md`)
//! - it is not the index template (`index.md` at the root is skipped, while
//!   `notes/index.md` is an ordinary page)
//!
//! Hidden directories and the output directory are pruned from the walk
//! rather than filtered afterwards.
//!
//! ## Ordering
//!
//! Paths are sorted by component, so `a/b.md` sorts before `a-b.md` exactly
//! as the table of contents expects. Zero documents is not an error.

use crate::config::SitePaths;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Failed to walk site root: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Find all source documents under `paths.root`.
///
/// Returns root-relative paths, sorted and deduplicated.
pub fn discover(paths: &SitePaths, source_extension: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    let output = absolute(&paths.output);
    let index = absolute(&paths.index);

    let walker = WalkDir::new(&paths.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| keep_entry(entry, &output));

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_extension(path, source_extension) {
            continue;
        }
        if absolute(path) == index {
            debug!(path = %path.display(), "skipping index template");
            continue;
        }
        let relative = path.strip_prefix(&paths.root).unwrap_or(path);
        debug!(path = %relative.display(), "discovered document");
        documents.push(relative.to_path_buf());
    }

    documents.sort();
    documents.dedup();
    info!(count = documents.len(), root = %paths.root.display(), "discovery complete");
    Ok(documents)
}

/// Whether the walk should descend into or yield `entry`.
fn keep_entry(entry: &DirEntry, output: &Path) -> bool {
    // The root itself may legitimately be named `.` or live under a dot-dir.
    if entry.depth() == 0 {
        return true;
    }
    if is_hidden(entry) {
        debug!(path = %entry.path().display(), "skipping hidden entry");
        return false;
    }
    if entry.file_type().is_dir() && is_within(entry.path(), output) {
        debug!(path = %entry.path().display(), "skipping output directory");
        return false;
    }
    true
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Component-wise ancestor containment: `/site/_site2` is not within `/site/_site`.
pub fn is_within(path: &Path, ancestor: &Path) -> bool {
    absolute(path).starts_with(absolute(ancestor))
}

/// Canonical form of `path`.
///
/// A path that doesn't exist yet has its `.` and `..` segments resolved
/// lexically first, so `root/missing/..` still compares equal to `root`.
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        let normal = normalize(path);
        normal.canonicalize().unwrap_or(normal)
    })
}

/// Lexically drop `.` segments and fold `..` into the preceding segment.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}
