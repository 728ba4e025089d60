//! # sitedown
//!
//! A minimal static site generator for a tree of Markdown notes. Every `.md`
//! file becomes a standalone HTML page at the same relative path, and the
//! home page gets a generated table of contents listing every page by title.
//!
//! # Pipeline
//!
//! ```text
//! 1. Discover   root/      →  sorted page paths     (filesystem → list)
//! 2. Title      page text  →  display title         (front matter / heading / file name)
//! 3. Render     page text  →  _site/<page>.html     (pandoc or built-in)
//! 4. Index      titles     →  _site/index.html      (nested list spliced into index.md)
//! ```
//!
//! Every build is a full rebuild into a freshly recreated output directory.
//! The steps run sequentially and the first failure aborts the build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading and validation, resolved [`config::SitePaths`] |
//! | [`discover`] | Walks the root and applies the inclusion rules |
//! | [`title`] | Title priority rule: front matter, `#`, `##`, fallback |
//! | [`naming`] | Fallback titles from file stems |
//! | [`toc`] | Navigation entries and index template substitution |
//! | [`render`] | [`render::Renderer`] trait with pandoc and built-in backends |
//! | [`build`] | Build driver tying the stages together |
//! | [`types`] | Shared types (`Page`, `TitleMap`, `BuildReport`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Paths
//!
//! No component reads a process-wide "site root". The root, output directory
//! and index template are resolved once into [`config::SitePaths`] and handed
//! to every stage, which is what lets each test build its own site in a temp
//! directory.
//!
//! ## Renderer as a Trait
//!
//! Rendering is the only step that talks to the outside world. Putting it
//! behind [`render::Renderer`] keeps discovery, titles and the index pure
//! enough to test without pandoc installed, and makes the in-process
//! [`render::BuiltinRenderer`] a drop-in alternative.
//!
//! ## Line Scan, Not YAML
//!
//! Only one metadata field exists (`title`). Front matter is scanned line by
//! line between its `---` delimiters; nothing else in it is interpreted.

pub mod build;
pub mod config;
pub mod discover;
pub mod naming;
pub mod output;
pub mod render;
pub mod title;
pub mod toc;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
